//! Test harness utilities for running generations and inspecting outputs.

use std::fs;
use std::path::{Path, PathBuf};

use tarab_backend_audio::{FfmpegEncoder, GeneratorConfig};
use tarab_spec::{GenerationRequest, OutputFormat};
use tempfile::TempDir;

/// A scratch directory for one test.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// A not-yet-created output directory inside the harness.
    pub fn out_dir(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    /// The request used by the reference scenario: 40 words, rast,
    /// classical, sad, egyptian, 90 BPM.
    pub fn reference_request(&self, format: OutputFormat) -> GenerationRequest {
        GenerationRequest::new("Test", "word ".repeat(40), self.out_dir("songs"))
            .maqam("rast")
            .style("classical")
            .emotion("sad")
            .region("egyptian")
            .tempo(90)
            .format(format)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Production configuration (44.1 kHz, 192 kbps).
pub fn production_config() -> GeneratorConfig {
    GeneratorConfig::default()
}

/// Check if ffmpeg is available in the environment.
pub fn is_ffmpeg_available() -> bool {
    FfmpegEncoder::new().version().is_ok()
}

/// Names of the regular files in `dir`, sorted. Empty if `dir` is missing.
pub fn list_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Returns true if `path` starts with an MPEG audio frame or an ID3 tag.
pub fn looks_like_mp3(path: &Path) -> bool {
    let Ok(bytes) = fs::read(path) else {
        return false;
    };
    if bytes.len() < 3 {
        return false;
    }
    bytes.starts_with(b"ID3") || (bytes[0] == 0xFF && bytes[1] & 0xE0 == 0xE0)
}
