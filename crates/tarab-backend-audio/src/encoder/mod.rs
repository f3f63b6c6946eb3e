//! Artifact writing.
//!
//! Artifacts are written to a private temporary file next to their final
//! path and renamed into place only once complete, so concurrent readers
//! never see a partial file and failures leave nothing behind. MP3 output
//! is encoded from a staging WAV held in a temporary directory that is
//! removed on every exit path.

mod ffmpeg;

pub use ffmpeg::{
    mp3_args, EncoderConfig, FfmpegEncoder, DEFAULT_BITRATE_KBPS, DEFAULT_TIMEOUT_SECS,
    FFMPEG_ENV,
};

use std::fs::File;
use std::path::{Path, PathBuf};

use tarab_spec::OutputFormat;
use tempfile::{NamedTempFile, TempDir};
use tracing::debug;

use crate::error::{AudioError, AudioResult};
use crate::wav::{write_wav_file, WavInfo};

/// Prefix of in-progress files and staging directories.
pub const PARTIAL_PREFIX: &str = ".tarab-";

/// Mode requested for artifacts before the umask, matching `File::create`.
#[cfg(unix)]
const ARTIFACT_MODE: u32 = 0o666;

/// A finished artifact on disk.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Final path.
    pub path: PathBuf,
    /// Size of the file in bytes.
    pub file_size_bytes: u64,
    /// PCM facts of the encoded waveform.
    pub wav: WavInfo,
}

/// Writes `samples` to `final_path` in `format`.
///
/// The parent directory of `final_path` must exist.
pub fn write_artifact(
    samples: &[f64],
    sample_rate: u32,
    format: OutputFormat,
    final_path: &Path,
    encoder: &EncoderConfig,
) -> AudioResult<Artifact> {
    let dir = final_path.parent().unwrap_or_else(|| Path::new("."));

    let (part, wav) = match format {
        OutputFormat::Wav => {
            let part = partial_file(dir, format)?;
            let wav = write_wav_file(part.as_file(), samples, sample_rate).map_err(|e| match e {
                hound::Error::IoError(io) => AudioError::output_io(part.path(), io),
                other => AudioError::staging(part.path(), other),
            })?;
            (part, wav)
        }
        OutputFormat::Mp3 => {
            let staging_root = encoder.staging_dir.as_deref().unwrap_or(dir);
            let encoder = FfmpegEncoder::with_config(encoder.clone());
            // Fail before staging anything if there is no encoder.
            encoder.find_ffmpeg()?;

            let staged = StagedWav::write(staging_root, samples, sample_rate)?;
            let part = partial_file(dir, format)?;
            encoder.encode_mp3(&staged.path, part.path())?;
            (part, staged.info)
        }
    };

    part.persist(final_path)
        .map_err(|e| AudioError::output_io(final_path, e.error))?;
    let file_size_bytes = std::fs::metadata(final_path)
        .map_err(|e| AudioError::output_io(final_path, e))?
        .len();

    Ok(Artifact {
        path: final_path.to_path_buf(),
        file_size_bytes,
        wav,
    })
}

/// Encoder input. The directory and its WAV are deleted on drop.
struct StagedWav {
    _dir: TempDir,
    path: PathBuf,
    info: WavInfo,
}

impl StagedWav {
    fn write(root: &Path, samples: &[f64], sample_rate: u32) -> AudioResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix(PARTIAL_PREFIX)
            .tempdir_in(root)
            .map_err(|e| AudioError::staging(root, e))?;
        let path = dir.path().join("staging.wav");

        let file = File::create(&path).map_err(|e| AudioError::staging(&path, e))?;
        let info =
            write_wav_file(&file, samples, sample_rate).map_err(|e| AudioError::staging(&path, e))?;
        debug!(path = %path.display(), "staged pcm");

        Ok(Self {
            _dir: dir,
            path,
            info,
        })
    }
}

fn partial_file(dir: &Path, format: OutputFormat) -> AudioResult<NamedTempFile> {
    let suffix = format!(".{}.part", format.extension());
    let mut builder = tempfile::Builder::new();
    builder.prefix(PARTIAL_PREFIX).suffix(&suffix);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(ARTIFACT_MODE));
    }
    builder
        .tempfile_in(dir)
        .map_err(|e| AudioError::output_io(dir, e))
}
