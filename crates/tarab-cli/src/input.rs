//! Request assembly from command-line arguments and request files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rand::Rng;
use tarab_spec::{derive_title, GenerationRequest};

/// Highest number used in fallback titles.
pub const FALLBACK_TITLE_MAX: u32 = 1000;

/// Returns the lyrics given inline or read from a file.
pub fn resolve_lyrics(inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (inline, file) {
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read lyrics file: {}", path.display())),
        (Some(_), Some(_)) => bail!("pass either --lyrics or --lyrics-file, not both"),
        (None, None) => bail!("no lyrics given; pass --lyrics or --lyrics-file"),
    }
}

/// Picks a title: the explicit one, else the first lyric line, else
/// `Generated Song N`.
pub fn resolve_title<R: Rng + ?Sized>(explicit: Option<&str>, lyrics: &str, rng: &mut R) -> String {
    if let Some(title) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        return title.to_string();
    }
    derive_title(lyrics).unwrap_or_else(|| {
        format!("Generated Song {}", rng.gen_range(1..=FALLBACK_TITLE_MAX))
    })
}

/// Reads a JSON array of requests.
///
/// Entries without an output directory get `default_dir`; entries without a
/// title get one derived from their lyrics.
pub fn load_batch(path: &Path, default_dir: &Path) -> Result<Vec<GenerationRequest>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read request file: {}", path.display()))?;
    parse_batch(&content, default_dir)
        .with_context(|| format!("invalid request file: {}", path.display()))
}

/// Parses a JSON array of requests. See [`load_batch`].
pub fn parse_batch(json: &str, default_dir: &Path) -> Result<Vec<GenerationRequest>> {
    let mut requests: Vec<GenerationRequest> = serde_json::from_str(json)?;
    let mut rng = rand::thread_rng();
    for request in &mut requests {
        if request.output_directory.as_os_str().is_empty() {
            request.output_directory = PathBuf::from(default_dir);
        }
        request.title = resolve_title(Some(&request.title), &request.lyrics, &mut rng);
    }
    Ok(requests)
}
