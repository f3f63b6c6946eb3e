//! Doctor command implementation
//!
//! Checks the MP3 encoder and output directory permissions.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use tarab_backend_audio::encoder::FFMPEG_ENV;
use tarab_backend_audio::{AudioError, FfmpegEncoder};

/// Run the doctor command
///
/// Checks:
/// - ffmpeg installation (needed for MP3 only)
/// - Output directory permissions
///
/// # Returns
/// Exit code: 0 if all checks pass, 1 if any fail
pub fn run(out_dir: &Path) -> Result<ExitCode> {
    println!("{}", "Tarab Doctor".cyan().bold());
    println!("{}", "============".cyan());
    println!();

    let mut all_ok = true;

    println!("{}", "Versions:".bold());
    println!("  {} tarab-cli v{}", "->".green(), env!("CARGO_PKG_VERSION"));
    println!();

    println!("{}", "Dependencies:".bold());
    let encoder = FfmpegEncoder::new();
    match encoder.find_ffmpeg() {
        Ok(path) => match encoder.version() {
            Ok(version) => {
                println!("  {} {} ({})", "ok".green(), version, path.display());
            }
            Err(e) => {
                println!("  {} ffmpeg at {} failed: {}", "!!".red(), path.display(), e);
                all_ok = false;
            }
        },
        Err(AudioError::EncoderNotFound) => {
            println!("  {} ffmpeg not found", "!!".yellow());
            println!(
                "     {}",
                "ffmpeg is required for MP3 output; --format wav works without it.".dimmed()
            );
            println!(
                "     {}",
                format!("Install ffmpeg or point {} at the executable.", FFMPEG_ENV).dimmed()
            );
        }
        Err(e) => {
            println!("  {} ffmpeg check failed: {}", "!!".red(), e);
            all_ok = false;
        }
    }
    println!();

    println!("{}", "Permissions:".bold());
    match check_writable(out_dir) {
        Ok(()) => println!(
            "  {} Output directory is writable ({})",
            "ok".green(),
            out_dir.display()
        ),
        Err(e) => {
            println!(
                "  {} Cannot write to {}: {}",
                "!!".red(),
                out_dir.display(),
                e
            );
            all_ok = false;
        }
    }
    println!();

    if all_ok {
        println!("{} All checks passed!", "SUCCESS".green().bold());
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} Some checks failed. See above for details.",
            "WARNING".yellow().bold()
        );
        Ok(ExitCode::from(1))
    }
}

/// Creates `dir` if needed and writes and removes a probe file in it.
fn check_writable(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let probe = dir.join(".tarab_write_test");
    std::fs::write(&probe, "test")?;
    std::fs::remove_file(&probe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_writable_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("songs");
        check_writable(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn test_check_writable_fails_under_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("file");
        std::fs::write(&file, "x").unwrap();
        assert!(check_writable(&file.join("songs")).is_err());
    }
}
