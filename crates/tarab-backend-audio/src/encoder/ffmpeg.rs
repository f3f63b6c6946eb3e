//! ffmpeg subprocess for MP3 encoding.
//!
//! The encoder reads a staging WAV and writes a constant bit rate MP3 with
//! libmp3lame. ffmpeg is located through the config, the `TARAB_FFMPEG`
//! environment variable, `PATH`, and finally common install locations.

use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::error::{AudioError, AudioResult};

/// Environment variable overriding the ffmpeg executable.
pub const FFMPEG_ENV: &str = "TARAB_FFMPEG";

/// MP3 bit rate in kbps.
pub const DEFAULT_BITRATE_KBPS: u32 = 192;

/// Seconds an encode may run before ffmpeg is killed.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

#[cfg(windows)]
const EXECUTABLE: &str = "ffmpeg.exe";
#[cfg(not(windows))]
const EXECUTABLE: &str = "ffmpeg";

#[cfg(windows)]
const INSTALL_LOCATIONS: &[&str] = &[
    "C:\\ffmpeg\\bin\\ffmpeg.exe",
    "C:\\Program Files\\ffmpeg\\bin\\ffmpeg.exe",
];
#[cfg(target_os = "macos")]
const INSTALL_LOCATIONS: &[&str] = &["/opt/homebrew/bin/ffmpeg", "/usr/local/bin/ffmpeg"];
#[cfg(all(unix, not(target_os = "macos")))]
const INSTALL_LOCATIONS: &[&str] = &["/usr/bin/ffmpeg", "/usr/local/bin/ffmpeg", "/snap/bin/ffmpeg"];

/// Configuration for the MP3 encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderConfig {
    /// Explicit ffmpeg executable. When set, no other location is searched.
    pub ffmpeg_path: Option<PathBuf>,
    /// Constant bit rate in kbps.
    pub bitrate_kbps: u32,
    /// Maximum encode time.
    pub timeout: Duration,
    /// Where the staging WAV is written. Defaults to the output directory.
    pub staging_dir: Option<PathBuf>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: None,
            bitrate_kbps: DEFAULT_BITRATE_KBPS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            staging_dir: None,
        }
    }
}

impl EncoderConfig {
    /// Sets the ffmpeg executable.
    pub fn ffmpeg_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffmpeg_path = Some(path.into());
        self
    }

    /// Sets the bit rate in kbps.
    pub fn bitrate_kbps(mut self, kbps: u32) -> Self {
        self.bitrate_kbps = kbps;
        self
    }

    /// Sets the timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Sets the directory that holds the staging WAV.
    pub fn staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = Some(dir.into());
        self
    }
}

/// Runs ffmpeg to turn WAV files into MP3.
#[derive(Debug, Clone, Default)]
pub struct FfmpegEncoder {
    config: EncoderConfig,
}

impl FfmpegEncoder {
    /// Creates an encoder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder with the given configuration.
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Finds the ffmpeg executable.
    ///
    /// An explicit path in the config is authoritative: if it does not
    /// exist the lookup fails instead of searching elsewhere.
    pub fn find_ffmpeg(&self) -> AudioResult<PathBuf> {
        if let Some(path) = &self.config.ffmpeg_path {
            return if path.is_file() {
                Ok(path.clone())
            } else {
                Err(AudioError::EncoderNotFound)
            };
        }

        let from_env = std::env::var_os(FFMPEG_ENV)
            .map(PathBuf::from)
            .filter(|p| p.is_file());
        from_env
            .or_else(|| which::which(EXECUTABLE).ok())
            .or_else(|| {
                INSTALL_LOCATIONS
                    .iter()
                    .map(PathBuf::from)
                    .find(|p| p.is_file())
            })
            .ok_or(AudioError::EncoderNotFound)
    }

    /// Returns the first line of `ffmpeg -version`.
    pub fn version(&self) -> AudioResult<String> {
        let ffmpeg = self.find_ffmpeg()?;
        let output = Command::new(&ffmpeg)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .map_err(AudioError::EncoderSpawn)?;
        if !output.status.success() {
            return Err(AudioError::encoder_failed(
                output.status.code().unwrap_or(-1),
                String::from_utf8_lossy(&output.stderr),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string())
    }

    /// Encodes `input` (WAV) into `output` (MP3, overwritten).
    pub fn encode_mp3(&self, input: &Path, output: &Path) -> AudioResult<()> {
        let ffmpeg = self.find_ffmpeg()?;
        debug!(ffmpeg = %ffmpeg.display(), input = %input.display(), output = %output.display(), "encoding mp3");

        let mut cmd = Command::new(&ffmpeg);
        cmd.args(mp3_args(input, output, self.config.bitrate_kbps))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        let child = cmd.spawn().map_err(AudioError::EncoderSpawn)?;
        let (status, stderr) = wait_with_timeout(child, self.config.timeout)?;

        if !status.success() {
            let exit_code = status.code().unwrap_or(-1);
            warn!(exit_code, stderr = %stderr.trim(), "ffmpeg failed");
            return Err(AudioError::encoder_failed(exit_code, stderr.trim()));
        }

        // A clean exit that wrote nothing is still a failed encode.
        let written = std::fs::metadata(output).map(|m| m.len()).unwrap_or(0);
        if written == 0 {
            warn!(output = %output.display(), "ffmpeg produced no output");
            return Err(AudioError::encoder_failed(0, "encoder produced an empty file"));
        }
        Ok(())
    }
}

/// Command line for a WAV to CBR MP3 encode.
///
/// The output container is forced because the destination is a temporary
/// file whose extension ffmpeg does not recognize.
pub fn mp3_args(input: &Path, output: &Path, bitrate_kbps: u32) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error", "-nostdin", "-y", "-i"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(input.into());
    args.extend(
        ["-vn", "-codec:a", "libmp3lame", "-b:a"]
            .into_iter()
            .map(OsString::from),
    );
    args.push(format!("{bitrate_kbps}k").into());
    args.push("-f".into());
    args.push("mp3".into());
    args.push(output.into());
    args
}

fn wait_with_timeout(mut child: Child, timeout: Duration) -> AudioResult<(ExitStatus, String)> {
    let start = Instant::now();

    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if start.elapsed() > timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(AudioError::EncoderTimeout {
                        timeout_secs: timeout.as_secs(),
                    });
                }
                std::thread::sleep(Duration::from_millis(50));
            }
            Err(e) => return Err(AudioError::EncoderSpawn(e)),
        }
    };

    let mut stderr = String::new();
    if let Some(mut err) = child.stderr.take() {
        let _ = err.read_to_string(&mut stderr);
    }

    Ok((status, stderr))
}
