//! Error types for audio backend.

use std::path::{Path, PathBuf};

use tarab_spec::{BackendError, ErrorCode};
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during audio generation.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Internal synthesis error.
    #[error("synthesis error: {message}")]
    Synthesis {
        /// Error message.
        message: String,
    },

    /// ffmpeg executable not found.
    #[error("ffmpeg executable not found. Install ffmpeg and add it to PATH, or set TARAB_FFMPEG")]
    EncoderNotFound,

    /// Failed to spawn the encoder process.
    #[error("failed to spawn ffmpeg: {0}")]
    EncoderSpawn(#[source] std::io::Error),

    /// Encoder process timed out.
    #[error("ffmpeg timed out after {timeout_secs} seconds")]
    EncoderTimeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Encoder process exited with non-zero status.
    #[error("ffmpeg exited with status {exit_code}: {stderr}")]
    EncoderFailed {
        /// Process exit code (-1 when killed by a signal).
        exit_code: i32,
        /// Captured standard error.
        stderr: String,
    },

    /// Writing the PCM staging file for the encoder failed.
    #[error("failed to write staging WAV {path}: {source}")]
    Staging {
        /// Staging file or directory.
        path: PathBuf,
        /// Underlying WAV or I/O error.
        #[source]
        source: hound::Error,
    },

    /// Output directory or artifact could not be written.
    #[error("cannot write {path}: {source}")]
    OutputIo {
        /// Path being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generation was cancelled.
    #[error("generation cancelled before {stage}")]
    Cancelled {
        /// Stage that was about to run.
        stage: &'static str,
    },
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a synthesis error.
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis {
            message: message.into(),
        }
    }

    /// Creates an encoder failure error.
    pub fn encoder_failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::EncoderFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Creates a staging error for `path`. I/O errors are accepted too.
    pub fn staging(path: impl AsRef<Path>, source: impl Into<hound::Error>) -> Self {
        Self::Staging {
            path: path.as_ref().to_path_buf(),
            source: source.into(),
        }
    }

    /// Creates an output I/O error for `path`.
    pub fn output_io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::OutputIo {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidParameter { .. } => "AUDIO_001",
            AudioError::Synthesis { .. } => "AUDIO_002",
            AudioError::EncoderNotFound => "AUDIO_003",
            AudioError::EncoderSpawn(_) => "AUDIO_004",
            AudioError::EncoderTimeout { .. } => "AUDIO_005",
            AudioError::EncoderFailed { .. } => "AUDIO_006",
            AudioError::Staging { .. } => "AUDIO_007",
            AudioError::OutputIo { .. } => "AUDIO_008",
            AudioError::Io(_) => "AUDIO_009",
            AudioError::Cancelled { .. } => "AUDIO_010",
        }
    }

    fn error_code(&self) -> ErrorCode {
        match self {
            AudioError::InvalidParameter { .. } => ErrorCode::InvalidParameter,
            AudioError::Synthesis { .. } => ErrorCode::SynthesisFailure,
            AudioError::EncoderNotFound
            | AudioError::EncoderSpawn(_)
            | AudioError::EncoderTimeout { .. }
            | AudioError::EncoderFailed { .. }
            | AudioError::Staging { .. } => ErrorCode::EncodingFailure,
            AudioError::OutputIo { .. } | AudioError::Io(_) => ErrorCode::IoFailure,
            AudioError::Cancelled { .. } => ErrorCode::Cancelled,
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
