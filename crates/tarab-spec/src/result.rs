//! Structured generation result returned to callers.

use serde::{Deserialize, Serialize};

use crate::error::{BackendError, ErrorCode};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Outcome of one generation request.
///
/// Exactly one of the success fields or `error` is populated, mirrored by
/// `success`. Absent fields are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Whether an artifact was written.
    pub success: bool,
    /// Full path of the artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Artifact filename within the output directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Artifact size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<u64>,
    /// Artifact size in MiB, rounded to two decimals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size_mb: Option<f64>,
    /// Duration of the synthesized waveform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// Number of mono samples synthesized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<usize>,
    /// BLAKE3 hash of the 16-bit PCM data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
    /// Human-readable failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Taxonomy class of the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorCode>,
    /// Stable backend error code (e.g., "AUDIO_001").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl GenerationResult {
    /// Creates a success result.
    pub fn succeeded(
        file_path: impl Into<String>,
        filename: impl Into<String>,
        file_size_bytes: u64,
        duration_seconds: f64,
        sample_count: usize,
        pcm_hash: impl Into<String>,
    ) -> Self {
        let file_size_mb = (file_size_bytes as f64 / BYTES_PER_MB * 100.0).round() / 100.0;
        Self {
            success: true,
            file_path: Some(file_path.into()),
            filename: Some(filename.into()),
            file_size_bytes: Some(file_size_bytes),
            file_size_mb: Some(file_size_mb),
            duration_seconds: Some(duration_seconds),
            sample_count: Some(sample_count),
            pcm_hash: Some(pcm_hash.into()),
            error: None,
            error_kind: None,
            error_code: None,
        }
    }

    /// Creates a failure result from any backend error.
    pub fn failed<E: BackendError>(err: &E) -> Self {
        Self {
            error_kind: Some(err.error_code()),
            error_code: Some(err.code().to_string()),
            ..Self::failed_with_message(err.message())
        }
    }

    /// Creates a failure result with only a message.
    pub fn failed_with_message(message: impl Into<String>) -> Self {
        Self {
            success: false,
            file_path: None,
            filename: None,
            file_size_bytes: None,
            file_size_mb: None,
            duration_seconds: None,
            sample_count: None,
            pcm_hash: None,
            error: Some(message.into()),
            error_kind: None,
            error_code: None,
        }
    }
}
