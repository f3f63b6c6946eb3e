//! Error types for request validation and generation reporting.

use serde::{Deserialize, Serialize};

/// Error taxonomy shared by every generation failure.
///
/// Backends map their own error variants onto one of these classes so
/// callers can react to the class without knowing backend internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// E001: A request parameter is outside its valid domain
    InvalidParameter,
    /// E002: Numerical failure while building the waveform
    SynthesisFailure,
    /// E003: The staging-to-compressed conversion failed
    EncodingFailure,
    /// E004: The output directory or final file could not be written
    IoFailure,
    /// E005: Generation was cancelled between pipeline stages
    Cancelled,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidParameter => "E001",
            ErrorCode::SynthesisFailure => "E002",
            ErrorCode::EncodingFailure => "E003",
            ErrorCode::IoFailure => "E004",
            ErrorCode::Cancelled => "E005",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Name of the offending request field (e.g., "tempo").
    pub field: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Creates a new validation error attached to a request field.
    pub fn with_field(
        code: ErrorCode,
        message: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref field) = self.field {
            write!(f, "{}: {} (field '{}')", self.code, self.message, field)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result of request validation.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self::default()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Joins every error message into a single line.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so the CLI and the
/// structured [`GenerationResult`](crate::GenerationResult) can report a
/// stable code and a taxonomy class without depending on backend crates.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001". These codes are stable and
    /// can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the taxonomy class of the error.
    fn error_code(&self) -> ErrorCode;

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
