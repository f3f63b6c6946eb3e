//! Tarab Request & Table Library
//!
//! This crate provides the types shared by every Tarab component: the
//! generation request and result, the static parameter tables that map
//! categorical names onto synthesis parameters, and request validation.
//!
//! # Overview
//!
//! A generation request names a maqam, a rhythm style and an emotion. None of
//! those names is ever rejected: unknown values resolve to documented defaults
//! (`hijaz`, `modern`, `happy`) so malformed client input never aborts
//! generation. Only the numeric inputs (tempo, lyrics length) are validated.
//!
//! # Example
//!
//! ```
//! use tarab_spec::{resolve_scale, GenerationRequest, Maqam};
//! use tarab_spec::validation::validate_request;
//!
//! let request = GenerationRequest::new("Ya Leil", "ya leil ya ein", "/tmp/out")
//!     .maqam("rast")
//!     .style("classical")
//!     .tempo(90);
//!
//! assert!(validate_request(&request).is_ok());
//! assert_eq!(request.resolved_maqam(), Maqam::Rast);
//!
//! // Unknown names fall back to the default scale.
//! assert_eq!(resolve_scale("nonexistent"), Maqam::Hijaz.scale());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error codes, validation errors and the `BackendError` trait
//! - [`tables`]: Maqam scales, rhythm patterns and emotion profiles
//! - [`request`]: The generation request and its output format
//! - [`result`]: The structured generation result returned to callers
//! - [`validation`]: Request validation and duration estimation
//! - [`naming`]: Filename sanitization and title derivation
//! - [`brief`]: Human-readable composition brief

pub mod brief;
pub mod error;
pub mod naming;
pub mod request;
pub mod result;
pub mod tables;
pub mod validation;

// Re-export commonly used types at the crate root
pub use brief::{CompositionBrief, TempoCharacter};
pub use error::{BackendError, ErrorCode, ValidationError, ValidationResult};
pub use naming::{derive_title, output_filename, sanitize_component};
pub use request::{GenerationRequest, OutputFormat};
pub use result::GenerationResult;
pub use tables::{
    resolve_emotion, resolve_rhythm_pattern, resolve_scale, Emotion, EmotionProfile, Maqam,
    MaqamScale, RhythmPattern, RhythmStyle,
};
pub use validation::{
    estimate_duration_seconds, target_sample_count, validate_request, word_count,
    MAX_DURATION_SECONDS, MIN_DURATION_SECONDS, SECONDS_PER_WORD,
};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_parse_request_json() {
        let json = r#"{
            "title": "Test",
            "lyrics": "habibi ya nour el ain",
            "maqam": "bayati",
            "style": "folk",
            "emotion": "romantic",
            "region": "egyptian",
            "tempo": 100,
            "output_directory": "songs"
        }"#;

        let request: GenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.resolved_maqam(), Maqam::Bayati);
        assert_eq!(request.resolved_style(), RhythmStyle::Folk);
        assert_eq!(request.resolved_emotion(), Emotion::Romantic);
        assert_eq!(request.format, OutputFormat::Mp3);
        assert_eq!(request.seed, None);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_parse_request_json_defaults() {
        let json = r#"{
            "title": "Minimal",
            "lyrics": "one two three"
        }"#;

        let request: GenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.maqam, "hijaz");
        assert_eq!(request.style, "modern");
        assert_eq!(request.emotion, "happy");
        assert_eq!(request.region, "mixed");
        assert_eq!(request.tempo, 120);
    }

    #[test]
    fn test_invalid_request_reports_codes() {
        let request = GenerationRequest::new("Bad", "   ", "out").tempo(0);
        let result = validate_request(&request);

        assert!(!result.is_ok());
        assert_eq!(result.errors.len(), 2);
        assert!(result
            .errors
            .iter()
            .all(|e| e.code == ErrorCode::InvalidParameter));
    }
}
