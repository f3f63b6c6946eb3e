//! Request validation and duration estimation.
//!
//! Validation only covers inputs that would make synthesis undefined. Unknown
//! categorical names are not errors; see [`crate::tables`].

use crate::error::{ErrorCode, ValidationError, ValidationResult};
use crate::request::GenerationRequest;

/// Seconds of audio per lyric word.
pub const SECONDS_PER_WORD: f64 = 2.0;

/// Shortest song generated, in seconds.
pub const MIN_DURATION_SECONDS: f64 = 120.0;

/// Longest song generated, in seconds.
pub const MAX_DURATION_SECONDS: f64 = 300.0;

/// Counts whitespace-separated words.
pub fn word_count(lyrics: &str) -> usize {
    lyrics.split_whitespace().count()
}

/// Estimates the song duration from the lyrics: two seconds per word,
/// clamped to `[MIN_DURATION_SECONDS, MAX_DURATION_SECONDS]`.
///
/// # Example
/// ```
/// use tarab_spec::estimate_duration_seconds;
///
/// assert_eq!(estimate_duration_seconds("short"), 120.0);
/// assert_eq!(estimate_duration_seconds(&"word ".repeat(80)), 160.0);
/// assert_eq!(estimate_duration_seconds(&"word ".repeat(500)), 300.0);
/// ```
pub fn estimate_duration_seconds(lyrics: &str) -> f64 {
    (word_count(lyrics) as f64 * SECONDS_PER_WORD).clamp(MIN_DURATION_SECONDS, MAX_DURATION_SECONDS)
}

/// Number of samples covering `duration_seconds` at `sample_rate`.
pub fn target_sample_count(duration_seconds: f64, sample_rate: u32) -> usize {
    (duration_seconds * sample_rate as f64).round() as usize
}

/// Validates a request before any synthesis work begins.
///
/// Checks:
/// - tempo is a positive integer
/// - lyrics contain at least one word
/// - an output directory is given
pub fn validate_request(request: &GenerationRequest) -> ValidationResult {
    let mut result = ValidationResult::success();

    if request.tempo <= 0 {
        result.add_error(ValidationError::with_field(
            ErrorCode::InvalidParameter,
            format!("tempo must be a positive BPM value, got {}", request.tempo),
            "tempo",
        ));
    }

    if word_count(&request.lyrics) == 0 {
        result.add_error(ValidationError::with_field(
            ErrorCode::InvalidParameter,
            "lyrics are empty; at least one word is needed to estimate the duration",
            "lyrics",
        ));
    }

    if request.output_directory.as_os_str().is_empty() {
        result.add_error(ValidationError::with_field(
            ErrorCode::InvalidParameter,
            "output directory is empty",
            "output_directory",
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  \n\t "), 0);
        assert_eq!(word_count("ya habibi\nya nour"), 4);
    }

    #[test]
    fn test_duration_clamps() {
        assert_eq!(estimate_duration_seconds("a"), MIN_DURATION_SECONDS);
        assert_eq!(estimate_duration_seconds(&"w ".repeat(60)), 120.0);
        assert_eq!(estimate_duration_seconds(&"w ".repeat(61)), 122.0);
        assert_eq!(estimate_duration_seconds(&"w ".repeat(150)), 300.0);
        assert_eq!(estimate_duration_seconds(&"w ".repeat(151)), MAX_DURATION_SECONDS);
    }

    #[test]
    fn test_target_sample_count() {
        assert_eq!(target_sample_count(120.0, 44100), 5_292_000);
        assert_eq!(target_sample_count(0.5, 44100), 22050);
        assert_eq!(target_sample_count(0.00001, 44100), 0);
    }

    #[test]
    fn test_validate_tempo() {
        for tempo in [0, -1, -120] {
            let request = GenerationRequest::new("t", "some lyrics", "out").tempo(tempo);
            let result = validate_request(&request);
            assert!(!result.is_ok(), "tempo {} should be rejected", tempo);
            assert_eq!(result.errors[0].field.as_deref(), Some("tempo"));
        }

        let request = GenerationRequest::new("t", "some lyrics", "out").tempo(1);
        assert!(validate_request(&request).is_ok());
    }

    #[test]
    fn test_validate_lyrics() {
        let request = GenerationRequest::new("t", "", "out");
        let result = validate_request(&request);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field.as_deref(), Some("lyrics"));
    }

    #[test]
    fn test_validate_output_directory() {
        let request = GenerationRequest::new("t", "lyrics", "");
        let result = validate_request(&request);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].field.as_deref(), Some("output_directory"));
    }
}
