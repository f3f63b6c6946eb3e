//! End-to-End Generation Tests for Tarab
//!
//! Each scenario runs in WAV, which needs no external tools, and again in
//! MP3 when ffmpeg is installed.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tarab-tests --test e2e_generation
//! ```

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tarab_backend_audio::{generate, try_generate, EncoderConfig, GeneratorConfig};
use tarab_spec::{
    estimate_duration_seconds, target_sample_count, ErrorCode, GenerationRequest, OutputFormat,
};
use tarab_tests::analyze_wav;
use tarab_tests::harness::{
    is_ffmpeg_available, list_files, looks_like_mp3, production_config, TestHarness,
};

fn skip_without_ffmpeg(test: &str) -> bool {
    if is_ffmpeg_available() {
        return false;
    }
    eprintln!("ffmpeg not available; skipping {}", test);
    true
}

// ============================================================================
// Scenario 1: a valid request produces a song
// ============================================================================

#[test]
fn test_reference_request_wav() {
    let harness = TestHarness::new();
    let request = harness.reference_request(OutputFormat::Wav);
    let result = generate(&request, &production_config());

    assert!(result.success, "generation failed: {:?}", result.error);
    let path = PathBuf::from(result.file_path.as_ref().unwrap());
    assert!(path.exists());
    assert_eq!(path.file_name().unwrap(), "Test_rast_classical.wav");
    assert!(result.file_size_bytes.unwrap() > 0);

    let duration = result.duration_seconds.unwrap();
    assert!((120.0..=300.0).contains(&duration));

    let stats = analyze_wav(&path).unwrap();
    assert_eq!(stats.channels, 1);
    assert_eq!(stats.bits_per_sample, 16);
    assert_eq!(stats.sample_rate, 44100);
    assert_eq!(stats.num_samples, 120 * 44100);
    assert!((stats.peak - 0.8).abs() < 1e-3, "peak {}", stats.peak);
    assert!(stats.rms > 0.01);
}

#[test]
fn test_reference_request_mp3() {
    if skip_without_ffmpeg("test_reference_request_mp3") {
        return;
    }
    let harness = TestHarness::new();
    let request = harness.reference_request(OutputFormat::Mp3);
    let result = generate(&request, &production_config());

    assert!(result.success, "generation failed: {:?}", result.error);
    let path = PathBuf::from(result.file_path.as_ref().unwrap());
    assert_eq!(path.file_name().unwrap(), "Test_rast_classical.mp3");
    assert!(looks_like_mp3(&path));

    // 192 kbps for 120 s is about 2.9 MB.
    let mb = result.file_size_mb.unwrap();
    assert!((2.0..4.0).contains(&mb), "unexpected size {} MB", mb);
    assert_eq!(list_files(&request.output_directory), vec!["Test_rast_classical.mp3"]);
}

#[test]
fn test_duration_follows_word_count() {
    let harness = TestHarness::new();
    let lyrics = "kalam ".repeat(90);
    let request = GenerationRequest::new("Long", lyrics.as_str(), harness.out_dir("songs"))
        .format(OutputFormat::Wav)
        .seed(1);
    let output = try_generate(&request, &production_config()).unwrap();

    assert_eq!(estimate_duration_seconds(&lyrics), 180.0);
    assert_eq!(output.sample_count, target_sample_count(180.0, 44100));
    assert_eq!(output.duration_seconds, 180.0);
}

// ============================================================================
// Scenario 2: a rejected request leaves nothing behind
// ============================================================================

#[test]
fn test_zero_tempo_is_rejected() {
    let harness = TestHarness::new();
    for format in [OutputFormat::Wav, OutputFormat::Mp3] {
        let request = harness.reference_request(format).tempo(0);
        let result = generate(&request, &production_config());

        assert!(!result.success);
        assert_eq!(result.error_kind, Some(ErrorCode::InvalidParameter));
        assert!(result.error.as_deref().unwrap().contains("tempo"));
        assert!(result.file_path.is_none());
        assert!(!request.output_directory.exists());
    }
}

#[test]
fn test_empty_lyrics_are_rejected() {
    let harness = TestHarness::new();
    let request = GenerationRequest::new("Quiet", " \n\t", harness.out_dir("songs"))
        .format(OutputFormat::Wav);
    let result = generate(&request, &production_config());

    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorCode::InvalidParameter));
    assert!(!request.output_directory.exists());
}

#[test]
fn test_missing_encoder_leaves_nothing() {
    let harness = TestHarness::new();
    let request = harness.reference_request(OutputFormat::Mp3);
    let mut config = GeneratorConfig::default();
    config.encoder = EncoderConfig::default().ffmpeg_path(harness.path().join("no-ffmpeg"));

    let result = generate(&request, &config);
    assert!(!result.success);
    assert_eq!(result.error_kind, Some(ErrorCode::EncodingFailure));
    assert_eq!(result.error_code.as_deref(), Some("AUDIO_003"));
    assert!(list_files(&request.output_directory).is_empty());
}

// ============================================================================
// Scenario 3: unknown names fall back to defaults
// ============================================================================

#[test]
fn test_unknown_maqam_uses_hijaz() {
    let harness = TestHarness::new();
    let unknown = harness
        .reference_request(OutputFormat::Wav)
        .maqam("nonexistent_maqam")
        .seed(77);
    let hijaz = harness
        .reference_request(OutputFormat::Wav)
        .maqam("hijaz")
        .seed(77);

    let unknown_out = try_generate(&unknown, &production_config()).unwrap();
    let hijaz_out = try_generate(&hijaz, &production_config()).unwrap();

    assert_eq!(unknown_out.filename, "Test_nonexistent_maqam_classical.wav");
    // Same seed and the same scale give the same waveform.
    assert_eq!(unknown_out.pcm_hash, hijaz_out.pcm_hash);
}

#[test]
fn test_unknown_maqam_mp3() {
    if skip_without_ffmpeg("test_unknown_maqam_mp3") {
        return;
    }
    let harness = TestHarness::new();
    let request = harness
        .reference_request(OutputFormat::Mp3)
        .maqam("nonexistent_maqam");
    let result = generate(&request, &production_config());
    assert!(result.success, "generation failed: {:?}", result.error);
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_seeded_requests_reproduce() {
    let harness = TestHarness::new();
    let request = harness.reference_request(OutputFormat::Wav).seed(2024);

    let first = generate(&request, &production_config());
    let first_bytes = std::fs::read(first.file_path.as_ref().unwrap()).unwrap();
    let second = generate(&request, &production_config());
    let second_bytes = std::fs::read(second.file_path.as_ref().unwrap()).unwrap();

    assert_eq!(first.pcm_hash, second.pcm_hash);
    assert!(first_bytes == second_bytes);
}

#[test]
fn test_result_serializes() {
    let harness = TestHarness::new();
    let request = harness.reference_request(OutputFormat::Wav).tempo(-1);
    let result = generate(&request, &production_config());

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error_kind"], "invalid_parameter");
    assert!(json.get("file_path").is_none());
}
