//! Tarab Audio Backend
//!
//! Procedural synthesis of short songs in Arabic maqam scales.
//!
//! # Overview
//!
//! A song is three loops tiled to a length estimated from the lyrics:
//!
//! - **Melody** - a phrase of randomly chosen scale degrees with vibrato
//! - **Harmony** - two more phrases, a fifth above and an octave below
//! - **Rhythm** - one cycle of an iqa' onset pattern at the request tempo
//!
//! The weighted mix is colored by the emotion profile (brightness gain and
//! a single echo tap), normalized to a fixed peak and written as 16-bit
//! mono WAV or, through ffmpeg, as 192 kbps MP3.
//!
//! # Randomness
//!
//! Melodic choices come from an injected PCG32 generator. Requests with a
//! seed reproduce the same PCM data (compare the BLAKE3 `pcm_hash`);
//! requests without one draw from OS entropy.
//!
//! # Example
//!
//! ```no_run
//! use tarab_backend_audio::{generate, GeneratorConfig};
//! use tarab_spec::{GenerationRequest, OutputFormat};
//!
//! let request = GenerationRequest::new("Layali", "ya leil ya ein", "songs")
//!     .maqam("bayati")
//!     .format(OutputFormat::Wav)
//!     .seed(7);
//! let result = generate(&request, &GeneratorConfig::default());
//! assert!(result.success);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point, never fails
//! - [`pipeline`] - Stage ordering from request to waveform
//! - [`synthesis`] - Melody, harmony and rhythm voices
//! - [`mixer`] - Loop tiling, weighted mixing, normalization
//! - [`effects`] - Emotion coloration
//! - [`wav`] - PCM conversion and WAV writing
//! - [`encoder`] - Atomic artifact writing and the ffmpeg MP3 encoder

pub mod cancel;
pub mod config;
pub mod effects;
pub mod encoder;
pub mod error;
pub mod generate;
pub mod mixer;
pub mod pipeline;
pub mod rng;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use cancel::CancelFlag;
pub use config::{EchoParams, GeneratorConfig, MixWeights, SynthConfig};
pub use encoder::{EncoderConfig, FfmpegEncoder};
pub use error::{AudioError, AudioResult};
pub use generate::{
    generate, generate_cancellable, generate_with_rng, try_generate, try_generate_with_rng,
    GenerateOutput,
};
pub use pipeline::{synthesize, SynthesisPlan};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use tarab_spec::{GenerationRequest, OutputFormat};

    fn config() -> GeneratorConfig {
        GeneratorConfig::with_synth(SynthConfig::default().sample_rate(8000))
    }

    #[test]
    fn test_full_generation_pipeline() {
        let tmp = tempfile::tempdir().unwrap();
        let request = GenerationRequest::new("Sahar", "nour ".repeat(75), tmp.path())
            .maqam("kurd")
            .style("folk")
            .emotion("energetic")
            .tempo(140)
            .seed(2024)
            .format(OutputFormat::Wav);

        let output = try_generate(&request, &config()).expect("generation should succeed");
        assert_eq!(output.filename, "Sahar_kurd_folk.wav");
        assert_eq!(output.duration_seconds, 150.0);

        let mut reader = hound::WavReader::open(&output.path).unwrap();
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.spec().sample_rate, 8000);
        assert_eq!(reader.len() as usize, output.sample_count);

        let peak = reader
            .samples::<i16>()
            .map(|s| s.unwrap().unsigned_abs())
            .max()
            .unwrap();
        // 0.8 of full scale
        assert!((i32::from(peak) - 26214).abs() <= 1);
    }

    #[test]
    fn test_generation_determinism() {
        let tmp = tempfile::tempdir().unwrap();
        let request = GenerationRequest::new("Echo", "a b c", tmp.path())
            .seed(42)
            .format(OutputFormat::Wav);

        let first = generate(&request, &config());
        let bytes_first = std::fs::read(first.file_path.as_ref().unwrap()).unwrap();
        let second = generate(&request, &config());
        let bytes_second = std::fs::read(second.file_path.as_ref().unwrap()).unwrap();

        assert_eq!(first.pcm_hash, second.pcm_hash);
        assert!(bytes_first == bytes_second);
    }

    #[test]
    fn test_every_emotion_produces_full_scale_peak() {
        let tmp = tempfile::tempdir().unwrap();
        let synth = SynthConfig::default().sample_rate(4000);
        for emotion in tarab_spec::Emotion::ALL {
            let request = GenerationRequest::new("e", "x", tmp.path()).emotion(emotion.name());
            let plan = SynthesisPlan::from_request(&request, &synth).unwrap();
            let song = synthesize(&plan, &synth, &mut rng::create_rng(3), &CancelFlag::new()).unwrap();
            assert!((mixer::peak(&song) - 0.8).abs() < 1e-9, "{}", emotion.name());
        }
    }
}
