//! Tarab End-to-End Test Infrastructure
//!
//! Integration tests for the request-to-file flow:
//!
//! - Generation: request -> WAV/MP3 artifact
//! - Failure paths: rejected requests leave no files behind
//! - Concurrency: parallel requests into one directory
//!
//! ## Running Tests
//!
//! ```bash
//! # WAV scenarios run everywhere
//! cargo test -p tarab-tests
//!
//! # MP3 scenarios need ffmpeg on PATH or TARAB_FFMPEG
//! ```

pub mod audio_analysis;
pub mod harness;

pub use audio_analysis::{analyze_wav, WavStats};
pub use harness::{is_ffmpeg_available, list_files, TestHarness};
