//! Request-level entry points.
//!
//! [`generate`] never fails: every error becomes a failure
//! [`GenerationResult`]. The `try_` variants return the typed error
//! instead.

use std::path::PathBuf;

use rand::Rng;
use tarab_spec::{output_filename, GenerationRequest, GenerationResult};
use tracing::{info, info_span, warn};

use crate::cancel::CancelFlag;
use crate::config::GeneratorConfig;
use crate::encoder::write_artifact;
use crate::error::{AudioError, AudioResult};
use crate::pipeline::{synthesize, SynthesisPlan};
use crate::rng::rng_for;

/// A successfully written song.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOutput {
    /// Path of the artifact.
    pub path: PathBuf,
    /// File name of the artifact.
    pub filename: String,
    /// Size of the artifact in bytes.
    pub file_size_bytes: u64,
    /// Length of the waveform in seconds.
    pub duration_seconds: f64,
    /// Number of samples in the waveform.
    pub sample_count: usize,
    /// BLAKE3 hash of the 16-bit PCM data.
    pub pcm_hash: String,
}

impl GenerateOutput {
    /// Converts to the serializable result record.
    pub fn into_result(self) -> GenerationResult {
        GenerationResult::succeeded(
            self.path.to_string_lossy(),
            self.filename,
            self.file_size_bytes,
            self.duration_seconds,
            self.sample_count,
            self.pcm_hash,
        )
    }
}

/// Generates a song, seeding from `request.seed` or from entropy.
pub fn generate(request: &GenerationRequest, config: &GeneratorConfig) -> GenerationResult {
    generate_cancellable(request, config, &CancelFlag::new())
}

/// Like [`generate`], stopping early once `cancel` is raised.
pub fn generate_cancellable(
    request: &GenerationRequest,
    config: &GeneratorConfig,
    cancel: &CancelFlag,
) -> GenerationResult {
    let mut rng = rng_for(request.seed);
    generate_with_rng(request, config, &mut rng, cancel)
}

/// Generates a song drawing melody choices from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    request: &GenerationRequest,
    config: &GeneratorConfig,
    rng: &mut R,
    cancel: &CancelFlag,
) -> GenerationResult {
    match try_generate_with_rng(request, config, rng, cancel) {
        Ok(output) => output.into_result(),
        Err(err) => GenerationResult::failed(&err),
    }
}

/// Generates a song, returning the typed error on failure.
pub fn try_generate(
    request: &GenerationRequest,
    config: &GeneratorConfig,
) -> AudioResult<GenerateOutput> {
    let mut rng = rng_for(request.seed);
    try_generate_with_rng(request, config, &mut rng, &CancelFlag::new())
}

/// Generates a song from an explicit RNG, returning the typed error on
/// failure.
///
/// Nothing is written to the output directory unless synthesis succeeds,
/// and a failed write leaves no partial file behind.
pub fn try_generate_with_rng<R: Rng + ?Sized>(
    request: &GenerationRequest,
    config: &GeneratorConfig,
    rng: &mut R,
    cancel: &CancelFlag,
) -> AudioResult<GenerateOutput> {
    let span = info_span!(
        "generate",
        title = %request.title,
        maqam = %request.maqam,
        style = %request.style,
        format = %request.format,
    );
    let _enter = span.enter();

    let result = run(request, config, rng, cancel);
    match &result {
        Ok(output) => info!(
            path = %output.path.display(),
            bytes = output.file_size_bytes,
            seconds = output.duration_seconds,
            "song written"
        ),
        Err(err) => warn!(error = %err, "generation failed"),
    }
    result
}

fn run<R: Rng + ?Sized>(
    request: &GenerationRequest,
    config: &GeneratorConfig,
    rng: &mut R,
    cancel: &CancelFlag,
) -> AudioResult<GenerateOutput> {
    let synth = &config.synth;
    let plan = SynthesisPlan::from_request(request, synth)?;
    info!(
        maqam = plan.maqam.name(),
        style = plan.style.name(),
        emotion = plan.emotion.name(),
        tempo = plan.tempo_bpm,
        seconds = plan.duration_seconds,
        "synthesizing"
    );

    let samples = synthesize(&plan, synth, rng, cancel)?;

    cancel.check("write")?;
    let dir = &request.output_directory;
    std::fs::create_dir_all(dir).map_err(|e| AudioError::output_io(dir, e))?;

    let filename = output_filename(&request.title, &request.maqam, &request.style, request.format);
    let path = dir.join(&filename);
    let artifact = write_artifact(&samples, synth.sample_rate, request.format, &path, &config.encoder)?;

    Ok(GenerateOutput {
        path: artifact.path,
        filename,
        file_size_bytes: artifact.file_size_bytes,
        duration_seconds: samples.len() as f64 / synth.sample_rate as f64,
        sample_count: samples.len(),
        pcm_hash: artifact.wav.pcm_hash,
    })
}
