//! The synthesis pipeline from a validated request to a normalized
//! waveform.
//!
//! Stages run in a fixed order: lead melody, harmony, rhythm, mix, emotion
//! coloration, normalization. The cancel flag is checked before each one.

use rand::Rng;
use tarab_spec::{
    estimate_duration_seconds, target_sample_count, validate_request, Emotion, GenerationRequest,
    Maqam, RhythmStyle,
};
use tracing::debug;

use crate::cancel::CancelFlag;
use crate::config::SynthConfig;
use crate::effects::apply_emotion;
use crate::error::{AudioError, AudioResult};
use crate::mixer::{normalize_peak, Mixer};
use crate::synthesis::harmony::Harmony;
use crate::synthesis::melody::PhraseSpec;
use crate::synthesis::rhythm::RhythmTrack;
use crate::synthesis::Voice;

/// Everything resolved from a request before synthesis starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisPlan {
    /// Resolved scale.
    pub maqam: Maqam,
    /// Resolved rhythm.
    pub style: RhythmStyle,
    /// Resolved emotion.
    pub emotion: Emotion,
    /// Tempo in BPM.
    pub tempo_bpm: u32,
    /// Song length in seconds.
    pub duration_seconds: f64,
    /// Song length in samples.
    pub target_samples: usize,
}

impl SynthesisPlan {
    /// Validates `request` and resolves its table entries.
    ///
    /// Fails with [`AudioError::InvalidParameter`] before any audio work if
    /// the request or the config is unusable.
    pub fn from_request(request: &GenerationRequest, config: &SynthConfig) -> AudioResult<Self> {
        config.validate()?;

        let validation = validate_request(request);
        if let Some(first) = validation.errors.first() {
            let name = first.field.clone().unwrap_or_else(|| "request".to_string());
            return Err(AudioError::invalid_param(name, validation.summary()));
        }

        let tempo_bpm = u32::try_from(request.tempo).map_err(|_| {
            AudioError::invalid_param("tempo", format!("{} BPM is out of range", request.tempo))
        })?;

        let duration_seconds = estimate_duration_seconds(&request.lyrics);
        Ok(Self {
            maqam: request.resolved_maqam(),
            style: request.resolved_style(),
            emotion: request.resolved_emotion(),
            tempo_bpm,
            duration_seconds,
            target_samples: target_sample_count(duration_seconds, config.sample_rate),
        })
    }

    /// The lead phrase for this plan.
    pub fn lead_phrase(&self, config: &SynthConfig) -> PhraseSpec {
        PhraseSpec::new(
            self.maqam.scale(),
            config.base_frequency,
            self.duration_seconds / config.phrases_per_song,
        )
        .notes(config.notes_per_phrase)
    }

    /// The percussion loop for this plan.
    pub fn rhythm_track(&self) -> RhythmTrack {
        RhythmTrack::new(self.style.pattern(), self.tempo_bpm)
    }
}

/// Runs every synthesis stage and returns the normalized waveform.
pub fn synthesize<R: Rng + ?Sized>(
    plan: &SynthesisPlan,
    config: &SynthConfig,
    rng: &mut R,
    cancel: &CancelFlag,
) -> AudioResult<Vec<f64>> {
    let sample_rate = config.sample_rate;

    cancel.check("melody")?;
    let lead = plan.lead_phrase(config);
    let melody = lead.render(sample_rate, rng)?;
    debug!(samples = melody.len(), "melody");

    cancel.check("harmony")?;
    let harmony = Harmony::generate(&lead, sample_rate, rng)?;
    debug!(samples = harmony.fifth.len(), "harmony");

    cancel.check("rhythm")?;
    let rhythm = plan.rhythm_track().render(sample_rate, rng)?;
    debug!(samples = rhythm.len(), tempo = plan.tempo_bpm, "rhythm");

    cancel.check("mix")?;
    let weights = &config.mix;
    let mut mixer = Mixer::new(plan.target_samples);
    mixer.add_loop(melody, weights.melody)?;
    mixer.add_loop(harmony.fifth, weights.fifth)?;
    mixer.add_loop(harmony.octave_below, weights.octave_below)?;
    mixer.add_loop(rhythm, weights.rhythm)?;
    let mut song = mixer.mix()?;

    cancel.check("effects")?;
    apply_emotion(&mut song, plan.emotion.profile(), &config.echo, sample_rate);

    cancel.check("normalize")?;
    let gain = normalize_peak(&mut song, config.headroom)?;
    debug!(gain, samples = song.len(), "normalized");

    Ok(song)
}
