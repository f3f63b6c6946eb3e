//! Melodic phrase synthesis over a maqam scale.
//!
//! A phrase is a fixed number of equal-length notes. Each note picks a scale
//! degree at random, favouring the tonic, third and fifth, and is rendered
//! as a vibrato sine under an exponential decay.

use std::f64::consts::PI;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tarab_spec::tables::SCALE_DEGREES;
use tarab_spec::MaqamScale;

use super::envelope::exp_decay;
use super::{linspace, samples_in, Voice};
use crate::config::DEFAULT_NOTES_PER_PHRASE;
use crate::error::{AudioError, AudioResult};

/// Vibrato rate in Hz.
pub const VIBRATO_RATE_HZ: f64 = 6.0;

/// Relative depth of the vibrato applied to the phase.
pub const VIBRATO_DEPTH: f64 = 0.05;

/// E-folds of decay over one note.
pub const NOTE_DECAY: f64 = 3.0;

/// Relative weight of each scale degree. Degrees 0, 2 and 4 are twice as
/// likely as the others.
pub const DEGREE_WEIGHTS: [u32; SCALE_DEGREES] = [2, 1, 2, 1, 2, 1, 1];

/// Parameters of one melodic phrase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhraseSpec {
    /// Scale the degrees are drawn from.
    pub scale: &'static MaqamScale,
    /// Tonic frequency in Hz.
    pub base_frequency: f64,
    /// Total phrase length in seconds.
    pub duration_seconds: f64,
    /// Number of notes.
    pub notes: usize,
}

impl PhraseSpec {
    /// Creates a phrase of the default note count.
    pub fn new(scale: &'static MaqamScale, base_frequency: f64, duration_seconds: f64) -> Self {
        Self {
            scale,
            base_frequency,
            duration_seconds,
            notes: DEFAULT_NOTES_PER_PHRASE,
        }
    }

    /// Sets the number of notes.
    pub fn notes(mut self, notes: usize) -> Self {
        self.notes = notes;
        self
    }

    /// Returns the same phrase with the tonic multiplied by `ratio`.
    pub fn transposed(&self, ratio: f64) -> Self {
        Self {
            base_frequency: self.base_frequency * ratio,
            ..*self
        }
    }

    /// Length of a single note in seconds.
    pub fn note_seconds(&self) -> f64 {
        self.duration_seconds / self.notes as f64
    }

    /// Renders the phrase and reports the degrees that were chosen.
    pub fn generate<R: Rng + ?Sized>(&self, sample_rate: u32, rng: &mut R) -> AudioResult<Phrase> {
        if self.notes == 0 {
            return Err(AudioError::invalid_param("notes", "a phrase needs at least one note"));
        }
        let note_seconds = self.note_seconds();
        let note_samples = samples_in(note_seconds, sample_rate);
        if note_samples == 0 {
            return Err(AudioError::synthesis(format!(
                "note of {note_seconds} s is shorter than one sample at {sample_rate} Hz"
            )));
        }

        let picker = WeightedIndex::new(DEGREE_WEIGHTS)
            .map_err(|e| AudioError::synthesis(format!("degree weights: {e}")))?;

        let mut samples = Vec::with_capacity(note_samples * self.notes);
        let mut degrees = Vec::with_capacity(self.notes);
        for _ in 0..self.notes {
            let degree = picker.sample(rng);
            let frequency = self.scale.frequency(self.base_frequency, degree);
            samples.extend(note(frequency, note_seconds, note_samples));
            degrees.push(degree);
        }

        Ok(Phrase { samples, degrees })
    }
}

impl Voice for PhraseSpec {
    fn render<R: Rng + ?Sized>(&self, sample_rate: u32, rng: &mut R) -> AudioResult<Vec<f64>> {
        Ok(self.generate(sample_rate, rng)?.samples)
    }
}

/// A rendered phrase.
#[derive(Debug, Clone)]
pub struct Phrase {
    /// Concatenated note samples.
    pub samples: Vec<f64>,
    /// Scale degree of each note, in order.
    pub degrees: Vec<usize>,
}

/// Renders one note of `num_samples` samples spanning `seconds`.
pub fn note(frequency: f64, seconds: f64, num_samples: usize) -> impl Iterator<Item = f64> {
    linspace(seconds, num_samples).map(move |t| {
        let vibrato = 1.0 + VIBRATO_DEPTH * (2.0 * PI * VIBRATO_RATE_HZ * t).sin();
        (2.0 * PI * frequency * t * vibrato).sin() * exp_decay(t, NOTE_DECAY, seconds)
    })
}
