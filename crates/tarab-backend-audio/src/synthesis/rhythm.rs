//! Percussion loop synthesis.
//!
//! One cycle of an iqa' pattern: every slot lasts one beat, onsets are a
//! low damped sine and rests are silence.

use std::f64::consts::PI;

use rand::Rng;
use tarab_spec::tables::PATTERN_SLOTS;
use tarab_spec::RhythmPattern;

use super::envelope::exp_decay;
use super::{linspace, samples_in, Voice};
use crate::error::{AudioError, AudioResult};

/// Pitch of the drum hit in Hz.
pub const DRUM_FREQUENCY_HZ: f64 = 60.0;

/// Decay rate of the drum hit per second.
pub const DRUM_DECAY: f64 = 10.0;

/// Peak level of the drum hit.
pub const DRUM_GAIN: f64 = 0.3;

/// Length of one beat in seconds.
pub fn beat_seconds(tempo_bpm: u32) -> f64 {
    60.0 / tempo_bpm as f64
}

/// A percussion pattern played at a tempo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RhythmTrack {
    /// Onset pattern.
    pub pattern: &'static RhythmPattern,
    /// Tempo in beats per minute.
    pub tempo_bpm: u32,
}

impl RhythmTrack {
    /// Creates a track.
    pub fn new(pattern: &'static RhythmPattern, tempo_bpm: u32) -> Self {
        Self { pattern, tempo_bpm }
    }

    /// Renders one full cycle of the pattern.
    pub fn generate(&self, sample_rate: u32) -> AudioResult<Vec<f64>> {
        if self.tempo_bpm == 0 {
            return Err(AudioError::invalid_param("tempo", "must be positive"));
        }
        let beat = beat_seconds(self.tempo_bpm);
        let beat_samples = samples_in(beat, sample_rate);
        if beat_samples == 0 {
            return Err(AudioError::synthesis(format!(
                "beat at {} BPM is shorter than one sample",
                self.tempo_bpm
            )));
        }

        let hit: Vec<f64> = linspace(beat, beat_samples)
            .map(|t| (2.0 * PI * DRUM_FREQUENCY_HZ * t).sin() * exp_decay(t, DRUM_DECAY, 1.0) * DRUM_GAIN)
            .collect();

        let mut samples = Vec::with_capacity(beat_samples * PATTERN_SLOTS);
        for &onset in self.pattern.slots() {
            if onset {
                samples.extend_from_slice(&hit);
            } else {
                samples.resize(samples.len() + beat_samples, 0.0);
            }
        }
        Ok(samples)
    }
}

impl Voice for RhythmTrack {
    fn render<R: Rng + ?Sized>(&self, sample_rate: u32, _rng: &mut R) -> AudioResult<Vec<f64>> {
        self.generate(sample_rate)
    }
}
