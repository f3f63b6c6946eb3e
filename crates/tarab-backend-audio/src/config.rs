//! Synthesis and generator configuration.

use crate::encoder::EncoderConfig;
use crate::error::{AudioError, AudioResult};

/// Output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Tonic of the lead melody (A3).
pub const DEFAULT_BASE_FREQUENCY: f64 = 220.0;

/// Notes in one melodic phrase.
pub const DEFAULT_NOTES_PER_PHRASE: usize = 16;

/// The lead phrase covers `1 / PHRASES_PER_SONG` of the song and is tiled.
pub const DEFAULT_PHRASES_PER_SONG: f64 = 4.0;

/// Peak amplitude after normalization, as a fraction of full scale.
pub const DEFAULT_HEADROOM: f64 = 0.8;

/// Echo delay in seconds.
pub const DEFAULT_ECHO_DELAY_SECONDS: f64 = 0.1;

/// Echo level relative to the dry signal.
pub const DEFAULT_ECHO_GAIN: f64 = 0.3;

/// Per-voice gains of the final mix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixWeights {
    /// Lead melody.
    pub melody: f64,
    /// Harmony voice a fifth above.
    pub fifth: f64,
    /// Harmony voice an octave below.
    pub octave_below: f64,
    /// Percussion.
    pub rhythm: f64,
}

impl MixWeights {
    /// Lead 0.4, each harmony 0.2, rhythm 0.2.
    pub const DEFAULT: MixWeights = MixWeights {
        melody: 0.4,
        fifth: 0.2,
        octave_below: 0.2,
        rhythm: 0.2,
    };

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.melody + self.fifth + self.octave_below + self.rhythm
    }
}

impl Default for MixWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Single-tap echo parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EchoParams {
    /// Delay of the echo tap in seconds.
    pub delay_seconds: f64,
    /// Gain of the echo tap.
    pub gain: f64,
}

impl Default for EchoParams {
    fn default() -> Self {
        Self {
            delay_seconds: DEFAULT_ECHO_DELAY_SECONDS,
            gain: DEFAULT_ECHO_GAIN,
        }
    }
}

/// Numeric parameters of the synthesis pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Tonic of the lead melody in Hz.
    pub base_frequency: f64,
    /// Notes per melodic phrase.
    pub notes_per_phrase: usize,
    /// Number of phrase repetitions covering the song.
    pub phrases_per_song: f64,
    /// Target peak after normalization.
    pub headroom: f64,
    /// Echo applied after the brightness gain.
    pub echo: EchoParams,
    /// Mix gains.
    pub mix: MixWeights,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            base_frequency: DEFAULT_BASE_FREQUENCY,
            notes_per_phrase: DEFAULT_NOTES_PER_PHRASE,
            phrases_per_song: DEFAULT_PHRASES_PER_SONG,
            headroom: DEFAULT_HEADROOM,
            echo: EchoParams::default(),
            mix: MixWeights::DEFAULT,
        }
    }
}

impl SynthConfig {
    /// Sets the sample rate.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the lead tonic frequency.
    pub fn base_frequency(mut self, hz: f64) -> Self {
        self.base_frequency = hz;
        self
    }

    /// Sets the number of notes per phrase.
    pub fn notes_per_phrase(mut self, notes: usize) -> Self {
        self.notes_per_phrase = notes;
        self
    }

    /// Sets the normalization target.
    pub fn headroom(mut self, headroom: f64) -> Self {
        self.headroom = headroom;
        self
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> AudioResult<()> {
        if self.sample_rate == 0 {
            return Err(AudioError::invalid_param("sample_rate", "must be positive"));
        }
        if !(self.base_frequency.is_finite() && self.base_frequency > 0.0) {
            return Err(AudioError::invalid_param(
                "base_frequency",
                format!("must be a positive frequency, got {}", self.base_frequency),
            ));
        }
        if self.notes_per_phrase == 0 {
            return Err(AudioError::invalid_param("notes_per_phrase", "must be at least 1"));
        }
        if !(self.phrases_per_song.is_finite() && self.phrases_per_song >= 1.0) {
            return Err(AudioError::invalid_param(
                "phrases_per_song",
                format!("must be at least 1, got {}", self.phrases_per_song),
            ));
        }
        if !(self.headroom > 0.0 && self.headroom <= 1.0) {
            return Err(AudioError::invalid_param(
                "headroom",
                format!("must be in (0, 1], got {}", self.headroom),
            ));
        }
        if !(self.echo.delay_seconds >= 0.0 && (0.0..1.0).contains(&self.echo.gain)) {
            return Err(AudioError::invalid_param(
                "echo",
                "delay must be non-negative and gain in [0, 1)",
            ));
        }
        if (self.mix.sum() - 1.0).abs() > 1e-9 {
            return Err(AudioError::invalid_param(
                "mix",
                format!("weights must sum to 1.0, got {}", self.mix.sum()),
            ));
        }
        Ok(())
    }
}

/// Everything `generate` needs besides the request.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Synthesis parameters.
    pub synth: SynthConfig,
    /// MP3 encoder settings.
    pub encoder: EncoderConfig,
}

impl GeneratorConfig {
    /// Creates a config with the given synthesis parameters and default encoder.
    pub fn with_synth(synth: SynthConfig) -> Self {
        Self {
            synth,
            encoder: EncoderConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_exactly_one() {
        assert_eq!(MixWeights::DEFAULT.sum(), 1.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(SynthConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        assert!(SynthConfig::default().sample_rate(0).validate().is_err());
        assert!(SynthConfig::default().base_frequency(0.0).validate().is_err());
        assert!(SynthConfig::default()
            .base_frequency(f64::NAN)
            .validate()
            .is_err());
        assert!(SynthConfig::default().notes_per_phrase(0).validate().is_err());
        assert!(SynthConfig::default().headroom(1.5).validate().is_err());

        let mut config = SynthConfig::default();
        config.mix.melody = 0.9;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sum to 1.0"));
    }
}
