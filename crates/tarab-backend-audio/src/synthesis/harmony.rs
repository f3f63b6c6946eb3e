//! Harmony voices layered under the lead melody.
//!
//! Each voice is an independent phrase over the same scale, drawn with its
//! own degree choices, at a transposed tonic.

use rand::Rng;

use super::melody::PhraseSpec;
use super::Voice;
use crate::error::AudioResult;

/// Tonic ratio of the upper voice (a perfect fifth).
pub const FIFTH_RATIO: f64 = 1.5;

/// Tonic ratio of the lower voice (one octave down).
pub const OCTAVE_BELOW_RATIO: f64 = 0.5;

/// The two harmony loops.
#[derive(Debug, Clone)]
pub struct Harmony {
    /// Phrase a fifth above the lead tonic.
    pub fifth: Vec<f64>,
    /// Phrase an octave below the lead tonic.
    pub octave_below: Vec<f64>,
}

impl Harmony {
    /// Renders both voices for the given lead phrase.
    pub fn generate<R: Rng + ?Sized>(
        lead: &PhraseSpec,
        sample_rate: u32,
        rng: &mut R,
    ) -> AudioResult<Self> {
        let fifth = lead.transposed(FIFTH_RATIO).render(sample_rate, rng)?;
        let octave_below = lead.transposed(OCTAVE_BELOW_RATIO).render(sample_rate, rng)?;
        Ok(Self {
            fifth,
            octave_below,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use tarab_spec::Maqam;

    #[test]
    fn test_voices_match_lead_length() {
        let lead = PhraseSpec::new(Maqam::Saba.scale(), 220.0, 1.6);
        let mut rng = create_rng(11);
        let melody = lead.render(8000, &mut rng).unwrap();
        let harmony = Harmony::generate(&lead, 8000, &mut rng).unwrap();

        assert_eq!(harmony.fifth.len(), melody.len());
        assert_eq!(harmony.octave_below.len(), melody.len());
    }

    #[test]
    fn test_voices_differ() {
        let lead = PhraseSpec::new(Maqam::Bayati.scale(), 220.0, 1.6);
        let harmony = Harmony::generate(&lead, 8000, &mut create_rng(5)).unwrap();
        assert_ne!(harmony.fifth, harmony.octave_below);
    }
}
