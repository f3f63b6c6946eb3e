//! Voice synthesis for the three layers of a song.
//!
//! - `melody` - weighted random walk over the maqam degrees with vibrato
//! - `harmony` - two transposed melodic phrases (fifth above, octave below)
//! - `rhythm` - one cycle of a percussion pattern
//! - `envelope` - exponential decay shared by notes and drum hits

pub mod envelope;
pub mod harmony;
pub mod melody;
pub mod rhythm;

use rand::Rng;

use crate::error::AudioResult;

/// Common trait for the voices that make up a song.
pub trait Voice {
    /// Renders one loop of the voice.
    ///
    /// # Arguments
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Source of randomness for voices that need it
    ///
    /// # Returns
    /// Samples in range [-1.0, 1.0], never empty
    fn render<R: Rng + ?Sized>(&self, sample_rate: u32, rng: &mut R) -> AudioResult<Vec<f64>>;
}

/// Time points of `count` samples spread evenly over `[0, duration]`,
/// both endpoints included.
pub fn linspace(duration: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        duration / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| i as f64 * step)
}

/// Number of whole samples that fit in `seconds`.
pub(crate) fn samples_in(seconds: f64, sample_rate: u32) -> usize {
    (seconds * sample_rate as f64).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_includes_endpoints() {
        let t: Vec<f64> = linspace(1.0, 5).collect();
        assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert_eq!(linspace(1.0, 0).count(), 0);
        assert_eq!(linspace(1.0, 1).collect::<Vec<_>>(), vec![0.0]);
    }

    #[test]
    fn test_samples_in_truncates() {
        assert_eq!(samples_in(0.5, 44100), 22050);
        assert_eq!(samples_in(60.0 / 90.0, 44100), 29400);
        assert_eq!(samples_in(0.00001, 44100), 0);
    }
}
