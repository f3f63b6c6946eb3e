//! Weighted sum of tiled loops.

use tracing::debug;

use super::tile::tiled;
use super::types::LoopLayer;
use crate::error::{AudioError, AudioResult};

/// Mixes loops of arbitrary length into a fixed-length mono buffer.
#[derive(Debug)]
pub struct Mixer {
    /// Output sample length.
    num_samples: usize,
    /// Accumulated layers.
    layers: Vec<LoopLayer>,
}

impl Mixer {
    /// Creates a mixer producing `num_samples` samples.
    pub fn new(num_samples: usize) -> Self {
        Self {
            num_samples,
            layers: Vec::new(),
        }
    }

    /// Adds a loop. Empty loops are rejected.
    pub fn add_loop(&mut self, samples: Vec<f64>, weight: f64) -> AudioResult<()> {
        if samples.is_empty() {
            return Err(AudioError::synthesis("cannot mix an empty loop"));
        }
        self.layers.push(LoopLayer::new(samples, weight));
        Ok(())
    }

    /// Tiles every loop to the output length and sums them.
    pub fn mix(&self) -> AudioResult<Vec<f64>> {
        let mut output = vec![0.0; self.num_samples];

        for layer in &self.layers {
            debug!(
                loop_len = layer.len(),
                repeats = super::repeat_count(layer.len(), self.num_samples),
                weight = layer.weight,
                "mixing loop"
            );
            for (out, sample) in output.iter_mut().zip(tiled(&layer.samples, self.num_samples)?) {
                *out += sample * layer.weight;
            }
        }

        Ok(output)
    }
}
