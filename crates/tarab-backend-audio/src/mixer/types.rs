//! Core types for loop mixing.

/// A voice loop with its mix weight.
#[derive(Debug, Clone)]
pub struct LoopLayer {
    /// One cycle of the voice.
    pub samples: Vec<f64>,
    /// Gain applied to the voice.
    pub weight: f64,
}

impl LoopLayer {
    /// Creates a layer.
    pub fn new(samples: Vec<f64>, weight: f64) -> Self {
        Self { samples, weight }
    }

    /// Length of one cycle in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the loop has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
