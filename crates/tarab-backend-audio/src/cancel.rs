//! Cooperative cancellation between pipeline stages.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{AudioError, AudioResult};

/// Shared flag checked between synthesis stages.
///
/// Clones share the same flag, so a caller can keep one clone and hand
/// another to the worker running the generation.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Creates a flag that is not raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag. The running generation stops at the next stage
    /// boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns true once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Fails with [`AudioError::Cancelled`] if the flag is raised.
    pub fn check(&self, stage: &'static str) -> AudioResult<()> {
        if self.is_cancelled() {
            Err(AudioError::Cancelled { stage })
        } else {
            Ok(())
        }
    }
}
