//! Loop repetition.

use crate::error::{AudioError, AudioResult};

/// Number of whole repetitions of a `loop_len` loop needed to cover
/// `target` samples.
pub fn repeat_count(loop_len: usize, target: usize) -> usize {
    if loop_len == 0 {
        0
    } else {
        target.div_ceil(loop_len)
    }
}

/// Repeats `samples` and truncates to exactly `target` samples.
///
/// The tiled buffer is never materialized; the returned iterator walks the
/// loop repeatedly.
pub fn tiled(samples: &[f64], target: usize) -> AudioResult<impl Iterator<Item = f64> + '_> {
    if samples.is_empty() && target > 0 {
        return Err(AudioError::synthesis("cannot extend an empty loop"));
    }
    Ok(samples.iter().copied().cycle().take(target))
}
