//! Peak measurement and normalization.

use crate::error::{AudioError, AudioResult};

/// Largest absolute sample value. NaN samples propagate.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |acc, s| {
        if s.is_nan() || acc.is_nan() {
            f64::NAN
        } else {
            acc.max(s.abs())
        }
    })
}

/// Scales `samples` so that the peak magnitude equals `target_peak`.
///
/// Returns the gain that was applied. Silent and non-finite buffers are
/// rejected rather than producing NaN or infinite output.
pub fn normalize_peak(samples: &mut [f64], target_peak: f64) -> AudioResult<f64> {
    let current_peak = peak(samples);
    if !current_peak.is_finite() {
        return Err(AudioError::synthesis("mix contains non-finite samples"));
    }
    if current_peak == 0.0 {
        return Err(AudioError::synthesis("mix is silent"));
    }

    let gain = target_peak / current_peak;
    for sample in samples.iter_mut() {
        *sample *= gain;
    }
    Ok(gain)
}
