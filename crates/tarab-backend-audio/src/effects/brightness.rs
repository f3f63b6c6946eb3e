//! Brightness gain.

/// Multiplies every sample by `gain`. A gain of exactly 1.0 is a no-op.
pub fn apply_brightness(samples: &mut [f64], gain: f64) {
    if gain == 1.0 {
        return;
    }
    for sample in samples.iter_mut() {
        *sample *= gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unity_gain_leaves_samples_untouched() {
        let mut samples = vec![0.1, -0.2, 0.3];
        apply_brightness(&mut samples, 1.0);
        assert_eq!(samples, vec![0.1, -0.2, 0.3]);
    }

    #[test]
    fn test_gain_scales() {
        let mut samples = vec![0.5, -0.25];
        apply_brightness(&mut samples, 1.2);
        assert!((samples[0] - 0.6).abs() < 1e-12);
        assert!((samples[1] + 0.3).abs() < 1e-12);
    }
}
