//! Exponential decay envelope.

/// Gain of an exponential decay at time `t`.
///
/// `rate` is the number of e-folds over `length` seconds, so the envelope
/// falls from 1.0 at `t = 0` to `exp(-rate)` at `t = length`.
#[inline]
pub fn exp_decay(t: f64, rate: f64, length: f64) -> f64 {
    (-rate * t / length).exp()
}
