//! Single-tap echo.

use crate::config::EchoParams;

/// Delay of the echo tap in whole samples.
pub fn echo_delay_samples(params: &EchoParams, sample_rate: u32) -> usize {
    (params.delay_seconds * sample_rate as f64).floor() as usize
}

/// Adds a copy of the dry signal, delayed by `delay` samples and scaled by
/// `gain`, on top of the signal.
///
/// The tap always reads the dry signal, never earlier echo output. Buffers
/// no longer than the delay, and a zero delay, leave the samples unchanged.
pub fn apply_echo(samples: &mut [f64], delay: usize, gain: f64) {
    if delay == 0 || samples.len() <= delay {
        return;
    }
    // Walk backwards so samples[i - delay] is still dry when read.
    for i in (delay..samples.len()).rev() {
        samples[i] += samples[i - delay] * gain;
    }
}
