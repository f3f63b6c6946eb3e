//! Emotion coloration applied to the mixed song.
//!
//! Two stages run in order: a brightness gain taken from the emotion
//! profile, then a single echo tap.

pub mod brightness;
pub mod echo;

pub use brightness::apply_brightness;
pub use echo::{apply_echo, echo_delay_samples};

use tarab_spec::EmotionProfile;

use crate::config::EchoParams;

/// Applies the brightness gain of `profile` followed by the echo.
pub fn apply_emotion(
    samples: &mut [f64],
    profile: &EmotionProfile,
    echo: &EchoParams,
    sample_rate: u32,
) {
    apply_brightness(samples, profile.brightness);
    apply_echo(samples, echo_delay_samples(echo, sample_rate), echo.gain);
}
