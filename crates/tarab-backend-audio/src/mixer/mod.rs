//! Loop mixing and peak normalization.
//!
//! Voice loops of different lengths are repeated until they cover the song
//! and summed with fixed weights into one mono buffer.

#[allow(clippy::module_inception)]
mod mixer;
mod processing;
mod tile;
mod types;

#[cfg(test)]
mod tests_mixing;
#[cfg(test)]
mod tests_normalization;
#[cfg(test)]
mod tests_tiling;

pub use mixer::Mixer;
pub use processing::{normalize_peak, peak};
pub use tile::{repeat_count, tiled};
pub use types::LoopLayer;
