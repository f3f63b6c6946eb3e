//! Static parameter tables.
//!
//! All tables are `'static` read-only data and safe for unsynchronized
//! concurrent reads. Lookups are exact and case-sensitive; unknown names
//! resolve to a documented default instead of failing.

mod emotion;
mod maqam;
mod rhythm;

pub use emotion::{resolve_emotion, Emotion, EmotionProfile};
pub use maqam::{resolve_scale, Maqam, MaqamScale, SCALE_DEGREES};
pub use rhythm::{resolve_rhythm_pattern, RhythmPattern, RhythmStyle, PATTERN_SLOTS};
