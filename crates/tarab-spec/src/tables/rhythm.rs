//! Rhythm (iqa') onset patterns.

use serde::{Deserialize, Serialize};

/// Number of beat slots in one rhythmic cycle.
pub const PATTERN_SLOTS: usize = 8;

/// One bar of onsets (`true`) and rests (`false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RhythmPattern {
    slots: [bool; PATTERN_SLOTS],
}

impl RhythmPattern {
    const fn new(slots: [bool; PATTERN_SLOTS]) -> Self {
        Self { slots }
    }

    /// Returns the slots in playback order.
    pub fn slots(&self) -> &[bool; PATTERN_SLOTS] {
        &self.slots
    }

    /// Number of onset slots in the bar.
    pub fn onset_count(&self) -> usize {
        self.slots.iter().filter(|&&s| s).count()
    }

    /// Renders the pattern as `x` (onset) and `.` (rest).
    pub fn notation(&self) -> String {
        self.slots
            .iter()
            .map(|&s| if s { 'x' } else { '.' })
            .collect()
    }
}

const X: bool = true;
const O: bool = false;

static CLASSICAL: RhythmPattern = RhythmPattern::new([X, O, X, O, X, O, X, O]);
static FOLK: RhythmPattern = RhythmPattern::new([X, O, X, X, O, X, O, X]);
static MODERN: RhythmPattern = RhythmPattern::new([X, O, O, X, O, X, O, O]);
// Maqsum
static TRADITIONAL: RhythmPattern = RhythmPattern::new([X, O, X, O, O, X, X, O]);

/// Named rhythm styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RhythmStyle {
    Classical,
    Folk,
    Modern,
    Traditional,
}

impl RhythmStyle {
    /// Every supported style.
    pub const ALL: [RhythmStyle; 4] = [
        RhythmStyle::Classical,
        RhythmStyle::Folk,
        RhythmStyle::Modern,
        RhythmStyle::Traditional,
    ];

    /// Fallback for names that are not in the table.
    pub const DEFAULT: RhythmStyle = RhythmStyle::Modern;

    /// Looks up a style by exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Looks up a style by name, falling back to [`RhythmStyle::DEFAULT`].
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Self::DEFAULT)
    }

    /// Returns the table name.
    pub fn name(&self) -> &'static str {
        match self {
            RhythmStyle::Classical => "classical",
            RhythmStyle::Folk => "folk",
            RhythmStyle::Modern => "modern",
            RhythmStyle::Traditional => "traditional",
        }
    }

    /// Returns the onset pattern.
    pub fn pattern(&self) -> &'static RhythmPattern {
        match self {
            RhythmStyle::Classical => &CLASSICAL,
            RhythmStyle::Folk => &FOLK,
            RhythmStyle::Modern => &MODERN,
            RhythmStyle::Traditional => &TRADITIONAL,
        }
    }
}

impl std::fmt::Display for RhythmStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a style name to its onset pattern, never failing.
pub fn resolve_rhythm_pattern(name: &str) -> &'static RhythmPattern {
    RhythmStyle::resolve(name).pattern()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_have_eight_slots() {
        for style in RhythmStyle::ALL {
            assert_eq!(style.pattern().slots().len(), PATTERN_SLOTS);
            // Every cycle opens on a downbeat.
            assert!(style.pattern().slots()[0], "{} must start with an onset", style);
        }
    }

    #[test]
    fn test_notation() {
        assert_eq!(RhythmStyle::Classical.pattern().notation(), "x.x.x.x.");
        assert_eq!(RhythmStyle::Folk.pattern().notation(), "x.xx.x.x");
        assert_eq!(RhythmStyle::Modern.pattern().notation(), "x..x.x..");
        assert_eq!(RhythmStyle::Traditional.pattern().notation(), "x.x..xx.");
    }

    #[test]
    fn test_onset_count() {
        assert_eq!(RhythmStyle::Classical.pattern().onset_count(), 4);
        assert_eq!(RhythmStyle::Folk.pattern().onset_count(), 5);
        assert_eq!(RhythmStyle::Modern.pattern().onset_count(), 3);
    }

    #[test]
    fn test_unknown_style_falls_back_to_modern() {
        assert_eq!(RhythmStyle::resolve("jazz"), RhythmStyle::Modern);
        assert_eq!(resolve_rhythm_pattern("jazz"), &MODERN);
        assert_eq!(resolve_rhythm_pattern("Folk"), &MODERN);
        assert_eq!(resolve_rhythm_pattern("folk"), &FOLK);
    }
}
