//! Emotion profiles.

use serde::{Deserialize, Serialize};

/// Coloration parameters for an emotion.
///
/// `rhythm_complexity` is carried in the table but no synthesis stage reads
/// it yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmotionProfile {
    /// Gain applied to the whole mix.
    pub brightness: f64,
    /// Relative rhythmic density, 0.0 (sparse) to 1.0 (busy).
    pub rhythm_complexity: f64,
}

impl EmotionProfile {
    const fn new(brightness: f64, rhythm_complexity: f64) -> Self {
        Self {
            brightness,
            rhythm_complexity,
        }
    }
}

static HAPPY: EmotionProfile = EmotionProfile::new(1.2, 0.8);
static SAD: EmotionProfile = EmotionProfile::new(0.6, 0.4);
static ROMANTIC: EmotionProfile = EmotionProfile::new(0.9, 0.6);
static DRAMATIC: EmotionProfile = EmotionProfile::new(1.1, 0.9);
static MELANCHOLIC: EmotionProfile = EmotionProfile::new(0.5, 0.3);
static ENERGETIC: EmotionProfile = EmotionProfile::new(1.3, 1.0);
static PEACEFUL: EmotionProfile = EmotionProfile::new(0.8, 0.2);

/// Named emotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Romantic,
    Dramatic,
    Melancholic,
    Energetic,
    Peaceful,
}

impl Emotion {
    /// Every supported emotion.
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Romantic,
        Emotion::Dramatic,
        Emotion::Melancholic,
        Emotion::Energetic,
        Emotion::Peaceful,
    ];

    /// Fallback for names that are not in the table.
    pub const DEFAULT: Emotion = Emotion::Happy;

    /// Looks up an emotion by exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }

    /// Looks up an emotion by name, falling back to [`Emotion::DEFAULT`].
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Self::DEFAULT)
    }

    /// Returns the table name.
    pub fn name(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Romantic => "romantic",
            Emotion::Dramatic => "dramatic",
            Emotion::Melancholic => "melancholic",
            Emotion::Energetic => "energetic",
            Emotion::Peaceful => "peaceful",
        }
    }

    /// Returns the coloration profile.
    pub fn profile(&self) -> &'static EmotionProfile {
        match self {
            Emotion::Happy => &HAPPY,
            Emotion::Sad => &SAD,
            Emotion::Romantic => &ROMANTIC,
            Emotion::Dramatic => &DRAMATIC,
            Emotion::Melancholic => &MELANCHOLIC,
            Emotion::Energetic => &ENERGETIC,
            Emotion::Peaceful => &PEACEFUL,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves an emotion name to its profile, never failing.
pub fn resolve_emotion(name: &str) -> &'static EmotionProfile {
    Emotion::resolve(name).profile()
}
