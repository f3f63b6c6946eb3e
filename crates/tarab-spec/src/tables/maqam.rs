//! Maqam scale tables.
//!
//! Each maqam is reduced to seven frequency ratios relative to its tonic,
//! spanning at most one octave. The ratios approximate the quarter-tone
//! intervals with plain `f64` values; they are not a tuning reference.

use serde::{Deserialize, Serialize};

/// Number of scale degrees in every maqam table.
pub const SCALE_DEGREES: usize = 7;

/// Seven frequency ratios relative to the tonic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MaqamScale {
    ratios: [f64; SCALE_DEGREES],
}

impl MaqamScale {
    const fn new(ratios: [f64; SCALE_DEGREES]) -> Self {
        Self { ratios }
    }

    /// Returns all ratios, tonic first.
    pub fn ratios(&self) -> &[f64; SCALE_DEGREES] {
        &self.ratios
    }

    /// Returns the ratio of a scale degree (0 = tonic).
    ///
    /// # Panics
    /// Panics if `degree >= SCALE_DEGREES`.
    pub fn ratio(&self, degree: usize) -> f64 {
        self.ratios[degree]
    }

    /// Returns the frequency of a degree above `tonic_hz`.
    pub fn frequency(&self, tonic_hz: f64, degree: usize) -> f64 {
        tonic_hz * self.ratio(degree)
    }
}

static HIJAZ: MaqamScale = MaqamScale::new([1.0, 1.067, 1.333, 1.498, 1.682, 1.778, 2.0]);
static BAYATI: MaqamScale = MaqamScale::new([1.0, 1.125, 1.333, 1.498, 1.682, 1.888, 2.0]);
static SABA: MaqamScale = MaqamScale::new([1.0, 1.067, 1.267, 1.333, 1.498, 1.682, 1.888]);
static RAST: MaqamScale = MaqamScale::new([1.0, 1.125, 1.267, 1.333, 1.498, 1.682, 1.888]);
static KURD: MaqamScale = MaqamScale::new([1.0, 1.067, 1.267, 1.333, 1.498, 1.682, 1.888]);
static NAHAWAND: MaqamScale = MaqamScale::new([1.0, 1.125, 1.267, 1.333, 1.498, 1.682, 1.888]);
static AJAM: MaqamScale = MaqamScale::new([1.0, 1.125, 1.267, 1.414, 1.587, 1.782, 2.0]);
static SIKAH: MaqamScale = MaqamScale::new([1.0, 1.067, 1.267, 1.333, 1.498, 1.682, 1.888]);

/// Named maqamat with a scale table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Maqam {
    Hijaz,
    Bayati,
    Saba,
    Rast,
    Kurd,
    Nahawand,
    Ajam,
    Sikah,
}

impl Maqam {
    /// Every supported maqam, in table order.
    pub const ALL: [Maqam; 8] = [
        Maqam::Hijaz,
        Maqam::Bayati,
        Maqam::Saba,
        Maqam::Rast,
        Maqam::Kurd,
        Maqam::Nahawand,
        Maqam::Ajam,
        Maqam::Sikah,
    ];

    /// Fallback for names that are not in the table.
    pub const DEFAULT: Maqam = Maqam::Hijaz;

    /// Looks up a maqam by exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Looks up a maqam by name, falling back to [`Maqam::DEFAULT`].
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or(Self::DEFAULT)
    }

    /// Returns the table name.
    pub fn name(&self) -> &'static str {
        match self {
            Maqam::Hijaz => "hijaz",
            Maqam::Bayati => "bayati",
            Maqam::Saba => "saba",
            Maqam::Rast => "rast",
            Maqam::Kurd => "kurd",
            Maqam::Nahawand => "nahawand",
            Maqam::Ajam => "ajam",
            Maqam::Sikah => "sikah",
        }
    }

    /// Returns the scale table.
    pub fn scale(&self) -> &'static MaqamScale {
        match self {
            Maqam::Hijaz => &HIJAZ,
            Maqam::Bayati => &BAYATI,
            Maqam::Saba => &SABA,
            Maqam::Rast => &RAST,
            Maqam::Kurd => &KURD,
            Maqam::Nahawand => &NAHAWAND,
            Maqam::Ajam => &AJAM,
            Maqam::Sikah => &SIKAH,
        }
    }
}

impl std::fmt::Display for Maqam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolves a maqam name to its scale, never failing.
pub fn resolve_scale(name: &str) -> &'static MaqamScale {
    Maqam::resolve(name).scale()
}
