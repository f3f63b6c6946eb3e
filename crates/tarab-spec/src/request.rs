//! Generation request types.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tables::{Emotion, EmotionProfile, Maqam, MaqamScale, RhythmPattern, RhythmStyle};

/// Container format of the generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// MPEG-1 Layer III at constant bitrate (requires ffmpeg).
    #[default]
    Mp3,
    /// 16-bit PCM WAV, written without an external encoder.
    Wav,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Wav => "wav",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mp3" => Ok(OutputFormat::Mp3),
            "wav" => Ok(OutputFormat::Wav),
            other => Err(format!("unknown output format '{}' (expected mp3 or wav)", other)),
        }
    }
}

fn default_maqam() -> String {
    Maqam::DEFAULT.name().to_string()
}

fn default_style() -> String {
    RhythmStyle::DEFAULT.name().to_string()
}

fn default_emotion() -> String {
    Emotion::DEFAULT.name().to_string()
}

fn default_region() -> String {
    "mixed".to_string()
}

fn default_tempo() -> i64 {
    120
}

/// A single song generation request.
///
/// Categorical fields are kept as raw strings so that unknown values can be
/// echoed back (e.g., in the output filename) while synthesis resolves them
/// to table defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Song title, used for the output filename. May be empty in request
    /// files; front ends derive one from the lyrics.
    #[serde(default)]
    pub title: String,
    /// Lyrics text; only its word count influences synthesis.
    pub lyrics: String,
    /// Maqam name (falls back to `hijaz`).
    #[serde(default = "default_maqam")]
    pub maqam: String,
    /// Rhythm style name (falls back to `modern`).
    #[serde(default = "default_style")]
    pub style: String,
    /// Emotion name (falls back to `happy`).
    #[serde(default = "default_emotion")]
    pub emotion: String,
    /// Regional tradition. Accepted but not used by synthesis.
    #[serde(default = "default_region")]
    pub region: String,
    /// Tempo in beats per minute. Must be positive.
    #[serde(default = "default_tempo")]
    pub tempo: i64,
    /// Directory the artifact is written to.
    #[serde(default)]
    pub output_directory: PathBuf,
    /// Seed for reproducible melodies; fresh entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Container format of the artifact.
    #[serde(default)]
    pub format: OutputFormat,
}

impl GenerationRequest {
    /// Creates a request with default maqam, style, emotion, region and tempo.
    pub fn new(
        title: impl Into<String>,
        lyrics: impl Into<String>,
        output_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            lyrics: lyrics.into(),
            maqam: default_maqam(),
            style: default_style(),
            emotion: default_emotion(),
            region: default_region(),
            tempo: default_tempo(),
            output_directory: output_directory.into(),
            seed: None,
            format: OutputFormat::default(),
        }
    }

    /// Sets the maqam name.
    pub fn maqam(mut self, maqam: impl Into<String>) -> Self {
        self.maqam = maqam.into();
        self
    }

    /// Sets the rhythm style name.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Sets the emotion name.
    pub fn emotion(mut self, emotion: impl Into<String>) -> Self {
        self.emotion = emotion.into();
        self
    }

    /// Sets the region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the tempo in BPM.
    pub fn tempo(mut self, tempo: i64) -> Self {
        self.tempo = tempo;
        self
    }

    /// Pins the melody seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the output directory.
    pub fn output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_directory = dir.into();
        self
    }

    /// Returns the maqam used for synthesis.
    pub fn resolved_maqam(&self) -> Maqam {
        Maqam::resolve(&self.maqam)
    }

    /// Returns the rhythm style used for synthesis.
    pub fn resolved_style(&self) -> RhythmStyle {
        RhythmStyle::resolve(&self.style)
    }

    /// Returns the emotion used for synthesis.
    pub fn resolved_emotion(&self) -> Emotion {
        Emotion::resolve(&self.emotion)
    }

    /// Returns the scale table used for synthesis.
    pub fn scale(&self) -> &'static MaqamScale {
        self.resolved_maqam().scale()
    }

    /// Returns the onset pattern used for synthesis.
    pub fn rhythm_pattern(&self) -> &'static RhythmPattern {
        self.resolved_style().pattern()
    }

    /// Returns the emotion profile used for synthesis.
    pub fn emotion_profile(&self) -> &'static EmotionProfile {
        self.resolved_emotion().profile()
    }
}
