//! Human-readable composition brief.
//!
//! Summarizes a request the way a session musician would read it: style,
//! mode, mood, tempo feel and the opening of the lyrics.

use std::fmt::Write as _;

use crate::request::GenerationRequest;

/// Number of lyric characters quoted in the brief.
pub const LYRICS_EXCERPT_CHARS: usize = 200;

/// Coarse tempo feel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempoCharacter {
    /// Below 90 BPM.
    Slow,
    /// 90 to 129 BPM.
    Moderate,
    /// 130 BPM and above.
    Fast,
}

impl TempoCharacter {
    /// Classifies a tempo in BPM.
    pub fn from_bpm(bpm: i64) -> Self {
        if bpm < 90 {
            TempoCharacter::Slow
        } else if bpm < 130 {
            TempoCharacter::Moderate
        } else {
            TempoCharacter::Fast
        }
    }

    /// Returns the descriptive phrase used in the brief.
    pub fn description(&self) -> &'static str {
        match self {
            TempoCharacter::Slow => "slow and contemplative",
            TempoCharacter::Moderate => "moderate",
            TempoCharacter::Fast => "fast and energetic",
        }
    }
}

/// A rendered description of a generation request.
#[derive(Debug, Clone)]
pub struct CompositionBrief<'a> {
    request: &'a GenerationRequest,
}

impl<'a> CompositionBrief<'a> {
    /// Creates a brief for a request.
    pub fn new(request: &'a GenerationRequest) -> Self {
        Self { request }
    }

    /// Returns the tempo feel of the request.
    pub fn tempo_character(&self) -> TempoCharacter {
        TempoCharacter::from_bpm(self.request.tempo)
    }

    /// Renders the brief as plain text.
    pub fn render(&self) -> String {
        let r = self.request;
        let excerpt: String = r.lyrics.chars().take(LYRICS_EXCERPT_CHARS).collect();
        let maqam = title_case(&r.maqam);
        let style = title_case(&r.style);

        let mut out = String::new();
        let _ = writeln!(out, "Arabic composition brief: {}", r.title);
        let _ = writeln!(out);
        let _ = writeln!(out, "Musical Style: {} Arabic music", style);
        let _ = writeln!(out, "Maqam (Scale): {} - traditional Arabic melodic mode", maqam);
        let _ = writeln!(out, "Emotion: {} and expressive", title_case(&r.emotion));
        let _ = writeln!(out, "Regional Style: {} Arabic musical traditions", title_case(&r.region));
        let _ = writeln!(
            out,
            "Tempo: {} BPM - {}",
            r.tempo,
            self.tempo_character().description()
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Lyrics Theme: {}...", excerpt);
        let _ = writeln!(out);
        let _ = writeln!(out, "Musical Elements:");
        let _ = writeln!(out, "- Traditional instruments: oud, qanun, ney, violin, percussion");
        let _ = writeln!(out, "- Microtonal ornaments and melodic phrases");
        let _ = writeln!(out, "- Traditional rhythm cycles (iqa'at)");
        let _ = writeln!(out, "- Authentic {} maqam progressions", r.maqam);
        let _ = writeln!(out, "- Blend of traditional and {} elements", r.style);
        out
    }
}

impl std::fmt::Display for CompositionBrief<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Capitalizes the first letter of every word and lowercases the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tempo_character_boundaries() {
        assert_eq!(TempoCharacter::from_bpm(60), TempoCharacter::Slow);
        assert_eq!(TempoCharacter::from_bpm(89), TempoCharacter::Slow);
        assert_eq!(TempoCharacter::from_bpm(90), TempoCharacter::Moderate);
        assert_eq!(TempoCharacter::from_bpm(129), TempoCharacter::Moderate);
        assert_eq!(TempoCharacter::from_bpm(130), TempoCharacter::Fast);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hijaz"), "Hijaz");
        assert_eq!(title_case("north african"), "North African");
        assert_eq!(title_case("MODERN"), "Modern");
        assert_eq!(title_case("gulf-khaleeji"), "Gulf-Khaleeji");
    }

    #[test]
    fn test_render_mentions_parameters() {
        let request = GenerationRequest::new("Layali", "ya leil ya ein", "out")
            .maqam("bayati")
            .style("folk")
            .emotion("romantic")
            .region("levantine")
            .tempo(140);

        let brief = CompositionBrief::new(&request).render();
        assert!(brief.contains("Musical Style: Folk Arabic music"));
        assert!(brief.contains("Maqam (Scale): Bayati"));
        assert!(brief.contains("Regional Style: Levantine"));
        assert!(brief.contains("Tempo: 140 BPM - fast and energetic"));
        assert!(brief.contains("Lyrics Theme: ya leil ya ein..."));
    }

    #[test]
    fn test_render_truncates_lyrics() {
        let lyrics = "a".repeat(500);
        let request = GenerationRequest::new("t", lyrics, "out");
        let brief = CompositionBrief::new(&request).render();
        let expected = format!("Lyrics Theme: {}...", "a".repeat(LYRICS_EXCERPT_CHARS));
        assert!(brief.contains(&expected));
        assert!(!brief.contains(&"a".repeat(LYRICS_EXCERPT_CHARS + 1)));
    }
}
