//! Output filename sanitization and title derivation.

use crate::request::OutputFormat;

/// Title used when sanitization leaves nothing behind.
pub const UNTITLED: &str = "untitled";

/// Maximum title length derived from lyrics, in characters.
pub const DERIVED_TITLE_MAX_CHARS: usize = 50;

/// Keeps alphanumerics, space, hyphen and underscore; strips trailing
/// whitespace.
///
/// # Example
/// ```
/// use tarab_spec::sanitize_component;
///
/// assert_eq!(sanitize_component("Ya Leil! (live)  "), "Ya Leil live");
/// assert_eq!(sanitize_component("../../etc/passwd"), "etcpasswd");
/// ```
pub fn sanitize_component(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim_end().to_string()
}

/// Builds the artifact filename `{title}_{maqam}_{style}.{ext}`.
///
/// Every component is sanitized, so the result never contains a path
/// separator.
pub fn output_filename(title: &str, maqam: &str, style: &str, format: OutputFormat) -> String {
    let mut safe_title = sanitize_component(title);
    if safe_title.is_empty() {
        safe_title = UNTITLED.to_string();
    }
    format!(
        "{}_{}_{}.{}",
        safe_title,
        sanitize_component(maqam),
        sanitize_component(style),
        format.extension()
    )
}

/// Derives a title from the first line of the lyrics.
///
/// Returns `None` when the first line is blank.
pub fn derive_title(lyrics: &str) -> Option<String> {
    let first_line = lyrics.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        return None;
    }
    Some(first_line.chars().take(DERIVED_TITLE_MAX_CHARS).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_allowed_characters() {
        assert_eq!(sanitize_component("My-Song_01"), "My-Song_01");
        assert_eq!(sanitize_component("a/b\\c:d*e?f"), "abcdef");
        assert_eq!(sanitize_component("  leading kept"), "  leading kept");
        assert_eq!(sanitize_component("trailing   "), "trailing");
    }

    #[test]
    fn test_sanitize_keeps_arabic_letters() {
        assert_eq!(sanitize_component("يا حبيبي!"), "يا حبيبي");
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(
            output_filename("Test", "rast", "classical", OutputFormat::Mp3),
            "Test_rast_classical.mp3"
        );
        assert_eq!(
            output_filename("Test?", "rast", "classical", OutputFormat::Wav),
            "Test_rast_classical.wav"
        );
    }

    #[test]
    fn test_output_filename_empty_title() {
        assert_eq!(
            output_filename("???", "hijaz", "modern", OutputFormat::Mp3),
            "untitled_hijaz_modern.mp3"
        );
    }

    #[test]
    fn test_output_filename_has_no_separators() {
        let name = output_filename("../x", "../../y", "a/b", OutputFormat::Mp3);
        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));
        assert_eq!(name, "x_y_ab.mp3");
    }

    #[test]
    fn test_derive_title() {
        assert_eq!(
            derive_title("  first line  \nsecond line"),
            Some("first line".to_string())
        );
        assert_eq!(derive_title(""), None);
        assert_eq!(derive_title("   \nsecond"), None);

        let long = "x".repeat(80);
        assert_eq!(derive_title(&long).unwrap().chars().count(), 50);
    }
}
