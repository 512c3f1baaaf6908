use tracing::debug;

use crate::extraction::DocumentText;

const TRIGGER: &str = "about me";
const STOP_HEADERS: &[&str] = &["skills", "experience", "education"];

/// Extracts the "About Me" biography.
///
/// Capture starts after the first line containing "about me" (case-insensitive; the
/// trigger line itself is dropped) and stops before the first blank line or line that
/// starts with a skills/experience/education header. Captured lines are trimmed and
/// joined with single spaces.
pub fn extract_biography(doc: &DocumentText) -> String {
    let mut lines = doc.lines().iter();

    if !lines
        .by_ref()
        .any(|line| line.to_lowercase().contains(TRIGGER))
    {
        debug!("No biography trigger line found");
        return String::new();
    }

    lines
        .take_while(|line| !ends_biography(line))
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join(" ")
}

fn ends_biography(line: &str) -> bool {
    if line.trim().is_empty() {
        return true;
    }
    let lower = line.to_lowercase();
    STOP_HEADERS.iter().any(|h| lower.starts_with(h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> DocumentText {
        DocumentText::from_paragraphs(lines.iter().copied())
    }

    #[test]
    fn test_captures_until_blank_line() {
        let d = doc(&[
            "Jane Doe",
            "ABOUT ME",
            "  Backend engineer  ",
            "who enjoys Rust.",
            "",
            "Trailing text",
        ]);
        assert_eq!(extract_biography(&d), "Backend engineer who enjoys Rust.");
    }

    #[test]
    fn test_whitespace_only_line_stops_capture() {
        let d = doc(&["About Me", "Builds APIs.", "   \t", "Not part of the bio"]);
        assert_eq!(extract_biography(&d), "Builds APIs.");
    }

    #[test]
    fn test_stops_at_section_header() {
        let d = doc(&["About me", "Curious builder.", "Skills", "Rust, Go"]);
        assert_eq!(extract_biography(&d), "Curious builder.");
    }

    #[test]
    fn test_stop_header_is_case_insensitive() {
        let d = doc(&["About me", "Line one", "EXPERIENCE", "Acme"]);
        assert_eq!(extract_biography(&d), "Line one");
    }

    #[test]
    fn test_trigger_line_content_is_discarded() {
        let d = doc(&["About Me: I like Rust", "More detail"]);
        assert_eq!(extract_biography(&d), "More detail");
    }

    #[test]
    fn test_no_trigger_yields_empty() {
        let d = doc(&["Summary", "Some text", "Skills"]);
        assert_eq!(extract_biography(&d), "");
    }

    #[test]
    fn test_header_immediately_after_trigger_yields_empty() {
        let d = doc(&["About Me", "Education", "BSc"]);
        assert_eq!(extract_biography(&d), "");
    }

    #[test]
    fn test_runs_to_end_of_document() {
        let d = doc(&["about me", "last line"]);
        assert_eq!(extract_biography(&d), "last line");
    }
}
