use tracing::debug;

use crate::extraction::DocumentText;
use crate::sections::title_case;

const TRIGGER: &str = "skills";
/// Lines after the trigger inspected for a comma-separated list.
const LOOKAHEAD: usize = 4;

/// Extracts a comma-separated skill list.
///
/// Only the first line containing "skills" (case-insensitive) is consulted. The first
/// of the next four lines that contains a comma is split on commas; fragments are
/// trimmed, title-cased and empty ones dropped. Fragment order is kept and duplicates
/// are not removed here.
pub fn extract_comma_skills(doc: &DocumentText) -> Vec<String> {
    let lines = doc.lines();

    let Some(trigger) = lines
        .iter()
        .position(|line| line.to_lowercase().contains(TRIGGER))
    else {
        debug!("No skills line found");
        return Vec::new();
    };

    let Some(list_line) = lines
        .iter()
        .skip(trigger + 1)
        .take(LOOKAHEAD)
        .find(|line| line.contains(','))
    else {
        debug!(line = trigger, "No comma-separated line after skills header");
        return Vec::new();
    };

    list_line
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(title_case)
        .collect()
}
