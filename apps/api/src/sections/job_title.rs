use crate::extraction::DocumentText;
use crate::sections::title_case;

/// Title used when a posting has no "Job Title" line.
pub const DEFAULT_JOB_TITLE: &str = "Uploaded Job";

const PREFIX: &str = "job title";

/// Extracts the posting's title from the first line starting with "job title"
/// (case-insensitive). Text after the first colon is trimmed and title-cased; later
/// colons stay part of the title. A line without a colon contributes whatever follows
/// the prefix. [`DEFAULT_JOB_TITLE`] is used only when no such line exists; a
/// matching line with nothing after the colon yields an empty title.
pub fn extract_job_title(doc: &DocumentText) -> String {
    let Some(line) = doc
        .lines()
        .iter()
        .find(|line| line.to_lowercase().starts_with(PREFIX))
    else {
        return DEFAULT_JOB_TITLE.to_string();
    };

    let raw = match line.split_once(':') {
        Some((_, rest)) => rest,
        None => line.get(PREFIX.len()..).unwrap_or(""),
    };

    title_case(raw.trim())
}
