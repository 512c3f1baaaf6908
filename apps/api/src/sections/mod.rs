//! Section Parsers — rule-based scans over a document's lines.
//!
//! Each parser is independent and never fails: an absent section degrades to an
//! empty value (or the job-title default) instead of an error.

pub mod biography;
pub mod job_title;
pub mod skills;

pub use biography::extract_biography;
pub use job_title::{extract_job_title, DEFAULT_JOB_TITLE};
pub use skills::extract_comma_skills;

/// Title-cases text: the first letter of every run of letters is upper-cased and the
/// rest lower-cased. Any non-letter (digit, space, punctuation) starts a new run, so
/// `node.js` becomes `Node.Js` and `c++` becomes `C++`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}
