use std::collections::BTreeSet;

use crate::models::analysis::MatchResult;
use crate::sections::title_case;

fn normalize(skills: &[String]) -> BTreeSet<String> {
    skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Compares resume skills against a posting's skills, case-insensitively.
///
/// `match_percentage` truncates toward zero: 2 of 3 is 66. A posting with no
/// skills scores 0.
pub fn match_skills(resume: &[String], job: &[String]) -> MatchResult {
    let resume_set = normalize(resume);
    let job_set = normalize(job);

    let matched: Vec<String> = job_set.intersection(&resume_set).map(|s| title_case(s)).collect();
    let missing: Vec<String> = job_set.difference(&resume_set).map(|s| title_case(s)).collect();

    let match_percentage = if job_set.is_empty() {
        0
    } else {
        ((matched.len() as f64 / job_set.len() as f64) * 100.0) as u8
    };

    MatchResult {
        matched,
        missing,
        match_percentage,
    }
}
