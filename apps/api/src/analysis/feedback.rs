//! Feedback Synthesizer — turns a match result and biography into advisories.

use crate::models::analysis::{Advisory, AdvisoryKind, AdvisorySeverity, MatchResult};

/// Soft-skill tokens, checked as lower-case substrings.
pub const SOFT_SKILLS: &[&str] = &[
    "team",
    "communication",
    "initiative",
    "creative",
    "adaptable",
    "detail",
    "leadership",
    "goal",
];

pub const BIOGRAPHY_MIN_WORDS: usize = 30;
const MAX_SOFT_SKILL_SUGGESTIONS: usize = 3;

/// Soft skills named by at least one Responsibilities entry, in `SOFT_SKILLS` order.
pub fn soft_skills_in_demand<'a, I>(responsibilities: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str>,
{
    let lowered: Vec<String> = responsibilities.into_iter().map(str::to_lowercase).collect();
    SOFT_SKILLS
        .iter()
        .copied()
        .filter(|skill| lowered.iter().any(|r| r.contains(skill)))
        .collect()
}

/// Builds advisories in a fixed order: missing skills, biography length, soft skills,
/// affirmation. The length warning and the affirmation never co-occur.
pub fn synthesize_feedback(
    skill_match: &MatchResult,
    job_title: &str,
    biography: &str,
    soft_skill_demand: &[&'static str],
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if !skill_match.missing.is_empty() {
        advisories.push(Advisory {
            kind: AdvisoryKind::MissingSkills,
            severity: AdvisorySeverity::Info,
            message: format!(
                "Consider adding: {} to improve alignment with {}.",
                skill_match.missing.join(", "),
                job_title
            ),
        });
    }

    let word_count = biography.split_whitespace().count();
    if word_count < BIOGRAPHY_MIN_WORDS {
        advisories.push(Advisory {
            kind: AdvisoryKind::ExpandBiography,
            severity: AdvisorySeverity::Warning,
            message: "Try expanding your About-Me with more detail.".to_string(),
        });
    }

    let biography_lower = biography.to_lowercase();
    let needed: Vec<&str> = soft_skill_demand
        .iter()
        .copied()
        .filter(|skill| !biography_lower.contains(skill))
        .collect();

    if !needed.is_empty() {
        advisories.push(Advisory {
            kind: AdvisoryKind::SoftSkills,
            severity: AdvisorySeverity::Info,
            message: format!(
                "Consider mentioning soft skills like {}.",
                needed
                    .iter()
                    .take(MAX_SOFT_SKILL_SUGGESTIONS)
                    .copied()
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        });
    } else if word_count >= BIOGRAPHY_MIN_WORDS {
        advisories.push(Advisory {
            kind: AdvisoryKind::BiographyAligned,
            severity: AdvisorySeverity::Success,
            message: "Looks good! Your About-Me aligns well.".to_string(),
        });
    }

    advisories
}
