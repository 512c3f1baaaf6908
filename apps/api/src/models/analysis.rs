use serde::{Deserialize, Serialize};

/// Overlap between resume skills and the posting's skills.
///
/// `matched` and `missing` hold title-cased display forms, ordered by their
/// lower-cased form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub match_percentage: u8, // 0 – 100
}

/// A catalog posting scored against the candidate's skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRole {
    pub job_title: String,
    pub match_score: f64, // 0.0 – 1.0, two decimals
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    MissingSkills,
    ExpandBiography,
    SoftSkills,
    BiographyAligned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorySeverity {
    Info,
    Warning,
    Success,
}

/// A human-readable suggestion produced after matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub severity: AdvisorySeverity,
    pub message: String,
}

/// Everything one analysis pass produces for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub biography: String,
    pub resume_skills: Vec<String>,
    pub job_title: String,
    pub job_skills: Vec<String>,
    pub skill_match: MatchResult,
    pub top_roles: Vec<RankedRole>,
    pub advisories: Vec<Advisory>,
}
