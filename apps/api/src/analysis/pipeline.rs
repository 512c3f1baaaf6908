use crate::analysis::catalog::CatalogContext;
use crate::analysis::feedback::synthesize_feedback;
use crate::analysis::ranker::rank_roles;
use crate::analysis::skill_match::match_skills;
use crate::extraction::DocumentText;
use crate::models::analysis::AnalysisReport;
use crate::sections::{extract_biography, extract_comma_skills, extract_job_title};

/// One full pass: parse sections, match, rank, synthesize feedback.
///
/// Never fails: sparse documents degrade to empty sections and a zero match.
pub fn analyze(resume: &DocumentText, job: &DocumentText, catalog: &CatalogContext) -> AnalysisReport {
    let biography = extract_biography(resume);
    let resume_skills = extract_comma_skills(resume);
    let job_title = extract_job_title(job);
    let job_skills = extract_comma_skills(job);

    let skill_match = match_skills(&resume_skills, &job_skills);
    let top_roles = rank_roles(&resume_skills, catalog);
    let advisories = synthesize_feedback(
        &skill_match,
        &job_title,
        &biography,
        catalog.soft_skill_demand(),
    );

    AnalysisReport {
        biography,
        resume_skills,
        job_title,
        job_skills,
        skill_match,
        top_roles,
        advisories,
    }
}
