use crate::analysis::catalog::CatalogContext;
use crate::analysis::vectorizer::cosine_similarity;
use crate::models::analysis::RankedRole;

pub const TOP_ROLES: usize = 5;

fn round_score(score: f64) -> f64 {
    ((score * 100.0).round_ties_even() / 100.0).clamp(0.0, 1.0)
}

/// Ranks catalog postings by cosine similarity to the candidate's skills.
///
/// Scores are rounded to two decimals before sorting; equal scores keep catalog
/// order. An empty skill list yields all-zero scores, not an error.
pub fn rank_roles(skills: &[String], catalog: &CatalogContext) -> Vec<RankedRole> {
    let query = catalog.vectorizer().transform(&skills.join(" ").to_lowercase());

    let mut ranked: Vec<RankedRole> = catalog
        .rows()
        .iter()
        .zip(catalog.row_vectors())
        .map(|(row, vector)| RankedRole {
            job_title: row.job_title.clone(),
            match_score: round_score(cosine_similarity(&query, vector)),
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    ranked.truncate(TOP_ROLES);
    ranked
}
