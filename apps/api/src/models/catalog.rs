use serde::{Deserialize, Serialize};

/// One posting of the reference catalog. Loaded once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub job_title: String,
    pub required_skills: String,
    pub responsibilities: String,
}

impl CatalogRow {
    /// Text the vector-space model is fit on and rows are embedded from.
    pub fn document(&self) -> String {
        format!("{} {}", self.required_skills, self.responsibilities)
    }
}
