//! Reference catalog: CSV loading and the vector space fitted over it.
//!
//! `CatalogContext` is built once at start-up and shared read-only behind an `Arc`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::feedback::soft_skills_in_demand;
use crate::analysis::vectorizer::{SparseVector, TfidfVectorizer};
use crate::models::catalog::CatalogRow;

#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("could not open catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog is missing required column '{0}'")]
    MissingColumn(String),

    #[error("catalog produced an empty vocabulary")]
    EmptyVocabulary,
}

const JOB_TITLE: &str = "JobTitle";
const REQUIRED_SKILLS: &str = "RequiredSkills";
const RESPONSIBILITIES: &str = "Responsibilities";

/// `Job Title`, `job_title` and `JobTitle` all normalise to `jobtitle`.
fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize, DatasetLoadError> {
    let wanted = normalize_header(column);
    headers
        .iter()
        .position(|h| normalize_header(h) == wanted)
        .ok_or_else(|| DatasetLoadError::MissingColumn(column.to_string()))
}

pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<CatalogRow>, DatasetLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let title_idx = column_index(&headers, JOB_TITLE)?;
    let skills_idx = column_index(&headers, REQUIRED_SKILLS)?;
    let resp_idx = column_index(&headers, RESPONSIBILITIES)?;

    let mut rows = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record?;
        if record.len() < headers.len() {
            warn!(
                "Catalog row {} has {} of {} fields; missing cells read as empty",
                line + 1,
                record.len(),
                headers.len()
            );
        }
        let cell = |idx: usize| record.get(idx).unwrap_or_default();
        rows.push(CatalogRow {
            job_title: cell(title_idx).trim().to_string(),
            required_skills: cell(skills_idx).to_string(),
            responsibilities: cell(resp_idx).to_string(),
        });
    }

    Ok(rows)
}

pub fn load_catalog(path: &Path) -> Result<Vec<CatalogRow>, DatasetLoadError> {
    read_catalog(File::open(path)?)
}

/// The catalog rows plus everything derived from them at fit time.
#[derive(Debug)]
pub struct CatalogContext {
    rows: Vec<CatalogRow>,
    vectorizer: TfidfVectorizer,
    row_vectors: Vec<SparseVector>,
    soft_skill_demand: Vec<&'static str>,
}

impl CatalogContext {
    pub fn fit(rows: Vec<CatalogRow>) -> Result<Self, DatasetLoadError> {
        let documents: Vec<String> = rows.iter().map(CatalogRow::document).collect();
        let vectorizer = TfidfVectorizer::fit(&documents);
        if vectorizer.vocabulary_size() == 0 {
            return Err(DatasetLoadError::EmptyVocabulary);
        }

        let row_vectors = documents.iter().map(|d| vectorizer.transform(d)).collect();
        let soft_skill_demand =
            soft_skills_in_demand(rows.iter().map(|r| r.responsibilities.as_str()));

        Ok(CatalogContext {
            rows,
            vectorizer,
            row_vectors,
            soft_skill_demand,
        })
    }

    pub fn load(path: &Path) -> Result<Self, DatasetLoadError> {
        let context = Self::fit(load_catalog(path)?)?;
        info!(
            "Catalog loaded from {}: {} rows, vocabulary of {} terms",
            path.display(),
            context.rows.len(),
            context.vectorizer.vocabulary_size()
        );
        Ok(context)
    }

    pub fn rows(&self) -> &[CatalogRow] {
        &self.rows
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn row_vectors(&self) -> &[SparseVector] {
        &self.row_vectors
    }

    /// Soft-skill tokens that occur in at least one Responsibilities entry.
    pub fn soft_skill_demand(&self) -> &[&'static str] {
        &self.soft_skill_demand
    }
}
