use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::pipeline::analyze;
use crate::analysis::ranker::rank_roles;
use crate::errors::AppError;
use crate::extraction::{extract_document, DocumentFormat, DocumentText};
use crate::models::analysis::{AnalysisReport, RankedRole};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_FIELD: &str = "job_description";

#[derive(Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub report: AnalysisReport,
}

#[derive(Deserialize)]
pub struct RankRequest {
    pub skills: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct RankResponse {
    pub top_roles: Vec<RankedRole>,
}

struct UploadedDocument {
    file_name: Option<String>,
    content: Bytes,
}

impl UploadedDocument {
    fn into_text(self, field: &str) -> Result<DocumentText, AppError> {
        let file_name = self
            .file_name
            .ok_or_else(|| AppError::Validation(format!("Field '{field}' has no file name")))?;
        let format = DocumentFormat::from_file_name(&file_name)?;
        let text = extract_document(&self.content, format)?;
        if text.is_empty() {
            debug!(field, "Uploaded document has no text");
        } else {
            debug!(field, lines = text.len(), "Extracted {file_name}");
        }
        Ok(text)
    }
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume = None;
    let mut job = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read field '{name}': {e}")))?;
        let upload = UploadedDocument { file_name, content };

        match name.as_str() {
            RESUME_FIELD => resume = Some(upload),
            JOB_FIELD => job = Some(upload),
            _ => {}
        }
    }

    let resume = resume
        .ok_or_else(|| AppError::Validation(format!("Missing '{RESUME_FIELD}' upload")))?;
    let job = job.ok_or_else(|| AppError::Validation(format!("Missing '{JOB_FIELD}' upload")))?;

    // Unzip, XML/PDF parsing and catalog scoring are CPU-bound.
    let catalog = Arc::clone(&state.catalog);
    let report = tokio::task::spawn_blocking(move || -> Result<AnalysisReport, AppError> {
        let resume = resume.into_text(RESUME_FIELD)?;
        let job = job.into_text(JOB_FIELD)?;
        Ok(analyze(&resume, &job, &catalog))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in analysis: {e}")))??;
    let analysis_id = Uuid::new_v4();

    info!(
        %analysis_id,
        match_percentage = report.skill_match.match_percentage,
        missing = report.skill_match.missing.len(),
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        analysis_id,
        analyzed_at: Utc::now(),
        report,
    }))
}

/// POST /api/v1/catalog/rank
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(req): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    Ok(Json(RankResponse {
        top_roles: rank_roles(&req.skills, &state.catalog),
    }))
}
