use axum::body::Bytes;
use axum::{
    Json,
    extract::{Multipart, State},
};

use crate::pkg::internal::ai::normalize::parse_analysis;
use crate::pkg::internal::ai::prompt::build_analysis_prompt;
use crate::pkg::internal::ai::read::extract_text;
use crate::pkg::internal::ai::spec::AnalysisResult;
use crate::pkg::server::state::AppState;
use crate::prelude::{Error, Result};

/// `POST /api/analyze-cv` — multipart fields `cv` (PDF bytes) and
/// `jobUrl` (opaque text, never fetched). Validation runs before any
/// extraction or network work.
pub async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>> {
    let mut cv_data: Option<Bytes> = None;
    let mut job_url = String::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Validation(format!("invalid multipart body: {}", e)))?
    {
        match field.name().unwrap_or("") {
            "cv" => {
                cv_data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| Error::Validation(format!("unreadable CV upload: {}", e)))?,
                );
            }
            "jobUrl" => {
                job_url = field
                    .text()
                    .await
                    .map_err(|e| Error::Validation(format!("unreadable jobUrl field: {}", e)))?;
            }
            _ => {
                let _ = field
                    .bytes()
                    .await
                    .map_err(|e| Error::Validation(format!("invalid multipart body: {}", e)))?;
            }
        }
    }

    let cv_data = cv_data.ok_or_else(|| Error::Validation("No CV file uploaded".into()))?;
    if job_url.trim().is_empty() {
        return Err(Error::Validation("No Job URL provided".into()));
    }

    let cv_text = extract_text(&cv_data)?;
    tracing::debug!("extracted {} chars of CV text", cv_text.len());
    let prompt = build_analysis_prompt(&cv_text, &job_url);
    let reply = state.ai_client.complete(&prompt).await?;
    let analysis = parse_analysis(&reply)?;
    Ok(Json(analysis))
}
