//! Request handlers for the scoring service

use crate::processing::analyzer::MatchReport;
use crate::server::state::AppState;
use axum::extract::{Multipart, Query, State};
use axum::Json;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct AnalyzeParams {
    pub job_description: Option<String>,
}

/// Wire shape of `POST /analyze`: either the full report or a single
/// `error` field, always with HTTP 200. Failures are signaled in-body so
/// thin clients only ever parse one shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyzeResponse {
    Report(MatchReport),
    Error { error: String },
}

impl AnalyzeResponse {
    fn error(message: impl Into<String>) -> Self {
        AnalyzeResponse::Error {
            error: message.into(),
        }
    }
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /analyze - multipart `resume` part (PDF bytes) plus a
/// `job_description` string, read from the query first and from a
/// multipart text part otherwise.
pub async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
    mut multipart: Multipart,
) -> Json<AnalyzeResponse> {
    let mut resume_bytes: Option<Vec<u8>> = None;
    let mut form_job_description: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart request: {}", e);
                return Json(AnalyzeResponse::error(format!(
                    "Malformed multipart request: {}",
                    e
                )));
            }
        };

        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("resume") => match field.bytes().await {
                Ok(bytes) => resume_bytes = Some(bytes.to_vec()),
                Err(e) => {
                    warn!("Failed to read resume upload: {}", e);
                    return Json(AnalyzeResponse::error(format!(
                        "Failed to read resume upload: {}",
                        e
                    )));
                }
            },
            Some("job_description") => match field.text().await {
                Ok(text) => form_job_description = Some(text),
                Err(e) => {
                    warn!("Failed to read job description field: {}", e);
                    return Json(AnalyzeResponse::error(format!(
                        "Failed to read job description field: {}",
                        e
                    )));
                }
            },
            _ => {}
        }
    }

    let Some(resume) = resume_bytes else {
        return Json(AnalyzeResponse::error("No resume file provided."));
    };

    let job_description = params
        .job_description
        .or(form_job_description)
        .unwrap_or_default();

    // Extraction and embedding are CPU-bound; keep them off the runtime
    // worker threads.
    let engine = state.engine.clone();
    let result =
        tokio::task::spawn_blocking(move || engine.analyze(&resume, &job_description)).await;

    match result {
        Ok(Ok(report)) => {
            info!(
                "Analysis complete: final_score={:.2}, skill_match={:.2}",
                report.final_score, report.skill_match
            );
            Json(AnalyzeResponse::Report(report))
        }
        Ok(Err(e)) => {
            warn!("Analysis failed: {}", e);
            Json(AnalyzeResponse::error(e.to_string()))
        }
        Err(e) => {
            warn!("Analysis task panicked: {}", e);
            Json(AnalyzeResponse::error(format!("Analysis failed: {}", e)))
        }
    }
}
