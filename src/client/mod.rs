//! HTTP client for the scoring service

use crate::error::{AnalysisError, Result};
use crate::processing::analyzer::MatchReport;
use crate::server::handlers::AnalyzeResponse;
use log::debug;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Thin client around `POST /analyze`. One blocking call per analysis,
/// no retry, no caching.
pub struct ScreeningClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScreeningClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AnalysisError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Upload a resume PDF and a job description, return the match report.
    ///
    /// Inputs are checked locally before anything is sent; a missing file
    /// or empty job description never reaches the wire.
    pub async fn analyze(&self, resume_path: &Path, job_description: &str) -> Result<MatchReport> {
        if job_description.trim().is_empty() {
            return Err(AnalysisError::InvalidInput(
                "Please provide both a resume and a job description.".to_string(),
            ));
        }

        let is_pdf = resume_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            return Err(AnalysisError::InvalidInput(format!(
                "Only PDF resumes are supported: {}",
                resume_path.display()
            )));
        }

        if !resume_path.exists() {
            return Err(AnalysisError::InvalidInput(format!(
                "Resume file does not exist: {}",
                resume_path.display()
            )));
        }

        let file_name = resume_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "resume.pdf".to_string());
        let bytes = tokio::fs::read(resume_path).await?;

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")
            .map_err(|e| AnalysisError::Network(format!("Failed to build upload: {}", e)))?;
        let form = Form::new().part("resume", part);

        let url = format!("{}/analyze", self.base_url);
        debug!("Calling scoring service: {}", url);

        let response = self
            .client
            .post(&url)
            .query(&[("job_description", job_description)])
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::Network(format!("Request failed: {}", e)))?;

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| AnalysisError::Network(format!("Invalid response from service: {}", e)))?;

        match body {
            AnalyzeResponse::Report(report) => Ok(report),
            AnalyzeResponse::Error { error } => Err(AnalysisError::Service(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_empty_job_description_is_rejected_locally() {
        let client = ScreeningClient::new("http://127.0.0.1:1".to_string()).unwrap();
        let result = client.analyze(&PathBuf::from("resume.pdf"), "   ").await;
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_non_pdf_resume_is_rejected_locally() {
        let client = ScreeningClient::new("http://127.0.0.1:1".to_string()).unwrap();
        let result = client
            .analyze(&PathBuf::from("resume.docx"), "python developer")
            .await;
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_missing_resume_is_rejected_locally() {
        let client = ScreeningClient::new("http://127.0.0.1:1".to_string()).unwrap();
        let result = client
            .analyze(&PathBuf::from("/nonexistent/resume.pdf"), "python developer")
            .await;
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }
}
