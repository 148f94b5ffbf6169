//! Error handling for the resume screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not extract text from PDF.")]
    EmptyExtraction,

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Embedding generation error: {0}")]
    Embedding(String),

    #[error("Model loading error: {0}")]
    ModelLoading(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    /// Error body returned by the scoring service, surfaced verbatim.
    #[error("{0}")]
    Service(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AnalysisError {
    fn from(err: anyhow::Error) -> Self {
        AnalysisError::AnalysisFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_extraction_message() {
        let err = AnalysisError::EmptyExtraction;
        assert_eq!(err.to_string(), "Could not extract text from PDF.");
    }

    #[test]
    fn test_service_error_is_verbatim() {
        let err = AnalysisError::Service("upstream exploded".to_string());
        assert_eq!(err.to_string(), "upstream exploded");
    }
}
