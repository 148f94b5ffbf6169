//! Text extraction from PDF documents

use crate::error::{AnalysisError, Result};

/// Extract plain text from in-memory PDF bytes.
///
/// Extraction happens on the uploaded bytes directly; the service never
/// writes the document to disk.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AnalysisError::PdfExtraction(format!("Failed to extract text from PDF: {}", e)))?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_an_extraction_error() {
        let result = extract_pdf_text(b"definitely not a pdf");
        assert!(matches!(result, Err(AnalysisError::PdfExtraction(_))));
    }
}
