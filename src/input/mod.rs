//! Input handling
//! Text extraction from uploaded resume documents

pub mod text_extractor;

pub use text_extractor::extract_pdf_text;
