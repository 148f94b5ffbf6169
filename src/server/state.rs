//! Shared application state

use crate::config::Config;
use crate::error::Result;
use crate::processing::analyzer::AnalysisEngine;
use std::sync::Arc;

/// Shared application state.
///
/// The engine holds the embedding model, loaded once at startup and used
/// read-only across requests; no mutable state is shared.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AnalysisEngine>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let engine = AnalysisEngine::new(config)?;
        Ok(Self {
            engine: Arc::new(engine),
        })
    }
}
