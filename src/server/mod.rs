//! HTTP scoring service

pub mod handlers;
pub mod state;

use crate::config::Config;
use crate::error::Result;
use axum::routing::{get, post};
use axum::Router;
use log::info;

pub use handlers::AnalyzeResponse;
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .with_state(state)
}

/// Load the model, bind and serve until shutdown.
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState::new(config)?;
    info!(
        "Scoring service ready: model={}, {} skill keywords",
        state.engine.model_name(),
        state.engine.skill_count()
    );

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    info!("Listening on {}", config.server.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
