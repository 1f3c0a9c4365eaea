//! Route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use reelcraft_core::{GenerationRequest, Platform, PipelineOutput};
use serde::Serialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::instrument;

use crate::{ApiError, AppState};

/// Entry in the platform listing.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformInfo {
    /// Wire identifier
    pub id: &'static str,
    /// Display label
    pub label: &'static str,
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/platforms", get(list_platforms))
        .route("/api/generate", post(generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// Known platforms, in display order.
async fn list_platforms() -> Json<Vec<PlatformInfo>> {
    Json(
        Platform::ALL
            .iter()
            .map(|p| PlatformInfo {
                id: p.id(),
                label: p.label(),
            })
            .collect(),
    )
}

/// Run the pipeline for one request.
#[instrument(skip_all)]
async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<PipelineOutput>, ApiError> {
    let Json(request) = payload?;
    let output = state.pipeline().run(request).await?;
    Ok(Json(output))
}
