//! Classification endpoint.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use uuid::Uuid;

use jl_protocol::Classification;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for classifying an utterance.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Raw user text.
    pub text: String,
    /// Optional "City, ST" hint for entity extraction.
    pub location_hint: Option<String>,
}

/// POST /api/v1/classify — resolve one utterance to one classification.
pub async fn classify(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> ApiResult<Json<Classification>> {
    if req.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".into()));
    }

    let request_id = Uuid::now_v7();
    let started = Instant::now();

    let ctx = state.context(req.location_hint);
    let result = state.classifier.classify(&req.text, &ctx).await;

    tracing::info!(
        request_id = %request_id,
        tier = result.tier(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "classified"
    );

    Ok(Json(result))
}
