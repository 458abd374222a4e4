//! Knowledge search endpoint.

use axum::Json;
use axum::extract::Query;
use serde::Deserialize;

use jl_protocol::KnowledgeSnippet;

use crate::error::{ApiError, ApiResult};

/// Query parameters for knowledge search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

/// GET /api/v1/search?q= — rank the knowledge corpus against a query.
pub async fn search(Query(params): Query<SearchParams>) -> ApiResult<Json<Vec<KnowledgeSnippet>>> {
    if params.q.trim().is_empty() {
        return Err(ApiError::BadRequest("q must not be empty".into()));
    }
    Ok(Json(jl_knowledge::search(&params.q)))
}
