//! Health endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::config;
use crate::llm::ActiveOperation;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model: String,
    /// Whether a real reference document was loaded (vs. the fallback).
    pub reference_loaded: bool,
    /// The generation operation currently in flight, if any.
    pub generating: Option<ActiveOperation>,
}

/// `GET /api/health`
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: config::APP_VERSION,
        model: ctx.core.model().to_string(),
        reference_loaded: ctx.core.reference().is_loaded(),
        generating: ctx.core.generation().current_operation(),
    })
}
