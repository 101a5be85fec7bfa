//! Study API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. The host UI is the only expected
//! consumer; CORS is permissive so a local dev frontend can talk to it.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the study API router.
pub fn study_api_router(core: Arc<CoreState>) -> Router {
    let ctx = ApiContext::new(core);

    Router::new()
        .route("/api/health", get(endpoints::health::check))
        .route("/api/study/case", post(endpoints::study::case))
        .route("/api/study/plan", post(endpoints::study::plan))
        .route("/api/study/solution", post(endpoints::study::solution))
        .route("/api/study/compare", post(endpoints::study::compare))
        .route(
            "/api/study/recommendations",
            post(endpoints::study::recommendations),
        )
        .route("/api/study/session", get(endpoints::study::session))
        .route("/api/export/:kind/:format", get(endpoints::export::download))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}
