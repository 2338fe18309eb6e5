//! Well API route registration

pub mod envelope;
pub mod health;
pub mod rpc;
pub mod wells;

use crate::server::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the complete Well API router
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_body = state.config.max_body_bytes;

    let api_routes = Router::new()
        .route("/well.create", axum::routing::post(wells::create))
        .route("/well.remove", axum::routing::post(wells::remove))
        .route("/well.get", axum::routing::post(wells::get))
        .route("/well.at", axum::routing::post(wells::at))
        .route("/health", axum::routing::get(health::get_health));

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
