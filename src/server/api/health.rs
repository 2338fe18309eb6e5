//! Health check endpoint

use crate::server::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: &'static str,
    pub store_reachable: bool,
    pub timestamp: String,
}

/// GET /api/health
pub async fn get_health(State(app): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = app.wells.store();
    let reachable = match store.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, backend = store.backend_name(), "Store ping failed");
            false
        }
    };

    Json(HealthResponse {
        status: if reachable {
            "healthy".to_string()
        } else {
            "degraded".to_string()
        },
        store: store.backend_name(),
        store_reachable: reachable,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
