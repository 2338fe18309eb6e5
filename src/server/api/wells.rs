//! Handlers for the four well methods

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::envelope::{ApiError, Envelope};
use super::rpc::{AtParams, CreateParams, GetParams, RemoveParams, Rpc};
use crate::server::AppState;
use crate::types::WellId;

#[derive(Serialize)]
pub struct CreateWellResponse {
    pub uuid: WellId,
}

#[derive(Serialize)]
pub struct Empty {}

/// POST /api/well.create
pub async fn create(
    State(app): State<Arc<AppState>>,
    Rpc(params): Rpc<CreateParams>,
) -> Result<Response, ApiError> {
    params.check_name()?;

    let uuid = app
        .wells
        .create(&params.name, params.head, &params.trajectory)
        .await?;

    Ok(Envelope::ok(CreateWellResponse { uuid }))
}

/// POST /api/well.remove
pub async fn remove(
    State(app): State<Arc<AppState>>,
    Rpc(params): Rpc<RemoveParams>,
) -> Result<Response, ApiError> {
    app.wells.remove(params.uuid).await?;
    Ok(Envelope::ok(Empty {}))
}

/// POST /api/well.get
pub async fn get(
    State(app): State<Arc<AppState>>,
    Rpc(params): Rpc<GetParams>,
) -> Result<Response, ApiError> {
    let view = app
        .wells
        .get(params.uuid, params.return_trajectory)
        .await?;

    debug!(
        well_id = %params.uuid,
        with_trajectory = params.return_trajectory,
        "Well fetched"
    );
    Ok(Envelope::ok(view))
}

/// POST /api/well.at
pub async fn at(
    State(app): State<Arc<AppState>>,
    Rpc(params): Rpc<AtParams>,
) -> Result<Response, ApiError> {
    let point = app.wells.at(params.uuid, params.md).await?;
    Ok(Envelope::ok(point))
}
