//! RPC request extractor and per-method parameter types
//!
//! Requests have the shape `{"method": "well.create", "params": {...}}`.
//! `method` is informational and not checked against the route.

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::envelope::ApiError;
use crate::types::{Head, TrajectoryColumns, WellId};

/// Maximum well name length, matching the `VARCHAR(64)` column.
pub const MAX_NAME_LEN: usize = 64;

#[derive(Deserialize)]
struct RpcRequest<P> {
    params: P,
}

/// Extracts the `params` object of an RPC body.
///
/// Parse failures are rendered through [`ApiError`] so they share the
/// response envelope.
pub struct Rpc<P>(pub P);

#[async_trait]
impl<S, P> FromRequest<S> for Rpc<P>
where
    S: Send + Sync,
    P: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<RpcRequest<P>>::from_request(req, state).await?;
        Ok(Self(body.params))
    }
}

/// `well.create` params
#[derive(Debug, Deserialize)]
pub struct CreateParams {
    pub name: String,
    pub head: Head,
    #[serde(flatten)]
    pub trajectory: TrajectoryColumns,
}

impl CreateParams {
    /// Boundary check on the name; trajectory rules belong to the validator.
    pub fn check_name(&self) -> Result<(), ApiError> {
        if self.name.is_empty() {
            return Err(ApiError::InvalidArgument("name must not be empty".to_string()));
        }
        if self.name.chars().any(char::is_control) {
            return Err(ApiError::InvalidArgument(
                "name must not contain control characters".to_string(),
            ));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ApiError::InvalidArgument(format!(
                "name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// `well.remove` params
#[derive(Debug, Deserialize)]
pub struct RemoveParams {
    pub uuid: WellId,
}

/// `well.get` params
#[derive(Debug, Deserialize)]
pub struct GetParams {
    pub uuid: WellId,
    #[serde(default)]
    pub return_trajectory: bool,
}

/// `well.at` params
#[derive(Debug, Deserialize)]
pub struct AtParams {
    pub uuid: WellId,
    #[serde(rename = "MD")]
    pub md: f64,
}
