//! Uniform response envelope for all well endpoints.
//!
//! Every response is `{ "data": T | null, "error": { "message": "..." } | null }`.
//! Exactly one of the two is non-null; `well.remove` succeeds with an empty
//! `data` object.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::error::WellError;

/// Error detail inside [`Envelope`].
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub message: String,
}

/// Response body shared by success and failure.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub data: Option<T>,
    pub error: Option<ErrorDetail>,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Response {
        let body = Self {
            data: Some(data),
            error: None,
        };
        (StatusCode::OK, axum::Json(body)).into_response()
    }
}

impl Envelope<()> {
    fn failure(status: StatusCode, msg: impl Into<String>) -> Response {
        let body = Self {
            data: None,
            error: Some(ErrorDetail {
                message: msg.into(),
            }),
        };
        (status, axum::Json(body)).into_response()
    }
}

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// Validator, store or service error
    Well(WellError),
    /// Body could not be parsed into the expected request shape
    Rejected(JsonRejection),
    /// Well-typed but unacceptable argument
    InvalidArgument(String),
}

impl From<WellError> for ApiError {
    fn from(err: WellError) -> Self {
        Self::Well(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection)
    }
}

/// HTTP status for a well error.
pub const fn status_for(err: &WellError) -> StatusCode {
    match err {
        WellError::ArraySizeMismatch
        | WellError::HeadInconsistent
        | WellError::DepthNotMonotonic { .. }
        | WellError::EmptyTrajectory => StatusCode::UNPROCESSABLE_ENTITY,
        WellError::WellAlreadyExists => StatusCode::CONFLICT,
        WellError::WellNotFound => StatusCode::NOT_FOUND,
        WellError::Database(_) | WellError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Well(err) if err.is_domain() => {
                warn!(kind = err.kind(), error = %err, "Request rejected");
                Envelope::<()>::failure(status_for(&err), err.to_string())
            }
            Self::Well(err) => {
                error!(kind = err.kind(), error = %err, "Internal error");
                Envelope::<()>::failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            Self::Rejected(rejection) => {
                warn!(error = %rejection.body_text(), "Malformed request body");
                Envelope::<()>::failure(rejection.status(), rejection.body_text())
            }
            Self::InvalidArgument(msg) => {
                warn!(error = %msg, "Invalid argument");
                Envelope::<()>::failure(StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
        }
    }
}
