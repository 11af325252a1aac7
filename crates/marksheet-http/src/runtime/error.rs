//! Error responses for the result API.
//!
//! Every failure surfaces as a JSON body with a single `error` field. The
//! wire contract does not distinguish validation failures from internal
//! ones by status code — both report 500 — so clients tell them apart by
//! the message alone.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use marksheet_core::MarkError;
use serde::Serialize;

/// Wire shape of a failed API call.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Error raised while handling a calculate request.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] MarkError);

impl ApiError {
    /// Status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(status = %status, error = %self, "calculate request failed");

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
