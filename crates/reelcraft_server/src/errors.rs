//! Mapping pipeline failures onto HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reelcraft_core::FailureBody;
use reelcraft_error::{ErrorClass, ReelcraftError};
use tracing::{error, warn};

/// A failed request, rendered as a [`FailureBody`].
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: FailureBody,
}

impl ApiError {
    /// HTTP status for an error class.
    pub fn status_for(class: ErrorClass) -> StatusCode {
        match class {
            ErrorClass::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorClass::Configuration | ErrorClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorClass::Dependency => StatusCode::BAD_GATEWAY,
            ErrorClass::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Status code that will be sent.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Body that will be sent.
    pub fn body(&self) -> &FailureBody {
        &self.body
    }
}

impl From<ReelcraftError> for ApiError {
    fn from(err: ReelcraftError) -> Self {
        let class = err.class();
        let status = Self::status_for(class);
        if status.is_server_error() {
            error!(%class, error = %err, "Request failed");
        } else {
            warn!(%class, error = %err, "Request rejected");
        }
        Self {
            status,
            body: FailureBody::from(&err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Malformed request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            body: FailureBody::message(format!("Invalid request body: {}", rejection.body_text())),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
