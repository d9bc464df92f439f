//! Mapping of classification failures onto HTTP responses.

use crate::classification::services::UrgencyError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{error, warn};

/// Request-level failures of the classification endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The classifier rejected the task.
    #[error(transparent)]
    Classification(#[from] UrgencyError),
    /// The blocking classification task did not complete.
    #[error("classification worker failed: {0}")]
    Worker(#[from] JoinError),
}

impl ApiError {
    /// Returns the status code reported to the caller.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Classification(
                UrgencyError::MissingField(_) | UrgencyError::MalformedDueDate(_),
            ) => StatusCode::BAD_REQUEST,
            Self::Classification(UrgencyError::Annotation(_)) | Self::Worker(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "classification failed");
        } else {
            warn!(error = %self, "rejected classification request");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
