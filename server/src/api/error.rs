use super::{MessageResponse, Status};
use crate::state::AppContext;
use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cookbook_core::{InvalidIdFormat, ValidationError};
use thiserror::Error;

const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong";

/// Every failure a handler can report. Status codes are assigned here only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidIdFormat(#[from] InvalidIdFormat),

    #[error("{0}")]
    NotFound(String),

    #[error("{0} is required")]
    MissingParameter(&'static str),

    /// `detail` is only populated outside production.
    #[error("{}", .detail.as_deref().unwrap_or(INTERNAL_ERROR_MESSAGE))]
    Store { detail: Option<String> },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidIdFormat(_) | ApiError::MissingParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal() -> Self {
        ApiError::Store { detail: None }
    }
}

impl AppContext {
    /// Log a store failure and turn it into a 500.
    pub fn store_error(&self, err: StoreError) -> ApiError {
        tracing::error!(error = %err, "store operation failed");
        ApiError::Store {
            detail: self.expose_internal_errors.then(|| err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            Json(MessageResponse {
                status: Status::for_status_code(status),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
