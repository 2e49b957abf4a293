use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{debug, error};

use crate::model::ErrorResponse;
use aperture_core::{IssueError, ProviderError, StoreError};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Request-level failures, mapped to HTTP at the boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("image provider is not configured: missing OPENAI_API_KEY")]
    ProviderNotConfigured,
    #[error("link backend is not configured; check startup logs")]
    LinksNotConfigured,
    #[error("image generation failed: {0}")]
    Upstream(#[from] ProviderError),
    #[error("{0}")]
    Storage(#[from] StoreError),
    #[error("short link not found or expired")]
    NotFound,
}

impl From<IssueError> for ApiError {
    fn from(e: IssueError) -> Self {
        match e {
            IssueError::Storage(e) => ApiError::Storage(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(_) => {
                debug!(error = %self, "Rejecting invalid request");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            // Lookup misses answer in plain text, not JSON.
            ApiError::NotFound => {
                debug!("Link lookup missed");
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
            ApiError::ProviderNotConfigured
            | ApiError::LinksNotConfigured
            | ApiError::Upstream(_)
            | ApiError::Storage(_) => {
                error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
