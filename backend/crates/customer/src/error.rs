//! Customer Error Types
//!
//! Customer-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use std::time::Duration;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationErrors;
use platform::http_client::HttpClientError;
use thiserror::Error;

/// Customer-specific result type alias
pub type CustomerResult<T> = Result<T, CustomerError>;

/// Customer-specific error variants
#[derive(Debug, Error)]
pub enum CustomerError {
    /// One or more field or cross-field rules failed
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Upstream answered with a non-2xx status
    #[error("Upstream rejected the submission with status {status}")]
    UpstreamRejected { status: u16 },

    /// Upstream could not be reached
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream did not answer in time
    #[error("Upstream timed out after {0:?}")]
    UpstreamTimeout(Duration),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CustomerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CustomerError::Validation(_) => ErrorKind::UnprocessableEntity,
            CustomerError::UpstreamRejected { .. } | CustomerError::UpstreamUnavailable(_) => {
                ErrorKind::BadGateway
            }
            CustomerError::UpstreamTimeout(_) => ErrorKind::GatewayTimeout,
            CustomerError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Field errors, when this is a validation failure
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            CustomerError::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Log the error with appropriate level
    ///
    /// Validation failures log field paths only, never submitted values.
    fn log(&self) {
        match self {
            CustomerError::Validation(errors) => {
                let fields: Vec<&str> = errors.fields().collect();
                tracing::debug!(?fields, "Customer validation failed");
            }
            CustomerError::UpstreamRejected { status } => {
                tracing::warn!(status, "Upstream rejected customer submission");
            }
            CustomerError::UpstreamUnavailable(msg) => {
                tracing::error!(message = %msg, "Upstream unavailable");
            }
            CustomerError::UpstreamTimeout(after) => {
                tracing::warn!(?after, "Upstream timed out");
            }
            CustomerError::Internal(msg) => {
                tracing::error!(message = %msg, "Customer internal error");
            }
        }
    }
}

impl From<CustomerError> for AppError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::Validation(errors) => AppError::validation(errors),
            CustomerError::UpstreamRejected { status } => {
                AppError::bad_gateway("The customer service rejected the submission")
                    .with_action(format!("Upstream answered with status {status}; please try again later"))
            }
            CustomerError::UpstreamUnavailable(_) => {
                AppError::bad_gateway("The customer service is unreachable")
                    .with_action("Please try again later")
            }
            CustomerError::UpstreamTimeout(_) => {
                AppError::gateway_timeout("The customer service did not respond in time")
                    .with_action("Please try again later")
            }
            CustomerError::Internal(_) => AppError::internal("Internal server error"),
        }
    }
}

impl From<ValidationErrors> for CustomerError {
    fn from(errors: ValidationErrors) -> Self {
        CustomerError::Validation(errors)
    }
}

impl From<HttpClientError> for CustomerError {
    fn from(err: HttpClientError) -> Self {
        match err {
            HttpClientError::Timeout(after) => CustomerError::UpstreamTimeout(after),
            HttpClientError::Transport(msg) => CustomerError::UpstreamUnavailable(msg),
            HttpClientError::Build(msg) => CustomerError::Internal(msg),
        }
    }
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Same body shape as a failed /validate call
            CustomerError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(serde_json::json!({ "ok": false, "errors": errors })),
            )
                .into_response(),
            other => AppError::from(other).into_response(),
        }
    }
}
