//! Conversions into [`AppError`] and out to HTTP responses

use super::app_error::AppError;
use crate::validation::ValidationErrors;

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::validation(errors)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Body rejections keep axum's status and message
#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use super::kind::ErrorKind;

        match ErrorKind::from_status(rejection.status().as_u16()) {
            Some(kind) => AppError::new(kind, rejection.body_text()),
            None => AppError::bad_request(rejection.body_text()),
        }
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::{HeaderValue, StatusCode, header};

        let problem = self.problem();
        let status = StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(problem)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}
