//! Request Extractors

use axum::extract::FromRequest;
use kernel::error::app_error::AppError;

/// `Json` whose rejections render as problem details
///
/// A body missing a required key is rejected here with 422 and never
/// reaches the rule set.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct CustomerJson<T>(pub T);
