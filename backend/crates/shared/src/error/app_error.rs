//! Application Error - Unified error type for the application
//!
//! [`AppError`] is what leaves the service: a kind, a message safe for the
//! client, an optional next step, and per-field messages for validation
//! failures. The underlying cause stays server side.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::Serialize;

use super::kind::ErrorKind;
use crate::validation::ValidationErrors;

type Cause = Box<dyn Error + Send + Sync + 'static>;

/// アプリケーション統一エラー型
///
/// サービスの外へ出るエラーはすべてこの型を通ります。
/// ビルダーパターンを使用してエラーを構築できます。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - クライアントに返してよいメッセージ
/// * `action` - ユーザーが取るべきアクション（オプション）
/// * `field_errors` - 検証エラー時のフィールドごとのメッセージ（オプション）
/// * `cause` - 元のエラー（オプション、ログ専用でレスポンスには含めない）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::bad_gateway("Upstream rejected the submission")
///     .with_action("Please try again later");
/// assert_eq!(err.kind(), ErrorKind::BadGateway);
/// assert_eq!(err.problem().status, 502);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    field_errors: Option<ValidationErrors>,
    cause: Option<Cause>,
}

/// アプリケーション結果型エイリアス
///
/// `Result<T, AppError>` の省略形です。
///
/// ## Examples
/// ```rust
/// use kernel::error::app_error::{AppError, AppResult};
///
/// fn parse_postcode(raw: &str) -> AppResult<u16> {
///     raw.parse()
///         .map_err(|e| AppError::bad_request("Postcode must be numeric").with_source(e))
/// }
///
/// assert_eq!(parse_postcode("1000").unwrap(), 1000);
/// assert!(parse_postcode("abc").is_err());
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// RFC 7807 Problem Details レスポンスボディ
///
/// `action` と `errors` は値がある場合のみ出力されます。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: &'static str,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    ///
    /// ## Arguments
    /// * `kind` - エラー種別
    /// * `message` - クライアント向けメッセージ
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::{app_error::AppError, kind::ErrorKind};
    /// let err = AppError::new(ErrorKind::UnsupportedMediaType, "Expected a JSON body");
    /// assert_eq!(err.message(), "Expected a JSON body");
    /// ```
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
            field_errors: None,
            cause: None,
        }
    }

    /// 400 Bad Request エラー
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// 422 Unprocessable Entity エラー（フィールドごとのメッセージ付き）
    ///
    /// ## Arguments
    /// * `errors` - フィールドパス → メッセージ
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::AppError;
    /// use kernel::validation::ValidationErrors;
    ///
    /// let err = AppError::validation(ValidationErrors::single("postcode", "Bad postcode"));
    /// assert_eq!(err.problem().status, 422);
    /// assert!(err.field_errors().is_some());
    /// ```
    pub fn validation(errors: ValidationErrors) -> Self {
        let mut err = Self::new(ErrorKind::UnprocessableEntity, "Validation failed");
        err.field_errors = Some(errors);
        err
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// 502 Bad Gateway エラー
    #[inline]
    pub fn bad_gateway(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadGateway, message)
    }

    /// 504 Gateway Timeout エラー
    #[inline]
    pub fn gateway_timeout(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::GatewayTimeout, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// ユーザー向けアクションを設定
    ///
    /// ## Arguments
    /// * `action` - ユーザーが取るべきアクション
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 元のエラーを設定（ログ用、レスポンスには出さない）
    ///
    /// ## Arguments
    /// * `cause` - 元のエラー
    #[inline]
    pub fn with_source<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(Box::new(cause));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// アクションを取得
    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// フィールドエラーを取得
    #[inline]
    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        self.field_errors.as_ref()
    }

    /// クライアントへ返す Problem Details を組み立てる
    ///
    /// `cause` は含まれません。
    pub fn problem(&self) -> ProblemDetails {
        let status = self.kind.status_code();
        ProblemDetails {
            type_uri: format!("https://httpstatuses.io/{status}"),
            title: self.kind.as_str(),
            status,
            detail: self.message.to_string(),
            action: self.action.as_ref().map(|a| a.to_string()),
            errors: self.field_errors.clone(),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("action", &self.action)
            .field("field_errors", &self.field_errors)
            .field("cause", &self.cause)
            .finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field_errors {
            Some(errors) => write!(f, "{}: {} ({errors})", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn Error + 'static))
    }
}
