//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum: one kind per status the service returns.

use serde::Serialize;

/// エラー種別の列挙体
///
/// API が返す HTTP ステータスごとに 1 つのバリアントを持ちます。
/// 上流サービスの失敗 (502/504) もここで表現します。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::UnprocessableEntity.status_code(), 422);
/// assert_eq!(ErrorKind::from_status(502), Some(ErrorKind::BadGateway));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: JSON として解析できない
    BadRequest,
    /// 415 - Unsupported Media Type: JSON の Content-Type がない
    UnsupportedMediaType,
    /// 422 - Unprocessable Entity: 形式不正または検証エラー
    UnprocessableEntity,
    /// 500 - Internal Server Error: サーバー内部エラー
    InternalServerError,
    /// 502 - Bad Gateway: 上流が拒否した、または到達できない
    BadGateway,
    /// 504 - Gateway Timeout: 上流が時間内に応答しない
    GatewayTimeout,
}

impl ErrorKind {
    const ALL: [ErrorKind; 6] = [
        ErrorKind::BadRequest,
        ErrorKind::UnsupportedMediaType,
        ErrorKind::UnprocessableEntity,
        ErrorKind::InternalServerError,
        ErrorKind::BadGateway,
        ErrorKind::GatewayTimeout,
    ];

    /// HTTP ステータスコードを取得
    ///
    /// ## Returns
    /// RFC 9110 に準拠した HTTP ステータスコード
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::UnsupportedMediaType.status_code(), 415);
    /// assert_eq!(ErrorKind::GatewayTimeout.status_code(), 504);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::UnsupportedMediaType => 415,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::GatewayTimeout => 504,
        }
    }

    /// 理由フレーズを取得
    ///
    /// Problem Details の `title` としても使われます。
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadGateway.as_str(), "Bad Gateway");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::UnsupportedMediaType => "Unsupported Media Type",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::GatewayTimeout => "Gateway Timeout",
        }
    }

    /// ステータスコードから種別を逆引き
    ///
    /// ## Arguments
    /// * `status` - HTTP ステータスコード
    ///
    /// ## Returns
    /// API が返さないステータスの場合は `None`
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status(422), Some(ErrorKind::UnprocessableEntity));
    /// assert_eq!(ErrorKind::from_status(404), None);
    /// ```
    pub fn from_status(status: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.status_code() == status)
    }

    /// サーバー側のエラーかどうかを判定
    ///
    /// 5xx系のエラーは `true` を返します。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
