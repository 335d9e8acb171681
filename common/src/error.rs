//! エラー型定義

use thiserror::Error;

use crate::validation::ValidationErrors;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// fetch自体が失敗（オフライン、CORS等）
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx以外のレスポンス
    #[error("Request failed ({status}): {body}")]
    Http { status: u16, body: String },

    /// 2xxだがレスポンス形式が想定外
    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Validation failed: {} field(s) invalid", .0.len())]
    Invalid(ValidationErrors),
}

impl Error {
    /// アラート表示すべきエラーか（通信系のみ）
    pub fn is_alert(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Http { .. })
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
