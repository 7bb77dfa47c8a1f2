//! エラー型定義

use thiserror::Error;

/// サーバーに到達できない・原因不明の場合に表示するメッセージ
pub const FALLBACK_MESSAGE: &str =
    "Failed to parse layout. Make sure the backend server is running.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unexpected payload: {0}")]
    UnexpectedPayload(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// アップロード1回分の失敗
///
/// どのバリアントも画面上は1行の文字列として表示される。
/// 表示文字列は [`UploadError::user_message`] で取得する。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UploadError {
    #[error("Please select an image first")]
    NoFileSelected,

    #[error("A layout request is already in progress")]
    InFlight,

    #[error("{0}")]
    Transport(String),

    #[error("Request failed with status code {status}")]
    Server { status: u16, message: Option<String> },

    #[error("Invalid response from layout service: {0}")]
    InvalidResponse(String),

    #[error("{}", FALLBACK_MESSAGE)]
    Unknown,
}

impl UploadError {
    /// 画面に出すメッセージ
    ///
    /// 優先順位: サーバーの `error` フィールド → 通信エラーのメッセージ → 固定文言
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Server { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            UploadError::Transport(message) if message.trim().is_empty() => {
                FALLBACK_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}
