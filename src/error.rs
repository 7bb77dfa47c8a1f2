use layout_parser_common::UploadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] layout_parser_common::Error),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していない画像形式です: {0}")]
    UnsupportedImage(String),

    /// 送信前の検証エラー（ファイル未選択など）
    #[error("{0}")]
    Upload(#[from] UploadError),

    /// 解析サービスが失敗を返した（画面と同じメッセージ）
    #[error("解析エラー: {0}")]
    Analysis(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("注釈付き画像のデコードに失敗: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
