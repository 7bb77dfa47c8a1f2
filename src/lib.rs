//! 新聞紙面レイアウト解析クライアント（CLI）
//!
//! Web版と同じ UploadState を使い、画像の選択 → 送信 → 結果表示を行う。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
