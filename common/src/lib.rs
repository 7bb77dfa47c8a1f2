//! Newspaper Layout Parser Common Library
//!
//! CLIとWeb(WASM)で共有される型・表示変換・画面状態

pub mod config;
pub mod error;
pub mod render;
pub mod state;
pub mod types;

pub use config::{ApiConfig, DEFAULT_BASE_URL, ENV_API_URL, IMAGE_FIELD};
pub use error::{Error, Result, UploadError, FALLBACK_MESSAGE};
pub use render::{ElementView, ResultView, MISSING_VALUE, NO_RESULTS_MESSAGE, UNKNOWN_TYPE};
pub use state::{PreviewTicket, RequestTicket, SelectedFile, Submission, UiStatus, UploadState};
pub use types::{Block, ErrorBody, HealthResponse, LayoutElement, ParseLayoutResponse};
