//! レイアウト解析サービスのHTTPクライアント
//!
//! Web版と同じく `image` フィールド1つの multipart/form-data を送る。
//! リトライやタイムアウト設定は行わない（1回だけ送信）。

use crate::error::Result;
use layout_parser_common::{
    ApiConfig, ErrorBody, HealthResponse, ParseLayoutResponse, UploadError, IMAGE_FIELD,
};
use reqwest::multipart::{Form, Part};

/// 送信する画像
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub mime: String,
}

pub struct LayoutClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl LayoutClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("layout-parser/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// 画像を送信してレイアウトを取得
    ///
    /// 失敗はすべて UploadError で返す（画面表示用のメッセージを作るため）。
    pub async fn parse_layout(
        &self,
        file_name: &str,
        upload: ImageUpload,
    ) -> std::result::Result<ParseLayoutResponse, UploadError> {
        let part = Part::bytes(upload.bytes)
            .file_name(file_name.to_string())
            .mime_str(&upload.mime)
            .map_err(transport_error)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let resp = self
            .http
            .post(self.config.parse_layout_url())
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;

        if !status.is_success() {
            return Err(UploadError::Server {
                status: status.as_u16(),
                message: ErrorBody::extract(&body),
            });
        }

        ParseLayoutResponse::from_json(&body)
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))
    }

    /// ヘルスチェック
    pub async fn health(&self) -> std::result::Result<HealthResponse, UploadError> {
        let resp = self
            .http
            .get(self.config.health_url())
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UploadError::Server { status: status.as_u16(), message: None });
        }

        resp.json::<HealthResponse>()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))
    }
}

fn transport_error(e: reqwest::Error) -> UploadError {
    UploadError::Transport(e.to_string())
}
