//! レイアウト解析サービス連携
//!
//! `POST /api/parse-layout` に画像を multipart/form-data で送り、
//! レスポンスを ParseLayoutResponse として返す。
//! `GET /api/health` でサービスの稼働状況も確認できる。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, File, FormData, Request, RequestInit, RequestMode, Response};
use layout_parser_common::{
    ApiConfig, ErrorBody, HealthResponse, ParseLayoutResponse, UploadError, IMAGE_FIELD,
};

/// 画像1枚を `image` フィールドに載せたフォームを作る
pub fn build_image_form(file: &File) -> Result<FormData, UploadError> {
    let form = FormData::new().map_err(transport_error)?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
        .map_err(transport_error)?;
    Ok(form)
}

/// レイアウト解析を実行
///
/// # Arguments
/// * `config` - 接続先
/// * `file` - 選択された画像
/// * `signal` - リセット時にfetchを中断するためのAbortSignal
///
/// # Returns
/// 2xxならパース済みのレスポンス。それ以外はUploadError
pub async fn parse_layout(
    config: &ApiConfig,
    file: &File,
    signal: Option<&AbortSignal>,
) -> Result<ParseLayoutResponse, UploadError> {
    let form = build_image_form(file)?;

    // Content-Type（boundary付き）はブラウザが設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);
    opts.set_signal(signal);

    let resp = send(&config.parse_layout_url(), &opts).await?;
    let status = resp.status();
    let body = read_text(&resp).await?;

    if !resp.ok() {
        return Err(UploadError::Server {
            status,
            message: ErrorBody::extract(&body),
        });
    }

    ParseLayoutResponse::from_json(&body)
        .map_err(|e| UploadError::InvalidResponse(e.to_string()))
}

/// サービスのヘルスチェック
pub async fn check_health(config: &ApiConfig) -> Result<HealthResponse, UploadError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let resp = send(&config.health_url(), &opts).await?;
    if !resp.ok() {
        return Err(UploadError::Server { status: resp.status(), message: None });
    }

    let json = JsFuture::from(resp.json().map_err(transport_error)?)
        .await
        .map_err(transport_error)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| UploadError::InvalidResponse(e.to_string()))
}

async fn send(url: &str, opts: &RequestInit) -> Result<Response, UploadError> {
    let request = Request::new_with_str_and_init(url, opts).map_err(transport_error)?;

    let window = web_sys::window().ok_or(UploadError::Unknown)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport_error)?;
    resp_value.dyn_into::<Response>().map_err(|_| UploadError::Unknown)
}

async fn read_text(resp: &Response) -> Result<String, UploadError> {
    let text = JsFuture::from(resp.text().map_err(transport_error)?)
        .await
        .map_err(transport_error)?;
    Ok(text.as_string().unwrap_or_default())
}

/// JSの例外をUploadErrorに変換
///
/// fetchの失敗は `TypeError: Failed to fetch` のようなErrorオブジェクトで届く。
/// メッセージが取れなければ空文字になり、画面では固定文言が出る。
pub fn transport_error(value: JsValue) -> UploadError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_default();
    UploadError::Transport(message)
}
