//! レイアウト解析APIの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ParseLayoutResponse: `/api/parse-layout` の成功レスポンス
//! - LayoutElement / Block: 検出された領域1件と、その座標
//! - ErrorBody: エラーレスポンスの `{"error": "..."}`
//! - HealthResponse: `/api/health` のレスポンス
//!
//! サーバーのJSONは欠損や型違いがあり得るため、各フィールドは
//! Optionで受け、型が合わない値は「無し」として読み込む。

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 領域の座標（ピクセル）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub x_1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub y_1: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub x_2: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub y_2: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// 検出されたレイアウト要素
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutElement {
    /// 要素種別（Text, Title, Figure, Table, List ...）
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,

    /// 信頼度 0.0〜1.0
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,

    #[serde(default, deserialize_with = "lenient_block", skip_serializing_if = "Option::is_none")]
    pub block: Option<Block>,
}

/// `/api/parse-layout` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseLayoutResponse {
    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    /// 検出順の要素一覧（並べ替えない）
    #[serde(default, deserialize_with = "lenient_layout")]
    pub layout: Vec<LayoutElement>,

    /// 枠を描き込んだPNG（base64）
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub image_with_layout: Option<String>,

    #[serde(default, deserialize_with = "lenient_usize", skip_serializing_if = "Option::is_none")]
    pub element_count: Option<usize>,
}

impl ParseLayoutResponse {
    /// レスポンス本文をパース
    ///
    /// トップレベルがオブジェクトでなければエラー。
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(Error::UnexpectedPayload(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// エラーレスポンス `{"error": "..."}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub error: Option<String>,
}

impl ErrorBody {
    /// 本文から `error` フィールドを取り出す（JSONでなければNone）
    pub fn extract(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
    }
}

/// `/api/health` のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).filter(|v| v.is_finite()))
}

fn lenient_usize<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_u64()).and_then(|v| usize::try_from(v).ok()))
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_bool()))
}

// 空文字は未設定と同じ扱い
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_block<'de, D>(deserializer: D) -> std::result::Result<Option<Block>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(v @ Value::Object(_)) => serde_json::from_value(v).ok(),
        _ => None,
    })
}

fn lenient_layout<'de, D>(deserializer: D) -> std::result::Result<Vec<LayoutElement>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    // 配列の要素数と順序は保つ（オブジェクトでない要素も空の要素として残す）
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::Object(_) => serde_json::from_value(item).unwrap_or_default(),
            _ => LayoutElement::default(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "success": true,
        "layout": [
            {"type": "Title", "score": 0.97,
             "block": {"x_1": 10.0, "y_1": 20.0, "x_2": 310.0, "y_2": 80.0, "width": 300.0, "height": 60.0}},
            {"type": "Text", "score": 0.81,
             "block": {"x_1": 12.5, "y_1": 90.0, "x_2": 300.0, "y_2": 400.0, "width": 287.5, "height": 310.0}}
        ],
        "image_with_layout": "iVBORw0KGgo=",
        "element_count": 2
    }"#;

    #[test]
    fn test_parse_full_response() {
        let response = ParseLayoutResponse::from_json(SAMPLE).expect("パース失敗");
        assert_eq!(response.success, Some(true));
        assert_eq!(response.element_count, Some(2));
        assert_eq!(response.image_with_layout.as_deref(), Some("iVBORw0KGgo="));
        assert_eq!(response.layout.len(), 2);
        assert_eq!(response.layout[0].kind.as_deref(), Some("Title"));
        assert_eq!(response.layout[1].score, Some(0.81));

        let block = response.layout[1].block.as_ref().expect("blockなし");
        assert_eq!(block.x_1, Some(12.5));
        assert_eq!(block.height, Some(310.0));
    }

    #[test]
    fn test_missing_block() {
        let response =
            ParseLayoutResponse::from_json(r#"{"layout": [{"type": "Text", "score": 0.5}]}"#)
                .expect("パース失敗");
        assert_eq!(response.layout.len(), 1);
        assert!(response.layout[0].block.is_none());
    }

    #[test]
    fn test_non_numeric_geometry_is_absent() {
        let body = r#"{"layout": [{"block": {"x_1": "12", "y_1": null, "width": 40, "height": true}}]}"#;
        let response = ParseLayoutResponse::from_json(body).expect("パース失敗");
        let block = response.layout[0].block.as_ref().expect("blockなし");
        assert_eq!(block.x_1, None);
        assert_eq!(block.y_1, None);
        assert_eq!(block.width, Some(40.0));
        assert_eq!(block.height, None);
    }

    #[test]
    fn test_block_not_an_object() {
        let body = r#"{"layout": [{"type": "Figure", "block": [1, 2, 3, 4]}]}"#;
        let response = ParseLayoutResponse::from_json(body).expect("パース失敗");
        assert_eq!(response.layout[0].kind.as_deref(), Some("Figure"));
        assert!(response.layout[0].block.is_none());
    }

    #[test]
    fn test_layout_missing_or_not_array() {
        let response = ParseLayoutResponse::from_json("{}").expect("パース失敗");
        assert!(response.layout.is_empty());
        assert!(response.image_with_layout.is_none());

        let response = ParseLayoutResponse::from_json(r#"{"layout": "oops"}"#).expect("パース失敗");
        assert!(response.layout.is_empty());
    }

    #[test]
    fn test_non_object_elements_keep_position() {
        let body = r#"{"layout": [null, {"type": "List"}, 7]}"#;
        let response = ParseLayoutResponse::from_json(body).expect("パース失敗");
        assert_eq!(response.layout.len(), 3);
        assert_eq!(response.layout[0], LayoutElement::default());
        assert_eq!(response.layout[1].kind.as_deref(), Some("List"));
        assert_eq!(response.layout[2], LayoutElement::default());
    }

    #[test]
    fn test_empty_strings_are_absent() {
        let body = r#"{"layout": [{"type": ""}], "image_with_layout": ""}"#;
        let response = ParseLayoutResponse::from_json(body).expect("パース失敗");
        assert!(response.layout[0].kind.is_none());
        assert!(response.image_with_layout.is_none());
    }

    #[test]
    fn test_top_level_must_be_object() {
        let result = ParseLayoutResponse::from_json("[1, 2]");
        assert!(matches!(result, Err(Error::UnexpectedPayload(_))));

        let result = ParseLayoutResponse::from_json("<html>");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let element = LayoutElement {
            kind: Some("Table".to_string()),
            score: Some(0.5),
            block: None,
        };
        let json = serde_json::to_string(&element).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"type":"Table","score":0.5}"#);
    }

    #[test]
    fn test_error_body_extract() {
        assert_eq!(
            ErrorBody::extract(r#"{"error": "Invalid image format"}"#).as_deref(),
            Some("Invalid image format")
        );
        assert_eq!(ErrorBody::extract(r#"{"message": "nope"}"#), None);
        assert_eq!(ErrorBody::extract("Internal Server Error"), None);
    }

    #[test]
    fn test_health_response() {
        let health: HealthResponse = serde_json::from_str(
            r#"{"status": "healthy", "message": "Layout Parser API is running"}"#,
        )
        .expect("デシリアライズ失敗");
        assert!(health.is_healthy());
        assert!(!HealthResponse::default().is_healthy());
    }
}
