//! 解析結果の出力
//!
//! テキストはWeb版の表示と同じ項目（種別・信頼度・座標）を並べる。

use crate::error::Result;
use base64::Engine;
use layout_parser_common::{LayoutElement, ParseLayoutResponse, ResultView, NO_RESULTS_MESSAGE};
use serde::Serialize;
use std::path::Path;

/// `--format json` の出力
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub file: &'a str,
    pub element_count: usize,
    pub has_annotated_image: bool,
    pub layout: &'a [LayoutElement],
}

pub fn render_text(file_name: &str, view: &ResultView) -> String {
    let mut out = format!("Layout Analysis Results: {}\n{}\n", file_name, view.heading());

    if view.is_empty() {
        out.push_str(NO_RESULTS_MESSAGE);
        out.push('\n');
        return out;
    }

    for element in &view.elements {
        out.push_str(&format!(
            "  {:>3}. {:<10} Confidence: {:>6}  X: {}  Y: {}  Width: {}  Height: {}\n",
            element.index + 1,
            element.kind,
            element.confidence,
            element.x,
            element.y,
            element.width,
            element.height,
        ));
    }
    out
}

pub fn render_json(file_name: &str, response: &ParseLayoutResponse) -> Result<String> {
    let report = JsonReport {
        file: file_name,
        element_count: response.layout.len(),
        has_annotated_image: response.image_with_layout.is_some(),
        layout: &response.layout,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// 注釈付き画像をPNGとして保存
///
/// レスポンスに画像が無ければ false
pub fn save_annotated(response: &ParseLayoutResponse, output: &Path) -> Result<bool> {
    let Some(encoded) = response.image_with_layout.as_deref() else {
        return Ok(false);
    };

    let bytes = base64::engine::general_purpose::STANDARD.decode(encoded)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, bytes)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use layout_parser_common::Block;
    use tempfile::tempdir;

    fn sample_response() -> ParseLayoutResponse {
        ParseLayoutResponse {
            layout: vec![
                LayoutElement {
                    kind: Some("Title".to_string()),
                    score: Some(0.95),
                    block: Some(Block {
                        x_1: Some(10.0),
                        y_1: Some(20.0),
                        width: Some(300.0),
                        height: Some(40.0),
                        ..Default::default()
                    }),
                },
                LayoutElement {
                    kind: None,
                    score: Some(0.4),
                    block: None,
                },
            ],
            image_with_layout: Some("iVBORw0KGgo=".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_text() {
        let view = ResultView::from_response(&sample_response());
        let text = render_text("page.png", &view);

        assert!(text.contains("Detected Layout Elements (2)"));
        assert!(text.contains("Title"));
        assert!(text.contains("95.0%"));
        assert!(text.contains("Unknown"));
        assert!(text.contains("X: N/A"));

        // 表示順はレスポンス順
        let title_pos = text.find("Title").unwrap();
        let unknown_pos = text.find("Unknown").unwrap();
        assert!(title_pos < unknown_pos);
    }

    #[test]
    fn test_render_text_empty() {
        let view = ResultView::from_response(&ParseLayoutResponse::default());
        let text = render_text("page.png", &view);
        assert!(text.contains("No layout elements detected."));
    }

    #[test]
    fn test_render_json() {
        let json = render_json("page.png", &sample_response()).expect("JSON生成失敗");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["file"], "page.png");
        assert_eq!(value["element_count"], 2);
        assert_eq!(value["has_annotated_image"], true);
        assert_eq!(value["layout"][0]["type"], "Title");
        assert!(value["layout"][1].get("type").is_none());
    }

    #[test]
    fn test_save_annotated() {
        let dir = tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("out").join("annotated.png");

        let saved = save_annotated(&sample_response(), &output).expect("保存失敗");
        assert!(saved);
        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn test_save_annotated_without_image() {
        let dir = tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("annotated.png");

        let saved = save_annotated(&ParseLayoutResponse::default(), &output).expect("保存失敗");
        assert!(!saved);
        assert!(!output.exists());
    }

    #[test]
    fn test_save_annotated_invalid_base64() {
        let dir = tempdir().expect("Failed to create temp dir");
        let response = ParseLayoutResponse {
            image_with_layout: Some("not base64!".to_string()),
            ..Default::default()
        };
        let result = save_annotated(&response, &dir.path().join("a.png"));
        assert!(matches!(result, Err(AppError::Base64(_))));
    }
}
