//! 解析結果の表示用データ
//!
//! ParseLayoutResponse → ResultView への純粋な変換。
//! 並べ替え・絞り込み・集計は行わず、レスポンスの順序のまま表示する。

use crate::types::{Block, LayoutElement, ParseLayoutResponse};

/// 種別が無い要素の表示名
pub const UNKNOWN_TYPE: &str = "Unknown";

/// 数値が無い項目の表示
pub const MISSING_VALUE: &str = "N/A";

/// 要素が0件のときのメッセージ
pub const NO_RESULTS_MESSAGE: &str = "No layout elements detected.";

/// 要素1件分の表示行
#[derive(Debug, Clone, PartialEq)]
pub struct ElementView {
    /// レスポンス内の位置（リストのキー）
    pub index: usize,
    pub kind: String,
    /// "87.5%" 形式
    pub confidence: String,
    pub x: String,
    pub y: String,
    pub width: String,
    pub height: String,
}

impl ElementView {
    pub fn from_element(index: usize, element: &LayoutElement) -> Self {
        let block = element.block.as_ref();
        let coord = |pick: fn(&Block) -> Option<f64>| format_coordinate(block.and_then(pick));

        Self {
            index,
            kind: element
                .kind
                .clone()
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
            confidence: format_confidence(element.score),
            x: coord(|b| b.x_1),
            y: coord(|b| b.y_1),
            width: coord(|b| b.width),
            height: coord(|b| b.height),
        }
    }
}

/// 結果セクション全体
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultView {
    /// `<img src>` にそのまま渡せるData URL
    pub annotated_image: Option<String>,
    pub elements: Vec<ElementView>,
}

impl ResultView {
    pub fn from_response(response: &ParseLayoutResponse) -> Self {
        Self {
            annotated_image: response.image_with_layout.as_deref().map(annotated_image_src),
            elements: response
                .layout
                .iter()
                .enumerate()
                .map(|(i, e)| ElementView::from_element(i, e))
                .collect(),
        }
    }

    pub fn heading(&self) -> String {
        format!("Detected Layout Elements ({})", self.elements.len())
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// base64のPNGを `<img>` 用のData URLにする
pub fn annotated_image_src(base64_png: &str) -> String {
    format!("data:image/png;base64,{}", base64_png)
}

/// 信頼度を百分率（小数1桁）で表示
pub fn format_confidence(score: Option<f64>) -> String {
    match score {
        // 1000倍して丸めてから戻す（{:.1}だけだと .x5 が偶数側に寄る）
        Some(s) => format!("{:.1}%", (s * 1000.0).round() / 10.0),
        None => MISSING_VALUE.to_string(),
    }
}

/// 座標を整数で表示（.5は0から遠い方へ丸める）
pub fn format_coordinate(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.0}", v.round()),
        None => MISSING_VALUE.to_string(),
    }
}
