//! 接続先設定
//!
//! 解析サービスのベースURLは環境変数 `LAYOUT_API_URL` で与える。
//! Webはビルド時（`option_env!`）、CLIは実行時に読む。

use crate::error::{Error, Result};

/// ベースURLを指定する環境変数名
pub const ENV_API_URL: &str = "LAYOUT_API_URL";

/// 未設定時のベースURL
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// レイアウト解析エンドポイント
pub const PARSE_LAYOUT_PATH: &str = "/api/parse-layout";

/// ヘルスチェックエンドポイント
pub const HEALTH_PATH: &str = "/api/health";

/// multipartで画像を載せるフィールド名
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}

impl ApiConfig {
    /// ベースURLを検証して設定を作る（末尾のスラッシュは除去）
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config("base URL is empty".into()));
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(Error::Config(format!(
                "base URL must start with http:// or https://: {}",
                trimmed
            )));
        }
        Ok(Self { base_url: trimmed.to_string() })
    }

    /// 環境変数の値から設定を作る（未設定・空文字ならデフォルト）
    pub fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value {
            Some(v) if !v.trim().is_empty() => Self::new(v),
            _ => Ok(Self::default()),
        }
    }

    /// 不正な値ならデフォルトに戻して警告を出す
    pub fn resolve(value: Option<&str>) -> Self {
        Self::from_env_value(value).unwrap_or_else(|e| {
            log::warn!("{}; falling back to {}", e, DEFAULT_BASE_URL);
            Self::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn parse_layout_url(&self) -> String {
        format!("{}{}", self.base_url, PARSE_LAYOUT_PATH)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ApiConfig::from_env_value(None).expect("設定失敗");
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.parse_layout_url(), "http://localhost:5000/api/parse-layout");
        assert_eq!(config.health_url(), "http://localhost:5000/api/health");
    }

    #[test]
    fn test_blank_value_uses_default() {
        let config = ApiConfig::from_env_value(Some("   ")).expect("設定失敗");
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://layout.example.com/").expect("設定失敗");
        assert_eq!(
            config.parse_layout_url(),
            "https://layout.example.com/api/parse-layout"
        );
    }

    #[test]
    fn test_invalid_scheme() {
        let result = ApiConfig::new("localhost:5000");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_resolve_falls_back() {
        assert_eq!(ApiConfig::resolve(Some("ftp://nope")), ApiConfig::default());
        assert_eq!(
            ApiConfig::resolve(Some("http://10.0.0.2:8080")).base_url(),
            "http://10.0.0.2:8080"
        );
    }
}
