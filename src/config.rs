use crate::error::Result;
use layout_parser_common::{ApiConfig, ENV_API_URL};

/// 接続先を決める
///
/// 優先順位: `--api-url` → 環境変数 `LAYOUT_API_URL` → http://localhost:5000
/// Webと違い、不正な値はデフォルトに戻さずエラーにする。
pub fn load(api_url: Option<&str>) -> Result<ApiConfig> {
    if let Some(url) = api_url {
        return Ok(ApiConfig::new(url)?);
    }

    let env_value = std::env::var(ENV_API_URL).ok();
    Ok(ApiConfig::from_env_value(env_value.as_deref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_flag_overrides_env() {
        let config = load(Some("http://127.0.0.1:8000/")).expect("設定失敗");
        assert_eq!(config.parse_layout_url(), "http://127.0.0.1:8000/api/parse-layout");
    }

    #[test]
    fn test_invalid_flag() {
        let result = load(Some("127.0.0.1:8000"));
        assert!(matches!(result, Err(AppError::Common(_))));
    }
}
