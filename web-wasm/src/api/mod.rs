//! 外部サービス連携

pub mod layout_api;

use layout_parser_common::ApiConfig;

/// ビルド時の `LAYOUT_API_URL` から接続先を決める
pub fn api_config() -> ApiConfig {
    ApiConfig::resolve(option_env!("LAYOUT_API_URL"))
}
