use layout_parser_common::{ApiConfig, ENV_API_URL};
use newspaper_layout::client::LayoutClient;
use newspaper_layout::scanner;
use std::path::PathBuf;

fn live_client() -> Option<LayoutClient> {
    match std::env::var(ENV_API_URL) {
        Ok(url) if !url.trim().is_empty() => {
            let config = ApiConfig::new(&url).expect("invalid LAYOUT_API_URL");
            Some(LayoutClient::new(config).expect("client build failed"))
        }
        _ => {
            eprintln!("LAYOUT_API_URL not set; skipping live service test");
            None
        }
    }
}

#[tokio::test]
async fn live_health() {
    let Some(client) = live_client() else {
        return;
    };

    let health = client.health().await.expect("health check failed");
    assert!(health.is_healthy(), "unexpected status: {}", health.status);
}

#[tokio::test]
async fn live_parse_layout() {
    let Some(client) = live_client() else {
        return;
    };
    let image = match std::env::var("LAYOUT_SAMPLE_IMAGE") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => {
            eprintln!("LAYOUT_SAMPLE_IMAGE not set; skipping live parse test");
            return;
        }
    };

    let info = scanner::load_image(&image).expect("failed to load sample image");
    let response = client
        .parse_layout(&info.file_name, info.upload)
        .await
        .unwrap_or_else(|e| panic!("parse-layout failed: {}", e.user_message()));

    for element in &response.layout {
        let score = element.score.expect("score missing");
        assert!((0.0..=1.0).contains(&score));
    }
}
