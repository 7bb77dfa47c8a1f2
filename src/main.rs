use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use layout_parser_common::{UiStatus, UploadState};
use newspaper_layout::{cli, client, config, error, report, scanner};
use cli::{Cli, Commands, OutputFormat};
use client::{ImageUpload, LayoutClient};
use error::{AppError, Result};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.api_url.as_deref())?;
    let client = LayoutClient::new(config)?;

    match cli.command {
        Commands::Parse { image, format, save_annotated } => {
            if format == OutputFormat::Text {
                println!("📰 layout-parser - レイアウト解析\n");
            }

            let info = scanner::load_image(&image)?;
            if cli.verbose {
                eprintln!(
                    "  {} ({}, {} bytes) → {}",
                    info.file_name,
                    info.upload.mime,
                    info.upload.bytes.len(),
                    client.config().parse_layout_url()
                );
            }

            let mut state = UploadState::<ImageUpload>::new();
            state.select_file(info.upload, info.file_name);
            let submission = state.submit()?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(format!("{} を解析中...", submission.name));
            spinner.enable_steady_tick(Duration::from_millis(120));

            let outcome = client
                .parse_layout(&submission.name, submission.payload)
                .await;
            spinner.finish_and_clear();
            state.finish(submission.ticket, outcome);

            match state.status() {
                UiStatus::Success => {}
                UiStatus::Error => {
                    let message = state.error().unwrap_or_default().to_string();
                    return Err(AppError::Analysis(message));
                }
                other => {
                    return Err(AppError::Analysis(format!("unexpected state: {}", other.as_str())));
                }
            }

            let (Some(response), Some(view)) = (state.result(), state.result_view()) else {
                return Err(AppError::Analysis("empty result".into()));
            };

            match format {
                OutputFormat::Text => print!("{}", report::render_text(&submission.name, &view)),
                OutputFormat::Json => println!("{}", report::render_json(&submission.name, response)?),
            }

            if let Some(output) = save_annotated {
                if report::save_annotated(response, &output)? {
                    eprintln!("✔ 注釈付き画像を保存: {}", output.display());
                } else {
                    eprintln!("注釈付き画像はレスポンスに含まれていません");
                }
            }
        }

        Commands::Health => {
            let url = client.config().health_url();
            match client.health().await {
                Ok(health) if health.is_healthy() => {
                    println!("✔ {} ({})", health.message, url);
                }
                Ok(health) => {
                    return Err(AppError::Analysis(format!(
                        "service reported status '{}' ({})",
                        health.status, url
                    )));
                }
                Err(e) => return Err(AppError::Analysis(e.user_message())),
            }
        }
    }

    Ok(())
}
