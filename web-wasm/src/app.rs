//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{AbortController, File};
use layout_parser_common::{ApiConfig, UploadState};
use crate::api::{api_config, layout_api};
use crate::components::{
    controls::Controls,
    error_message::ErrorMessage,
    header::Header,
    results_panel::ResultsPanel,
    upload_area::{read_preview, UploadArea},
};

/// 解析サービスの稼働状況
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceStatus {
    Checking,
    Online,
    Offline(String),
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Checking => "checking",
            ServiceStatus::Online => "online",
            ServiceStatus::Offline(_) => "offline",
        }
    }

    pub fn label(&self) -> String {
        match self {
            ServiceStatus::Checking => "Checking service...".to_string(),
            ServiceStatus::Online => "Service online".to_string(),
            ServiceStatus::Offline(reason) => format!("Service unavailable: {}", reason),
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = api_config();
    let (service_status, set_service_status) = signal(ServiceStatus::Checking);

    {
        let config = config.clone();
        spawn_local(async move {
            let status = match layout_api::check_health(&config).await {
                Ok(health) if health.is_healthy() => ServiceStatus::Online,
                Ok(health) => ServiceStatus::Offline(health.status),
                Err(e) => ServiceStatus::Offline(e.user_message()),
            };
            log::info!("layout service at {}: {}", config.base_url(), status.label());
            set_service_status.set(status);
        });
    }

    view! {
        <div class="App">
            <Header service_status=service_status />
            <main>
                <LayoutParser config=config />
            </main>
        </div>
    }
}

/// 画像の選択 → 送信 → 結果表示
#[component]
pub fn LayoutParser(config: ApiConfig) -> impl IntoView {
    // 画面状態は1つのUploadStateにまとめる（File は Send でないのでローカル保持）
    let state = RwSignal::new_local(UploadState::<File>::new());
    let pending = StoredValue::new_local(None::<AbortController>);

    let abort_pending = move || {
        if let Some(controller) = pending.try_update_value(|slot| slot.take()).flatten() {
            controller.abort();
        }
    };

    let on_file_selected = move |file: File| {
        abort_pending();
        let name = file.name();
        let Some(ticket) = state.try_update(|s| s.select_file(file.clone(), name)) else {
            return;
        };
        read_preview(file, move |data_url| {
            state.update(|s| {
                s.set_preview(ticket, data_url);
            });
        });
    };

    let on_parse = move |_: ()| {
        let submission = match state.try_update(|s| s.submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(e)) => {
                log::info!("parse not started: {}", e);
                return;
            }
            None => return,
        };

        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        pending.set_value(controller);

        let config = config.clone();
        spawn_local(async move {
            log::info!("uploading {} to {}", submission.name, config.parse_layout_url());
            let outcome =
                layout_api::parse_layout(&config, &submission.payload, signal.as_ref()).await;
            match &outcome {
                Ok(response) => log::info!("received {} layout elements", response.layout.len()),
                Err(e) => log::error!("layout request failed: {}", e),
            }
            if state.try_update(|s| s.finish(submission.ticket, outcome)) == Some(true) {
                pending.set_value(None);
            }
        });
    };

    let on_reset = move |_: ()| {
        abort_pending();
        state.update(|s| s.reset());
    };

    let preview = Memo::new(move |_| state.with(|s| s.preview().map(str::to_string)));
    let can_submit = Memo::new(move |_| state.with(|s| s.can_submit()));
    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let has_file = Memo::new(move |_| state.with(|s| s.has_file()));
    let error = Memo::new(move |_| state.with(|s| s.error().map(str::to_string)));
    let result = Memo::new(move |_| state.with(|s| s.result_view()));

    view! {
        <div class=move || format!("layout-parser status-{}", state.with(|s| s.status().as_str()))>
            <div class="upload-section">
                <UploadArea preview=preview on_file_selected=on_file_selected />
                <Controls
                    can_submit=can_submit
                    is_loading=is_loading
                    has_file=has_file
                    on_parse=on_parse
                    on_reset=on_reset
                />
            </div>

            <ErrorMessage error=error />
            <ResultsPanel result=result />
        </div>
    }
}
