//! ヘッダーコンポーネント

use leptos::prelude::*;
use crate::app::ServiceStatus;

#[component]
pub fn Header(service_status: ReadSignal<ServiceStatus>) -> impl IntoView {
    view! {
        <header class="App-header">
            <h1>"📰 Newspaper Layout Parser"</h1>
            <p>"Upload a newspaper image to analyze its layout structure"</p>
            <span class=move || format!("service-status {}", service_status.get().as_str())>
                {move || service_status.get().label()}
            </span>
        </header>
    }
}
