//! エラーメッセージ表示

use leptos::prelude::*;

#[component]
pub fn ErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="error-message">
                    <span class="error-icon">"⚠️"</span>
                    {message}
                </div>
            }
        })
    }
}
