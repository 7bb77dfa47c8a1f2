//! 解析・リセットボタン

use leptos::prelude::*;

#[component]
pub fn Controls<FP, FR>(
    #[prop(into)] can_submit: Signal<bool>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] has_file: Signal<bool>,
    on_parse: FP,
    on_reset: FR,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="controls">
            <button
                class="btn btn-primary"
                disabled=move || !can_submit.get()
                on:click={
                    let on_parse = on_parse.clone();
                    move |_| on_parse(())
                }
            >
                {move || if is_loading.get() { "Parsing..." } else { "Parse Layout" }}
            </button>

            <Show when=move || has_file.get()>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Reset"
                </button>
            </Show>
        </div>
    }
}
