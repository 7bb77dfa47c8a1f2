//! アップロードエリアコンポーネント
//!
//! クリックでファイル選択、またはドラッグ&ドロップで画像を1枚受け取る。
//! 選択済みならプレビューを表示する。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    #[prop(into)] preview: Signal<Option<String>>,
    on_file_selected: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_change = {
        let on_file_selected = on_file_selected.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file_selected(file);
            }
            // 同じファイルを選び直しても change が発火するように空にする
            input.set_value("");
        }
    };

    let on_drop = {
        let on_file_selected = on_file_selected.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };

            // <input accept="image/*"> と同じ条件
            if file.type_().starts_with("image/") {
                on_file_selected(file);
            } else {
                log::warn!("ignoring dropped non-image file: {}", file.name());
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input
                type="file"
                id="file-input"
                accept="image/*"
                class="file-input"
                on:change=on_change
            />
            <label for="file-input" class="file-label">
                {move || match preview.get() {
                    Some(src) => view! {
                        <img src=src alt="Preview" class="preview-image" />
                    }.into_any(),
                    None => view! {
                        <div class="upload-placeholder">
                            <span class="upload-icon">"📤"</span>
                            <p>"Click to select a newspaper image"</p>
                            <p class="upload-hint">"or drag and drop"</p>
                        </div>
                    }.into_any(),
                }}
            </label>
        </div>
    }
}

/// 画像をData URLとして読み込み、完了したら `on_loaded` を呼ぶ
///
/// 読み込みに失敗した場合は何も起きない（ログのみ）。
pub fn read_preview<F>(file: File, on_loaded: F)
where
    F: FnOnce(String) + 'static,
{
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("FileReader unavailable: {:?}", e);
            return;
        }
    };

    let file_name = file.name();
    let reader_clone = reader.clone();
    // 一度呼ばれたら解放される
    let onload = Closure::once_into_js(move |_: web_sys::ProgressEvent| {
        match reader_clone.result().ok().and_then(|r| r.as_string()) {
            Some(data_url) => on_loaded(data_url),
            None => log::warn!("preview for {} is not a data URL", file_name),
        }
    });

    reader.set_onload(Some(onload.unchecked_ref()));

    if let Err(e) = reader.read_as_data_url(&file) {
        log::warn!("failed to read {}: {:?}", file.name(), e);
    }
}
