//! 解析結果コンポーネント
//!
//! 注釈付き画像と、検出された要素の一覧を表示する。

use leptos::prelude::*;
use layout_parser_common::{ElementView, ResultView, NO_RESULTS_MESSAGE};

#[component]
pub fn ResultsPanel(#[prop(into)] result: Signal<Option<ResultView>>) -> impl IntoView {
    move || {
        result.get().map(|result| {
            let heading = result.heading();

            let annotated = result.annotated_image.clone().map(|src| {
                view! {
                    <div class="result-image">
                        <h3>"Annotated Image"</h3>
                        <img src=src alt="Layout analysis" class="annotated-image" />
                    </div>
                }
            });

            let details = if result.is_empty() {
                view! { <p class="no-results">{NO_RESULTS_MESSAGE}</p> }.into_any()
            } else {
                view! {
                    <div class="layout-list">
                        {result
                            .elements
                            .into_iter()
                            .map(|element| view! { <ElementCard element=element /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            };

            view! {
                <div class="results-section">
                    <h2>"Layout Analysis Results"</h2>
                    {annotated}
                    <div class="layout-details">
                        <h3>{heading}</h3>
                        {details}
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn ElementCard(element: ElementView) -> impl IntoView {
    // 種別ごとの色分けはCSS側（type-text, type-title ...）
    let type_class = format!("layout-type type-{}", element.kind.to_lowercase());

    view! {
        <div class="layout-item">
            <div class="layout-item-header">
                <span class=type_class>{element.kind}</span>
                <span class="layout-confidence">"Confidence: " {element.confidence}</span>
            </div>
            <div class="layout-coordinates">
                <div>"X: " {element.x}</div>
                <div>"Y: " {element.y}</div>
                <div>"Width: " {element.width}</div>
                <div>"Height: " {element.height}</div>
            </div>
        </div>
    }
}
