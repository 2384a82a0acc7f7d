//! Calculation result display: summary line plus holdings table.

use leptos::*;

use crate::config::EMPTY_DETAILS_PLACEHOLDER;
use crate::types::{ResultView, TableView};

/// Render the current result model, when there is one.
///
/// The DOM is derived from the model alone; publishing a new model replaces
/// the previous summary and table wholesale. Cell and header text become
/// text nodes, never markup.
#[component]
pub fn ResultsSection(result: ReadSignal<Option<ResultView>>) -> impl IntoView {
    view! {
        <Show
            when=move || result.get().is_some()
            fallback=|| view! { }
        >
            <div class="results-section" id="resultsSection">
                <p class="summary" id="summary">
                    {move || result.get().map(|view| view.summary).unwrap_or_default()}
                </p>
                <table id="result-table">
                    {move || match result.get().map(|view| view.table) {
                        Some(TableView::Grid { headers, rows }) => view! {
                            <thead>
                                <tr>
                                    {headers
                                        .into_iter()
                                        .map(|header| view! { <th>{header}</th> })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|cells| view! {
                                        <tr>
                                            {cells
                                                .into_iter()
                                                .map(|cell| view! { <td>{cell}</td> })
                                                .collect_view()}
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        }
                        .into_view(),
                        Some(TableView::Placeholder) => view! {
                            <tbody>
                                <tr>
                                    <td class="placeholder">{EMPTY_DETAILS_PLACEHOLDER}</td>
                                </tr>
                            </tbody>
                        }
                        .into_view(),
                        None => ().into_view(),
                    }}
                </table>
            </div>
        </Show>
    }
}
