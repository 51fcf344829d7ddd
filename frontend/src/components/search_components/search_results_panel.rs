//! Result list with its header controls.

use dioxus::prelude::*;

use common::result_page::LoadState;
use crate::{components::{search_components::{search_result_item_card::SearchResultItemCard, search_result_list_controls::SearchResultListControls}, suspend_boundary::LoadingIndicator}, data_definitions::search_page_state::SearchPageState};

#[component]
pub fn SearchResultsPanel() -> Element {
    rsx! {
        div {
            id: "x-search-results-panel-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 1px;
                margin: 1px;
                padding: 7px;
                padding-top: 0px;
                height: 100%;
                width: 100%;
            ",
            SearchResultListControls {}

            div {
                style: "
                flex-grow: 1;
                width: 100%;
                max-height: calc(100% - 56px);
                ",
                SearchResultsView { }
            }
        }
    }
}

#[component]
fn SearchResultsView() -> Element {
    let state = use_context::<SearchPageState>();
    let controller = state.controller.read();
    let load_state = controller.state();
    let query = controller.query();
    let first_index = (query.page.saturating_sub(1) as u64) * query.page_size as u64;
    let result_list = controller.page_data().results.clone();
    let opacity = if load_state == LoadState::Loading { 0.5 } else { 1.0 };

    if result_list.is_empty() {
        return match load_state {
            LoadState::Idle | LoadState::Loading => rsx! { LoadingIndicator {} },
            LoadState::Loaded => rsx! { NoResults { filtered: query.has_filters(), failed: false } },
            LoadState::Failed => rsx! { NoResults { filtered: query.has_filters(), failed: true } },
        };
    }

    rsx! {
        ul {
            id: "x-search-panel-results-wrapper",
            style: "
                width: 100%;
                height: 100%;
                overflow-y: auto;
                opacity: {opacity};
            ",
            for (i, result) in result_list.into_iter().enumerate() {
                li {
                    key: "{result.id}-{i}",
                    SearchResultItemCard { result: result.clone(), result_index: first_index + i as u64 + 1 }
                }
            }
        }
    }
}

#[component]
fn NoResults(filtered: bool, failed: bool) -> Element {
    let message = if filtered { "No articles match this search." } else { "No articles found." };
    let retry_hint = failed.then(|| rsx! {
        div {
            style: "margin-top: 8px; font-size: 14px;",
            "Something went wrong while searching. Please try again."
        }
    });
    rsx! {
        div {
            style: "
                width: 100%;
                padding: 40px;
                text-align: center;
                font-size: 20px;
                color: rgba(0,0,0,0.6);
            ",
            "{message}"
            {retry_hint}
        }
    }
}
