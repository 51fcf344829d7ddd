use dioxus::prelude::*;

use common::result_page::ResultPageController;
use crate::{
    components::{search_components::{search_facets::SearchFacetSidebar, search_input_top_bar::SearchInputTopBar, search_results_panel::SearchResultsPanel}, suspend_boundary::SuspendWrapper},
    data_definitions::{search_page_state::SearchPageState, search_url_query::SearchUrlQuery},
};


fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

/// Search page
#[component]
pub fn SearchPage(query: SearchUrlQuery) -> Element {
    let title = if query.0.search.is_empty() { "all articles".to_string() } else { title_ellipsis(query.0.search.clone()) };
    rsx! {
        Title { "SCOAP3 Search: {title}" }
        SearchPageRootComponent { query_string: query.to_string() }
    }
}

#[component]
fn SearchPageRootComponent(query_string: ReadSignal<String>) -> Element {
    let controller = use_signal(ResultPageController::new);
    let state = use_context_provider(move || SearchPageState { controller });

    // every location change goes through the controller; it decides whether to fetch
    use_effect(move || {
        let query_string = query_string.read().clone();
        state.load(&query_string);
    });

    rsx! {
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",

                SearchInputTopBar {}
            }

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                div {
                    id: "x-search-facets-panel",
                    style: "
                        height: 100%;
                        min-width: 280px;
                        width: 320px;
                        flex-shrink: 0;
                        overflow-y: auto;
                        background-color: white;
                        border-right: 1px solid rgba(0,0,0,0.1);
                    ",
                    SuspendWrapper { SearchFacetSidebar {} }
                }
                div {
                    id: "x-search-results-panel",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        flex-grow: 1;
                        min-width: 400px;
                    ",
                    SuspendWrapper { SearchResultsPanel {} }
                }
            }
        }
    }
}
