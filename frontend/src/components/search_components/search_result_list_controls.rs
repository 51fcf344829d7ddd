//! Result count, ordering, export and pagination above the result list.

use dioxus::prelude::*;
use common::{
    query_codec,
    result_page::LoadState,
    search_query::{Ordering, QueryMutation},
};
use dioxus_free_icons::{Icon, icons::{md_file_icons::MdFileDownload, md_navigation_icons::{MdArrowBack, MdArrowForward}}};

use crate::{api::search_api::search_export_url, data_definitions::search_page_state::SearchPageState};

#[component]
pub fn SearchResultListControls() -> Element {
    rsx! {
        div {
            id: "x-search-results-title-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                padding: 7px;
                margin: 1px;
                height: 56px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                SearchResultCountString { }
            }
            OrderingSelect {}
            ExportLink {}
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            // pagination buttons
            ControlNextPrevPage {}
        }
    }
}

#[component]
fn SearchResultCountString() -> Element {
    let state = use_context::<SearchPageState>();
    let controller = state.controller.read();
    match controller.state() {
        LoadState::Idle | LoadState::Loading => rsx! { "..." },
        LoadState::Failed => rsx! { "0 results found" },
        LoadState::Loaded => {
            let count = controller.page_data().count;
            rsx! { "{count} results found" }
        }
    }
}

#[component]
fn OrderingSelect() -> Element {
    let state = use_context::<SearchPageState>();
    let current = use_memo(move || state.controller.read().query().ordering);
    rsx! {
        select {
            style: "
                font-size: 15px;
                padding: 4px 8px;
                border-radius: 8px;
                border: 1px solid rgba(0,0,0,0.2);
                background: white;
            ",
            onchange: move |e| {
                if let Some(ordering) = Ordering::from_query_value(&e.value()) {
                    state.apply(QueryMutation::SetOrdering(ordering));
                }
            },
            for ordering in Ordering::ALL {
                option {
                    key: "{ordering.as_query_value()}",
                    value: ordering.as_query_value(),
                    selected: current() == ordering,
                    "{ordering.label()}"
                }
            }
        }
    }
}

#[component]
fn ExportLink() -> Element {
    let state = use_context::<SearchPageState>();
    let query_string = use_memo(move || query_codec::encode(state.controller.read().query()));
    let export_url = use_resource(move || search_export_url(query_string()));
    let href = match export_url.read().as_ref() {
        Some(Ok(url)) => url.clone(),
        Some(Err(e)) => {
            dioxus::logger::tracing::warn!("export link unavailable: {e}");
            return rsx! {};
        }
        None => return rsx! {},
    };
    rsx! {
        a {
            href: "{href}",
            target: "_blank",
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                font-size: 15px;
                text-decoration: none;
            ",
            Icon { icon: MdFileDownload, style: "width: 20px; height: 20px;" }
            "Export CSV"
        }
    }
}

#[component]
fn ControlNextPrevPage() -> Element {
    let state = use_context::<SearchPageState>();
    let max_pages = use_memo(move || state.controller.read().page_count());
    let selected_page = use_memo(move || state.controller.read().query().page as u64);
    let can_go_to_previous_page = use_memo(move || {
        selected_page() > 1
    });
    let can_go_to_next_page = use_memo(move || {
        selected_page() < max_pages()
    });
    let set_current_page = move |page: u64| {
        let page = u32::try_from(page).unwrap_or(u32::MAX);
        state.apply(QueryMutation::SetPage(page));
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            // prev page
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !can_go_to_previous_page(),
                onclick: move |_| {set_current_page(selected_page() - 1);}
            }
            // current page counter
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                    background-color: white;
                    border-radius: 2px;
                    border-left: 1px solid rgba(0,0,0,0.1);
                    border-right: 1px solid rgba(0,0,0,0.1);
                    padding: 4px 26px;
                    margin-left: -28px;
                    margin-right: -28px;
                    align-items: center;
                    align-content: center;
                ",
                "{selected_page()}"
                span {
                    style: "color: rgba(0,0,0,0.5);",
                    "/{max_pages()}"
                }
            }
            // next page
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !can_go_to_next_page(),
                onclick: move |_| {
                    set_current_page(selected_page() + 1);
                }
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
