use dioxus::prelude::*;
use common::search_query::QueryMutation;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::data_definitions::search_page_state::SearchPageState;


#[component]
pub fn SearchInputTopBar() -> Element {
    let state = use_context::<SearchPageState>();
    let original_search = use_memo(move || state.controller.read().query().search.clone());
    let mut modified_search = use_signal(|| original_search.peek().clone());
    // when url changes, we need to update the signals, as they are not reset by navigation.
    use_effect(move || {
        let new_search = original_search.read().clone();
        modified_search.set(new_search);
    });
    let search_has_changed = use_memo(move || modified_search.read().clone() != original_search.read().clone());
    let search_button_color = use_memo(move || if search_has_changed() { "blue" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        state.apply(QueryMutation::SetSearch(modified_search.read().trim().to_string()));
    };
    let search_oninput = move |event: Event<FormData>| {
        modified_search.set(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search articles",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{modified_search}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
    }
}
