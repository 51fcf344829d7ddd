//! Facet sidebar: the year histogram and the checkbox lists.

use dioxus::prelude::*;
use common::{
    facet_labels::{LabeledBucket, display_label, labeled_buckets},
    multi_value_facet::{FacetWindow, MultiValueFacetState},
    search_query::FacetField,
};
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::{components::search_components::year_facet::YearFacet, data_definitions::search_page_state::SearchPageState};


#[component]
pub fn SearchFacetSidebar() -> Element {
    rsx! {
        div {
            id: "x-search-facet-sidebar",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                padding: 16px;
                width: 100%;
            ",
            YearFacet {}
            for field in FacetField::ALL {
                CheckboxFacet { key: "{field.query_key()}", field }
            }
        }
    }
}

#[component]
pub fn FacetTitle(title: String) -> Element {
    rsx! {
        h2 {
            style: "
                font-size: 18px;
                font-weight: 500;
                color: rgb(28, 33, 45);
                margin: 0 0 8px 0;
                border-bottom: 1px solid rgba(0,0,0,0.1);
            ",
            "{title}"
        }
    }
}

#[component]
fn CheckboxFacet(field: FacetField) -> Element {
    let state = use_context::<SearchPageState>();
    let controller = state.controller;
    let mut facet_state = use_signal(|| MultiValueFacetState::new(field, controller.peek().query()));
    // the url is the only source of truth: drop local state on every new query
    use_effect(move || {
        let query = controller.read().query().clone();
        facet_state.write().resync(&query);
    });
    let mut window = use_signal(FacetWindow::default);

    let mut buckets = labeled_buckets(field, controller.read().page_data().facets.facet(field));
    // selected values the current results no longer return stay unselectable otherwise
    for value in facet_state.read().selected() {
        if !buckets.iter().any(|b| &b.key == value) {
            buckets.push(LabeledBucket {
                key: value.clone(),
                label: display_label(field, value).into_owned(),
                doc_count: 0,
            });
        }
    }
    let has_more = window.read().has_more(buckets.len());
    let rows = window
        .read()
        .visible(&buckets)
        .iter()
        .cloned()
        .map(|bucket| {
            let LabeledBucket { key, label, doc_count } = bucket;
            let checked = facet_state.read().is_selected(&key);
            let value = key.clone();
            rsx! {
                li {
                    key: "{key}",
                    FacetCheckbox {
                        checked,
                        label,
                        doc_count,
                        ontoggle: move |_| {
                            facet_state.write().toggle(&value, &mut state.navigation());
                        },
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            FacetTitle { title: field.title().to_string() }
            if rows.is_empty() {
                div { style: "color: rgba(0,0,0,0.5); font-size: 15px;", "No values" }
            }
            ul { {rows.into_iter()} }
            if has_more {
                button {
                    style: "
                        border: none;
                        background: none;
                        color: #1D4ED8;
                        cursor: pointer;
                        font-size: 15px;
                        padding: 4px;
                    ",
                    onclick: move |_| window.write().toggle(),
                    "{window.read().toggle_label()}"
                }
            }
        }
    }
}


#[component]
fn FacetCheckbox(checked: bool, label: String, doc_count: u64, ontoggle: Callback<()>) -> Element {
    rsx! {

        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px;
                align-items: center;
            ",
            onclick: move |_e| {
                ontoggle(());
            },

            // FACET CHECKBOX
            if checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            // FACET NAME
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    font-weight: 400;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                title: "{label}",
                "{label}"
            }
            // FACET SPACER
            div { style: "flex: 1 1 auto;", }
            // FACET COUNT
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    font-weight: 400;
                    color: rgba(28, 33, 45, 0.7);
                    flex-shrink: 0;
                ",
                "{doc_count}"
            }
        }
    }
}
