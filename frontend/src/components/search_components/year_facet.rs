//! Publication year histogram with a two-handle range slider.

use dioxus::prelude::*;
use common::{range_facet::RangeFacetState, search_query::SearchQuery};

use crate::{components::search_components::search_facets::FacetTitle, data_definitions::search_page_state::SearchPageState};

const BAR_AREA_HEIGHT_PX: u64 = 90;

#[component]
pub fn YearFacet() -> Element {
    let state = use_context::<SearchPageState>();
    let controller = state.controller;
    let mut range = use_signal(|| RangeFacetState::new(&[], &SearchQuery::default()));
    // rebuilt from the latest buckets and query; a drag in progress is dropped
    use_effect(move || {
        let controller = controller.read();
        range.set(RangeFacetState::new(controller.page_data().facets.publication_year(), controller.query()));
    });

    let facet = range.read().clone();
    if facet.is_empty() {
        return rsx! {
            div {
                FacetTitle { title: "Year".to_string() }
                div { style: "color: rgba(0,0,0,0.5); font-size: 15px;", "No data" }
            }
        };
    }

    let max_count = facet.buckets().iter().map(|b| b.doc_count).max().unwrap_or(0).max(1);
    let last_index = facet.len() - 1;
    let (start_index, end_index) = facet.selection().map(|s| (s.start_index, s.end_index)).unwrap_or((0, last_index));
    let selected_label = facet.selected_years().map(|r| r.to_string()).unwrap_or_default();
    let hovered_label = facet.hovered().map(|b| format!("{}: {} articles", b.year, b.doc_count));
    let disabled = facet.is_disabled();

    let bars = facet.bars().into_iter().map(|bar| {
        let height = (bar.doc_count * BAR_AREA_HEIGHT_PX / max_count).max(2);
        let color = match (bar.hovered, bar.highlighted) {
            (true, _) => "#4F46E5",
            (false, true) => "#1C212D",
            (false, false) => "#CBD5E1",
        };
        rsx! {
            div {
                key: "{bar.year}",
                class: "x-year-bar",
                style: "
                    flex: 1 1 0;
                    height: {height}px;
                    background-color: {color};
                    border-radius: 2px 2px 0 0;
                    cursor: pointer;
                ",
                title: "{bar.year}",
                onclick: move |_| {
                    range.write().set_range_by_single_bucket(bar.index, &mut state.navigation());
                },
                onmouseenter: move |_| range.write().hover(Some(bar.index)),
            }
        }
    }).collect::<Vec<_>>();

    rsx! {
        div {
            FacetTitle { title: "Year".to_string() }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: flex-end;
                    gap: 2px;
                    height: {BAR_AREA_HEIGHT_PX}px;
                    width: 100%;
                ",
                onmouseleave: move |_| range.write().hover(None),
                {bars.into_iter()}
            }
            div {
                style: "font-size: 13px; color: rgba(0,0,0,0.6); height: 18px;",
                "{hovered_label.as_deref().unwrap_or_default()}"
            }
            input {
                class: "x-year-slider",
                r#type: "range",
                min: "0",
                max: "{last_index}",
                value: "{start_index}",
                disabled,
                oninput: move |e| {
                    let Ok(i) = e.value().parse::<usize>() else { return };
                    range.write().drag_to(i, end_index);
                },
                onchange: move |_| range.write().commit_drag(&mut state.navigation()),
            }
            input {
                class: "x-year-slider",
                r#type: "range",
                min: "0",
                max: "{last_index}",
                value: "{end_index}",
                disabled,
                oninput: move |e| {
                    let Ok(j) = e.value().parse::<usize>() else { return };
                    range.write().drag_to(start_index, j);
                },
                onchange: move |_| range.write().commit_drag(&mut state.navigation()),
            }
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    justify-content: space-between;
                    font-size: 15px;
                ",
                span { "{selected_label}" }
                if facet.is_filtered() {
                    button {
                        style: "
                            border: none;
                            background: none;
                            color: #1D4ED8;
                            cursor: pointer;
                            font-size: 15px;
                        ",
                        onclick: move |_| range.write().reset(&mut state.navigation()),
                        "Reset"
                    }
                }
            }
        }
    }
}
