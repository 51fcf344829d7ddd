use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::Icon;

use common::facet_labels::{labeled_buckets, LabeledBucket};
use common::search_query::{FacetField, SearchQuery};
use common::search_result::SearchResponse;
use crate::api::search_api::search_articles;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "SCOAP3 Search - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            LandingOverview {}
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            "Open access articles in high-energy physics"
        }
    }
}

/// Unfiltered totals: the article count above the search card, and the
/// journal and partner buckets below it.
#[component]
fn LandingOverview() -> Element {
    let landing = use_resource(|| search_articles(String::new()));
    let response = match landing.read().as_ref() {
        Some(Ok(response)) => response.clone(),
        Some(Err(e)) => {
            dioxus::logger::tracing::warn!("landing search failed: {e}");
            SearchResponse::default()
        }
        None => return rsx! { TextSearchCard { count: 0 } },
    };
    rsx! {
        TextSearchCard { count: response.count }
        FacetTabs { response }
    }
}

#[component]
fn TextSearchCard(count: u64) -> Element {
    rsx! {
        div {
            id: "x-card-text-search",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 620px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "
                    font-size: 20px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Search {count} Open Access articles"
            }
            if count > 0 {
                SearchCardInput {}
            }
        }
    }
}

#[component]
fn SearchCardInput() -> Element {
    let n2 = navigator();
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                color: #111827;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "Search articles",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 14px;
                ",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        let search_q = SearchQuery::from_search(search_q.read().clone());
                        n2.push( Route::search_page_from_query(&search_q) );
                    }
                },
            }
        }
    }
}

fn tab_label(field: FacetField) -> &'static str {
    match field {
        FacetField::Journal => "Journals",
        FacetField::Country => "SCOAP3 partners",
    }
}

#[component]
fn FacetTabs(response: SearchResponse) -> Element {
    let mut active = use_signal(|| FacetField::Journal);
    let tabs = [FacetField::Journal, FacetField::Country];
    if tabs.iter().all(|field| response.facets.facet(*field).is_empty()) {
        return rsx! {
            div {
                style: "width: 620px; padding: 20px; text-align: center; color: rgba(0,0,0,0.5);",
                "No data"
            }
        };
    }

    let tab_buttons = tabs.into_iter().map(|field| {
        let selected = active() == field;
        let weight = if selected { 600 } else { 400 };
        let background = if selected { "white" } else { "transparent" };
        rsx! {
            button {
                key: "{field.query_key()}",
                style: "
                    border: none;
                    border-radius: 10px 10px 0 0;
                    padding: 10px 18px;
                    font-size: 15px;
                    font-weight: {weight};
                    background: {background};
                    cursor: pointer;
                ",
                onclick: move |_| active.set(field),
                "{tab_label(field)}"
            }
        }
    }).collect::<Vec<_>>();

    let field = active();
    let rows = labeled_buckets(field, response.facets.facet(field))
        .into_iter()
        .map(|bucket| {
            let row_key = bucket.key.clone();
            rsx! { LandingBucketRow { key: "{row_key}", field, bucket } }
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            id: "x-home-facet-tabs",
            style: "width: 620px;",
            div {
                style: "display: flex; gap: 4px;",
                {tab_buttons.into_iter()}
            }
            ul {
                style: "
                    background: white;
                    border-radius: 0 12px 12px 12px;
                    padding: 12px 18px;
                ",
                {rows.into_iter()}
            }
        }
    }
}

#[component]
fn LandingBucketRow(field: FacetField, bucket: LabeledBucket) -> Element {
    let target = Route::search_page_from_query(&SearchQuery::from_facet(field, bucket.key.clone()));
    rsx! {
        li {
            class: "x-facet-list-item",
            style: "
                display: flex;
                justify-content: space-between;
                padding: 6px 4px;
                font-size: 14px;
            ",
            Link { to: target, "{bucket.label}" }
            span {
                style: "
                    min-width: 28px;
                    padding: 1px 8px;
                    border-radius: 9999px;
                    background: #EEF2FF;
                    text-align: center;
                ",
                "{bucket.doc_count}"
            }
        }
    }
}
