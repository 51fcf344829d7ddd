//! Search result item card component.

use dioxus::prelude::*;
use common::{
    formatted_text::{FormattedTextSpan, decompose_markup},
    search_result::{ArticleIdentifier, ArticleResult},
};
use dioxus_free_icons::{Icon, icons::md_action_icons::MdOpenInNew};

#[component]
pub fn SearchResultItemCard(result: ReadSignal<ArticleResult>, result_index: u64) -> Element {
    let result = result.read().clone();
    let title_spans = decompose_markup(&result.title);
    let abstract_spans = decompose_markup(&result.abstract_text);
    let authors = result.author_names_for_card().join("; ");
    let publication = result.primary_publication().map(|p| p.summary()).unwrap_or_default();
    let publication_date = result.publication_date.clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: stretch;
                gap: 7px;
                background: white;
                border: 3px solid #AAAAAA33;
                border-radius: 8px;
                padding: 12px 16px;
                margin: 8px 8px;
                width: calc(100% - 16px);
                box-sizing: border-box;
            ",
            // Row 1: INDEX - TITLE - SPACER - DATE
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: baseline;
                    gap: 12px;
                    width: 100%;
                ",
                span {
                    style: "font-size: 20px; font-weight: 200; color: rgba(0, 0, 0, 0.5);",
                    "{result_index}."
                }
                CardTitleSection { title_spans }
                div { style: "flex: 1 1 auto;" }
                span {
                    style: "
                        font-size: 15px;
                        font-weight: 300;
                        color: rgba(0, 0, 0, 0.5);
                        font-style: italic;
                        flex-shrink: 0;
                    ",
                    "{publication_date}"
                }
            }
            // Row 2: AUTHORS
            if !authors.is_empty() {
                div {
                    style: "font-size: 15px; color: rgb(55, 65, 81);",
                    "{authors}"
                }
            }
            // Row 3: JOURNAL
            if !publication.is_empty() {
                div {
                    style: "font-size: 15px; color: rgba(0, 0, 0, 0.6);",
                    "{publication}"
                }
            }
            // Row 4: ABSTRACT
            AbstractSnippetSection { abstract_spans }
            // Row 5: LINKS
            IdentifierLinks { identifiers: result.article_identifiers.clone() }
        }
    }
}

#[component]
fn CardTitleSection(title_spans: Vec<FormattedTextSpan>) -> Element {
    rsx! {
        div {
            style: "
                font-size: 20px;
                line-height: 28px;
                font-weight: 400;
                color: rgb(0, 0, 0);
                min-width: 0;
            ",
            {render_formatted_text_spans(title_spans)}
        }
    }
}

#[component]
fn AbstractSnippetSection(abstract_spans: Vec<FormattedTextSpan>) -> Element {
    rsx! {
        div {
            style: "
                font-size: 16px;
                line-height: 23px;
                font-weight: 400;
                color: rgb(0, 0, 0);
                overflow: hidden;
                display: -webkit-box;
                -webkit-line-clamp: 4;
                -webkit-box-orient: vertical;
                min-width: 0;
            ",
            {render_formatted_text_spans(abstract_spans)}
        }
    }
}

#[component]
fn IdentifierLinks(identifiers: Vec<ArticleIdentifier>) -> Element {
    let links = identifiers.into_iter().filter_map(|identifier| {
        let href = identifier.resolve_link();
        if href == "/" {
            return None;
        }
        Some(rsx! {
            a {
                key: "{identifier.identifier_type}-{identifier.identifier_value}",
                href: "{href}",
                target: "_blank",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 4px;
                    font-size: 14px;
                    text-decoration: none;
                ",
                "{identifier.identifier_type}: {identifier.identifier_value}"
                Icon { icon: MdOpenInNew, style: "width: 14px; height: 14px;" }
            }
        })
    }).collect::<Vec<_>>();
    rsx! {
        div {
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 16px;",
            {links.into_iter()}
        }
    }
}

// spans become elements; the markup itself is never injected
fn render_formatted_text_spans(spans: Vec<FormattedTextSpan>) -> Element {
    let spans = spans.into_iter().map(|i| {
        let font_style = if i.style.italic { "italic" } else { "normal" };
        let font_weight = if i.style.bold { "600" } else { "inherit" };
        let style = format!("font-style: {font_style}; font-weight: {font_weight};");
        if i.style.superscript {
            rsx! { sup { style: "{style}", "{i.text}" } }
        } else if i.style.subscript {
            rsx! { sub { style: "{style}", "{i.text}" } }
        } else {
            rsx! { span { style: "{style}", "{i.text}" } }
        }
    }).collect::<Vec<_>>();
    rsx! {
        {spans.into_iter()}
    }
}
