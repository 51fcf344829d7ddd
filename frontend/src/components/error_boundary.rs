//! Error boundaries for rendering failures.
//!
//! Search failures never reach these: the result page controller turns them
//! into an empty page. What is left is a component that failed to render.

use dioxus::prelude::*;

use crate::routes::Route;

const BOX_STYLE: &str = "border: 1px solid red; padding: 10px; border-radius: 5px; margin: 15px;";

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render failure in {}: {:?}", boundary_name, err);
                let search_href = Route::search_page_from_query_string("").to_string();
                rsx! {
                    h1 {
                        style: "color:red; font-size: 46px; {BOX_STYLE}",
                        "Something went wrong",
                    }
                    p {
                        style: "color:darkred; font-size: 22px; {BOX_STYLE}",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "{search_href}",
                        style: "color:blue; font-size: 22px; border: 1px solid blue; padding: 10px; border-radius: 5px; margin: 15px;",
                        "Start a new search"
                    }
                    pre {
                        style: "color:black; text-wrap: auto; {BOX_STYLE}",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:blue; font-size: 20px; border: 1px solid blue; padding: 8px; border-radius: 5px; margin: 10px;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h2 {
                style: "color:red; font-size: 26px; margin: 5px;",
                "This panel failed to render",
            }

            pre {
                style: "color:darkred; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto; {BOX_STYLE}",
                "{error_txt}"
            }

            {children}
        }
    }
}
