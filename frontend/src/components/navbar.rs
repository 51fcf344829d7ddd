//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


/// Shared layout: a header strip above the routed page.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id:"x-nav-container",
            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            div {
                id:"x-nav-header",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 52px;
                    flex-shrink: 0;
                    padding: 0 16px;
                    background-color: #1C212D;
                ",
                Link {
                    to: Route::HomePage { },
                    span {
                        style: "color: white; font-size: 22px; font-weight: 500;",
                        "SCOAP3"
                    }
                }
                div { style: "flex-grow:1;" }
                IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
                IconLink { to: Route::search_page_from_query_string(""), icon: MdSearch, label: "Search" }
            }

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-height: 100px; height: calc(100% - 52px);",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "color:white; display:flex; align-items:center; gap: 6px; font-size: 15px;",
                title: "{label}",
                Icon { icon: icon, style: "width: 22px; height: 22px;" }
                "{label}"
            }
        }
    }
}
