use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Suspense plus error boundary around one panel of the search page.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                LoadingIndicator {}
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            align_items: "center",
            justify_content: "center",
            padding: "40px",
            div {
                style: "color: rgba(0,0,0,0.6); font-size: 20px;",
                "Searching articles..."
            }
        }
    }
}
