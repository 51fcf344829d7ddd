use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");
const ROBOTO: &str = "https://fonts.googleapis.com/css2?family=Roboto:wght@400;500;700&display=swap";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ROBOTO }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "SearchApp".to_string(),
            Router::<Route> {}
        }
    }
}
