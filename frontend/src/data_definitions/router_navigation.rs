use common::navigation::NavigationBridge;
use common::query_codec;
use common::search_query::SearchQuery;
use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::routes::Route;

/// [`NavigationBridge`] over the Dioxus router: every push is one history
/// entry on the `/search` route.
#[derive(Clone)]
pub struct RouterNavigation {
    current: String,
    navigator: Navigator,
}

impl RouterNavigation {
    pub fn new(current: &SearchQuery) -> Self {
        Self { current: query_codec::encode(current), navigator: navigator() }
    }
}

impl NavigationBridge for RouterNavigation {
    fn current_query_string(&self) -> String {
        self.current.clone()
    }

    fn push(&mut self, query_string: &str) {
        dioxus::logger::tracing::debug!("navigate: /search?{}", query_string);
        self.current = query_string.to_string();
        self.navigator.push(Route::search_page_from_query_string(query_string));
    }
}
