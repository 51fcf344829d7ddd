//! State shared by every control on the search page.

use common::navigation::NavigationBridge;
use common::query_codec;
use common::result_page::ResultPageController;
use common::search_query::QueryMutation;
use dioxus::prelude::*;

use crate::api::search_api::search_articles;
use crate::data_definitions::router_navigation::RouterNavigation;

#[derive(Clone, Copy)]
pub struct SearchPageState {
    pub controller: Signal<ResultPageController>,
}

impl SearchPageState {
    pub fn navigation(&self) -> RouterNavigation {
        RouterNavigation::new(self.controller.peek().query())
    }

    /// Feeds a location change to the controller and starts the fetch it
    /// asks for. Responses that arrive after a newer location are dropped.
    pub fn load(&self, query_string: &str) {
        let mut controller = self.controller;
        let Some(ticket) = controller.write().navigate(query_string) else {
            return;
        };
        spawn(async move {
            let outcome = search_articles(ticket.request().query_string.clone()).await;
            controller.write().resolve(&ticket, outcome);
        });
    }

    /// Applies one control intent. An unchanged query re-enters the
    /// controller instead, so resubmitting after a failure retries.
    pub fn apply(&self, mutation: QueryMutation) {
        let mut nav = self.navigation();
        let current = nav.current_query();
        let next = current.apply(mutation);
        if next == current {
            self.load(&query_codec::encode(&next));
        } else {
            nav.push_query(&next);
        }
    }
}
