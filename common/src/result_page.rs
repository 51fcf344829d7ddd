//! Per-page orchestration: which query is in effect, which request answers
//! it, and what the view should render meanwhile.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::query_codec;
use crate::search_query::SearchQuery;
use crate::search_request::{SearchRequest, SearchRequestBuilder};
use crate::search_result::{ArticleResult, SearchFacets, SearchResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What the result list, pagination and facets render from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageData {
    pub count: u64,
    pub results: Vec<ArticleResult>,
    pub facets: SearchFacets,
}

impl PageData {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl From<SearchResponse> for PageData {
    fn from(response: SearchResponse) -> Self {
        Self { count: response.count, results: response.results, facets: response.facets }
    }
}

/// Handed out for every fetch the controller wants performed. Only the
/// ticket with the latest sequence number may update the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    query: SearchQuery,
    request: SearchRequest,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn request(&self) -> &SearchRequest {
        &self.request
    }
}

/// `Idle -> Loading -> {Loaded | Failed}` with stale-response discard.
///
/// Nothing is retried automatically: a failed page only reloads when the
/// next navigation arrives.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPageController {
    state: LoadState,
    query: SearchQuery,
    data: PageData,
    latest_seq: u64,
}

impl ResultPageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// The decoded query every control reads from.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn page_data(&self) -> &PageData {
        &self.data
    }

    pub fn page_count(&self) -> u64 {
        self.query.page_count(self.data.count)
    }

    /// Handles a location change. Returns the fetch to perform, or `None`
    /// when the decoded query is already loaded or loading.
    pub fn navigate(&mut self, query_string: &str) -> Option<RequestTicket> {
        let query = query_codec::decode(query_string);
        let unchanged = query == self.query;
        if unchanged && matches!(self.state, LoadState::Loading | LoadState::Loaded) {
            return None;
        }

        self.latest_seq += 1;
        self.state = LoadState::Loading;
        self.query = query;
        let request = SearchRequestBuilder::new(&self.query).build();
        tracing::debug!("search #{} issued: {}", self.latest_seq, request.query_string);
        Some(RequestTicket { seq: self.latest_seq, query: self.query.clone(), request })
    }

    /// Applies the outcome of `ticket`'s fetch. Returns `false` when a newer
    /// navigation has superseded it and the outcome was dropped.
    pub fn resolve<E: Display>(&mut self, ticket: &RequestTicket, outcome: Result<SearchResponse, E>) -> bool {
        if ticket.seq != self.latest_seq {
            tracing::debug!("search #{} discarded, #{} is current", ticket.seq, self.latest_seq);
            return false;
        }
        match outcome {
            Ok(response) => {
                self.data = response.into();
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                tracing::warn!("search #{} failed: {}", ticket.seq, e);
                self.data = PageData::empty();
                self.state = LoadState::Failed;
            }
        }
        true
    }
}
