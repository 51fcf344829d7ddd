//! Outbound requests to the search endpoint.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::query_codec::{PaginationMode, append_query_pairs};
use crate::search_const::{EXPORT_ALL_FIELD, EXPORT_FORMAT_CSV, EXPORT_FORMAT_FIELD};
use crate::search_query::SearchQuery;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestMode {
    /// One JSON page of results with facets.
    Page,
    /// Every matching record as a CSV download.
    Export,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub mode: RequestMode,
    pub query_string: String,
}

impl SearchRequest {
    /// `{base_url}{path}?{query_string}`, with no dangling `?`.
    pub fn url(&self, base_url: &str, path: &str) -> String {
        let base_url = base_url.trim_end_matches('/');
        if self.query_string.is_empty() {
            format!("{base_url}{path}")
        } else {
            format!("{base_url}{path}?{}", self.query_string)
        }
    }
}

/// Builds API requests from a decoded query. The URL codec drops default
/// pagination; the API wants it spelled out.
pub struct SearchRequestBuilder<'a> {
    query: &'a SearchQuery,
}

impl<'a> SearchRequestBuilder<'a> {
    pub fn new(query: &'a SearchQuery) -> Self {
        Self { query }
    }

    pub fn build(&self) -> SearchRequest {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        append_query_pairs(&mut serializer, self.query, PaginationMode::Explicit);
        SearchRequest { mode: RequestMode::Page, query_string: serializer.finish() }
    }

    /// Same filters, no pagination, CSV format.
    pub fn build_export(&self) -> SearchRequest {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        append_query_pairs(&mut serializer, self.query, PaginationMode::Omit);
        serializer.append_pair(EXPORT_ALL_FIELD, "true");
        serializer.append_pair(EXPORT_FORMAT_FIELD, EXPORT_FORMAT_CSV);
        SearchRequest { mode: RequestMode::Export, query_string: serializer.finish() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query_codec;
    use crate::search_const::SEARCH_API_PATH;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_request_spells_out_default_pagination() {
        let request = SearchRequestBuilder::new(&SearchQuery::default()).build();
        assert_eq!(request.mode, RequestMode::Page);
        assert_eq!(request.query_string, "page=1&page_size=20");
    }

    #[test]
    fn page_request_carries_filters_in_codec_order() {
        let q = query_codec::decode("ordering=publication_date&country=Japan&search=top+quark&page=3");
        let request = SearchRequestBuilder::new(&q).build();
        assert_eq!(
            request.query_string,
            "page=3&page_size=20&search=top+quark&country=Japan&ordering=publication_date"
        );
    }

    #[test]
    fn export_drops_pagination_and_asks_for_csv() {
        let q = query_codec::decode("page=5&journal=JHEP&publication_year__gte=2020&publication_year__lte=2020");
        let request = SearchRequestBuilder::new(&q).build_export();
        assert_eq!(request.mode, RequestMode::Export);
        assert_eq!(
            request.query_string,
            "journal=JHEP&publication_year__gte=2020&publication_year__lte=2020&all=true&format=csv"
        );
        assert!(!request.query_string.contains("page"));
    }

    #[test]
    fn url_joins_base_path_and_query() {
        let request = SearchRequestBuilder::new(&SearchQuery::default()).build();
        assert_eq!(
            request.url("https://backend.example.org/", SEARCH_API_PATH),
            "https://backend.example.org/api/search/article?page=1&page_size=20"
        );
        let empty = SearchRequest { mode: RequestMode::Page, query_string: String::new() };
        assert_eq!(empty.url("http://x", "/p"), "http://x/p");
    }
}
