use common::query_codec;
use common::result_page::{LoadState, PageData, ResultPageController};
use common::search_const::SEARCH_API_PATH;
use common::search_request::{SearchRequest, SearchRequestBuilder};
use common::search_result::SearchResponse;
use tracing::error;

use crate::api::search::SearchApiClient;
use crate::config::SearchApiConfig;

/// One page of results for a canonical (or legacy) query string.
pub async fn search_articles(query_string: &str) -> anyhow::Result<SearchResponse> {
    let query = query_codec::decode(query_string);
    let request = SearchRequestBuilder::new(&query).build();
    SearchApiClient::from_env()?.fetch(&request).await
}

/// Like [`SearchApiClient::fetch`], but any failure renders as an empty page.
pub async fn fetch_page_data(client: &SearchApiClient, request: &SearchRequest) -> PageData {
    match client.fetch(request).await {
        Ok(response) => response.into(),
        Err(e) => {
            error!("search failed, showing an empty page: {:#}", e);
            PageData::empty()
        }
    }
}

/// Feeds a location change through `controller` and performs the fetch it
/// asks for, if any.
pub async fn load_result_page(
    controller: &mut ResultPageController,
    client: &SearchApiClient,
    query_string: &str,
) -> LoadState {
    if let Some(ticket) = controller.navigate(query_string) {
        let outcome = client.fetch(ticket.request()).await;
        controller.resolve(&ticket, outcome.map_err(|e| format!("{e:#}")));
    }
    controller.state()
}

/// Where the browser downloads every matching record as CSV.
pub fn export_download_url(config: &SearchApiConfig, query_string: &str) -> String {
    let query = query_codec::decode(query_string);
    SearchRequestBuilder::new(&query).build_export().url(&config.base_url, SEARCH_API_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn export_url_uses_configured_host() {
        let config = SearchApiConfig::with_base_url("https://search.example.org/");
        assert_eq!(
            export_download_url(&config, "page=3&country=Japan&ordering=publication_date"),
            "https://search.example.org/api/search/article?country=Japan&ordering=publication_date&all=true&format=csv"
        );
    }
}
