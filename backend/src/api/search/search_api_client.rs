use anyhow::Context;
use common::search_const::SEARCH_API_PATH;
use common::search_request::{RequestMode, SearchRequest};
use common::search_result::SearchResponse;
use reqwest::header::ACCEPT;
use tracing::{debug, info};

use crate::config::SearchApiConfig;

#[derive(Debug, Clone)]
pub struct SearchApiClient {
    config: SearchApiConfig,
    http: reqwest::Client,
}

impl SearchApiClient {
    pub fn new(config: SearchApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("building search API client")?;
        Ok(Self { config, http })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(SearchApiConfig::from_env())
    }

    pub fn url_for(&self, request: &SearchRequest) -> String {
        request.url(&self.config.base_url, SEARCH_API_PATH)
    }

    /// Performs one page request. Non-success status, transport errors and
    /// bodies that are not the expected JSON all come back as `Err`.
    pub async fn fetch(&self, request: &SearchRequest) -> anyhow::Result<SearchResponse> {
        if request.mode == RequestMode::Export {
            anyhow::bail!("export requests are downloaded by the browser, not fetched");
        }
        let url = self.url_for(request);
        debug!("SEARCH REQUEST: {}", url);
        let t0 = std::time::Instant::now();

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?;
        let status = response.status();
        let response_txt = response.text().await.context("reading search response body")?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }

        let dt_ms = t0.elapsed().as_millis();
        info!("SEARCH RESPONSE: len = {} ({}ms)", response_txt.len(), dt_ms);
        SearchResponse::from_json(&response_txt).context("search response is not the expected JSON")
    }
}
