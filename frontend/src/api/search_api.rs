//! Client API calls for search endpoints.

use common::search_result::SearchResponse;
use dioxus::prelude::*;




#[server]
pub async fn search_articles(query_string: String) -> Result<SearchResponse, ServerFnError> {
    let x = backend::api::search::search_articles(&query_string).await;
    x.map_err(|e| ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None })
}

#[server]
pub async fn search_export_url(query_string: String) -> Result<String, ServerFnError> {
    let config = backend::config::SearchApiConfig::from_env();
    Ok(backend::api::search::export_download_url(&config, &query_string))
}
