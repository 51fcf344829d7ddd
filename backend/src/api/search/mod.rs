//! Search API client and the calls the frontend proxies to.

mod search_api_client;
pub use search_api_client::SearchApiClient;

mod search_articles;
pub use search_articles::{export_download_url, fetch_page_data, load_result_page, search_articles};
