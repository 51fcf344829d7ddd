pub mod router_navigation;
pub mod search_page_state;
pub mod search_url_query;
