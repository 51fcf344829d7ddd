use dioxus::prelude::*;

use common::query_codec;
use common::search_query::SearchQuery;

use crate::components::navbar::Navbar;
use crate::data_definitions::search_url_query::SearchUrlQuery;
use crate::pages::home_page::HomePage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    // the whole query string is the search state
    #[route("/search?:..query")]
    SearchPage { query: SearchUrlQuery },

}

impl Route {
    pub fn search_page_from_query(q: &SearchQuery) -> Self {
        Self::SearchPage { query: SearchUrlQuery::from(q.clone()) }
    }

    pub fn search_page_from_query_string(query_string: &str) -> Self {
        Self::search_page_from_query(&query_codec::decode(query_string))
    }
}
