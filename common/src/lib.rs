//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_const;
pub mod search_query;
pub mod query_codec;
pub mod navigation;
pub mod search_request;
pub mod search_result;
pub mod facet_labels;
pub mod range_facet;
pub mod multi_value_facet;
pub mod formatted_text;
pub mod result_page;
