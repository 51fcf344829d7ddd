//! The `/search` route's query segment.

use std::fmt::Display;

use common::query_codec;
use common::search_query::SearchQuery;

/// A decoded search query that the router reads from and writes to the
/// location's query string. Parsing never fails: unknown or malformed
/// fields fall back to their defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchUrlQuery(pub SearchQuery);

impl From<SearchQuery> for SearchUrlQuery {
    fn from(value: SearchQuery) -> Self {
        SearchUrlQuery(value)
    }
}

impl From<&str> for SearchUrlQuery {
    fn from(query_string: &str) -> Self {
        SearchUrlQuery(query_codec::decode(query_string))
    }
}

// Canonical form, so equal queries always produce the same URL.
impl Display for SearchUrlQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", query_codec::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_round_trips_through_canonical_form() {
        let parsed = SearchUrlQuery::from("page_size=20&journal=JHEP&search=dark+matter&utm=1");
        assert_eq!(parsed.0.journal, vec!["JHEP".to_string()]);
        assert_eq!(parsed.to_string(), "search=dark+matter&journal=JHEP");
        assert_eq!(SearchUrlQuery::from(parsed.to_string().as_str()), parsed);
    }

    #[test]
    fn empty_location_is_the_default_query() {
        assert_eq!(SearchUrlQuery::from(""), SearchUrlQuery::default());
        assert_eq!(SearchUrlQuery::default().to_string(), "");
    }
}
