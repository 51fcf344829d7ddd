//! Encoding between [`SearchQuery`] and its canonical URL query string.
//!
//! The vocabulary is fixed by [`QUERY_FIELDS`]; anything else found in a
//! query string is ignored. Decoding never fails: malformed values fall back
//! to their defaults. Encoding omits defaults and always emits fields in
//! whitelist order, so two equal queries produce byte-identical strings.

use url::form_urlencoded;

use crate::search_const::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, FIELD_COUNTRY, FIELD_JOURNAL, FIELD_ORDERING, FIELD_PAGE,
    FIELD_PAGE_SIZE, FIELD_SEARCH, FIELD_YEAR_FROM, FIELD_YEAR_TO, QUERY_FIELDS,
};
use crate::search_query::{FacetField, Ordering, SearchQuery, YearRange};

/// Parses a query string (with or without a leading `?`).
pub fn decode(query_string: &str) -> SearchQuery {
    let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
    let mut fields = RawFields::default();
    for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
        if !QUERY_FIELDS.contains(&key.as_ref()) {
            continue;
        }
        fields.push(&key, value.into_owned());
    }
    fields.into_query()
}

/// Produces the canonical query string, without a leading `?`.
pub fn encode(query: &SearchQuery) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    append_query_pairs(&mut serializer, query, PaginationMode::OmitDefaults);
    serializer.finish()
}

/// How pagination fields are written by [`append_query_pairs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PaginationMode {
    /// URL form: page and page size only when they differ from the defaults.
    OmitDefaults,
    /// API form: page and page size always present.
    Explicit,
    /// Export form: no pagination at all.
    Omit,
}

/// Writes the whitelisted fields of `query` in canonical order. Shared by the
/// URL codec and the outbound request builder so both speak one vocabulary.
pub(crate) fn append_query_pairs(
    serializer: &mut form_urlencoded::Serializer<'_, String>,
    query: &SearchQuery,
    pagination: PaginationMode,
) {
    let page = query.page.to_string();
    let page_size = query.page_size.to_string();
    match pagination {
        PaginationMode::OmitDefaults => {
            if query.page != DEFAULT_PAGE {
                serializer.append_pair(FIELD_PAGE, &page);
            }
            if query.page_size != DEFAULT_PAGE_SIZE {
                serializer.append_pair(FIELD_PAGE_SIZE, &page_size);
            }
        }
        PaginationMode::Explicit => {
            serializer.append_pair(FIELD_PAGE, &page);
            serializer.append_pair(FIELD_PAGE_SIZE, &page_size);
        }
        PaginationMode::Omit => {}
    }

    if !query.search.is_empty() {
        serializer.append_pair(FIELD_SEARCH, &query.search);
    }
    for field in FacetField::ALL {
        for value in query.facet(field).iter().filter(|v| !v.is_empty()) {
            serializer.append_pair(field.query_key(), value);
        }
    }
    if let Some(range) = query.year_range {
        serializer.append_pair(FIELD_YEAR_FROM, &range.start().to_string());
        serializer.append_pair(FIELD_YEAR_TO, &range.end().to_string());
    }
    if query.ordering != Ordering::default() {
        serializer.append_pair(FIELD_ORDERING, query.ordering.as_query_value());
    }
}

/// First-seen raw values for the scalar fields, accumulated sets for the
/// repeatable ones.
#[derive(Default)]
struct RawFields {
    page: Option<String>,
    page_size: Option<String>,
    search: Option<String>,
    country: Vec<String>,
    journal: Vec<String>,
    year_from: Option<String>,
    year_to: Option<String>,
    ordering: Option<String>,
}

impl RawFields {
    fn push(&mut self, key: &str, value: String) {
        let slot = match key {
            FIELD_PAGE => &mut self.page,
            FIELD_PAGE_SIZE => &mut self.page_size,
            FIELD_SEARCH => &mut self.search,
            FIELD_YEAR_FROM => &mut self.year_from,
            FIELD_YEAR_TO => &mut self.year_to,
            FIELD_ORDERING => &mut self.ordering,
            FIELD_COUNTRY => return push_unique(&mut self.country, value),
            FIELD_JOURNAL => return push_unique(&mut self.journal, value),
            _ => return,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    fn into_query(self) -> SearchQuery {
        let year_from = self.year_from.as_deref().and_then(parse_year);
        let year_to = self.year_to.as_deref().and_then(parse_year);
        let year_range = match (year_from, year_to) {
            (Some(from), Some(to)) => YearRange::ordered(from, to),
            _ => None,
        };

        SearchQuery {
            page: parse_positive(self.page.as_deref(), DEFAULT_PAGE),
            page_size: parse_positive(self.page_size.as_deref(), DEFAULT_PAGE_SIZE),
            search: self.search.unwrap_or_default(),
            country: self.country,
            journal: self.journal,
            year_range,
            ordering: self
                .ordering
                .as_deref()
                .and_then(Ordering::from_query_value)
                .unwrap_or_default(),
        }
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if value.is_empty() || values.contains(&value) {
        return;
    }
    values.push(value);
}

fn parse_positive(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn parse_year(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn decodes_repeated_facets_and_ordering() {
        let q = decode("page=2&country=Switzerland&country=Japan&ordering=publication_date");
        assert_eq!(
            q,
            SearchQuery {
                page: 2,
                page_size: 20,
                country: vec!["Switzerland".to_string(), "Japan".to_string()],
                ordering: Ordering::LeastRecent,
                ..SearchQuery::default()
            }
        );
        assert_eq!(q.year_range, None);
    }

    #[test]
    fn lone_facet_value_becomes_one_element_set() {
        let q = decode("journal=Nuclear+Physics+B");
        assert_eq!(q.journal, vec!["Nuclear Physics B".to_string()]);
    }

    #[test]
    fn default_query_encodes_to_empty_string() {
        assert_eq!(encode(&SearchQuery::default()), "");
    }

    #[test]
    fn invalid_numbers_fall_back_to_defaults() {
        for s in ["page=0&page_size=abc", "page=-4&page_size=0", "page=2.5&page_size=", "?page=NaN"] {
            let q = decode(s);
            assert_eq!(q.page, 1, "{s}");
            assert_eq!(q.page_size, 20, "{s}");
            assert_eq!(encode(&q), "", "{s}");
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let q = decode("utm_source=newsletter&search=dark+matter&fbclid=xyz&publication_year__range=2020__2022");
        assert_eq!(q, SearchQuery::from_search("dark matter"));
    }

    #[test]
    fn leading_question_mark_is_tolerated() {
        assert_eq!(decode("?page=3"), decode("page=3"));
    }

    #[test]
    fn duplicate_and_empty_facet_values_are_dropped() {
        let q = decode("country=Japan&country=&country=Japan&country=Chile");
        assert_eq!(q.country, vec!["Japan".to_string(), "Chile".to_string()]);
    }

    #[test]
    fn empty_facet_values_are_not_encoded() {
        let q = SearchQuery { country: vec![String::new(), "Japan".to_string()], ..SearchQuery::default() };
        assert_eq!(encode(&q), "country=Japan");
        let bare = SearchQuery { journal: vec![String::new()], ..SearchQuery::default() };
        assert_eq!(encode(&bare), "");
        assert_eq!(decode(&encode(&bare)), SearchQuery::default());
    }

    #[test]
    fn single_facet_links() {
        assert_eq!(encode(&SearchQuery::from_facet(FacetField::Journal, "JHEP")), "journal=JHEP");
        assert_eq!(
            encode(&SearchQuery::from_facet(FacetField::Country, "South Korea")),
            "country=South+Korea"
        );
        assert_eq!(encode(&SearchQuery::from_facet(FacetField::Country, "")), "");
    }

    #[test]
    fn first_scalar_occurrence_wins() {
        let q = decode("search=first&search=second&page=4&page=9");
        assert_eq!(q.search, "first");
        assert_eq!(q.page, 4);
    }

    #[test]
    fn year_range_needs_both_ordered_bounds() {
        assert_eq!(decode("publication_year__gte=2020").year_range, None);
        assert_eq!(decode("publication_year__lte=2020").year_range, None);
        assert_eq!(decode("publication_year__gte=2022&publication_year__lte=2020").year_range, None);
        assert_eq!(
            decode("publication_year__gte=2020&publication_year__lte=2022").year_range,
            Some(YearRange::new(2020, 2022))
        );
    }

    #[test]
    fn single_year_still_emits_both_bounds() {
        let q = SearchQuery { year_range: Some(YearRange::single(2021)), ..SearchQuery::default() };
        assert_eq!(encode(&q), "publication_year__gte=2021&publication_year__lte=2021");
    }

    #[test]
    fn unknown_ordering_decodes_to_default() {
        assert_eq!(decode("ordering=title").ordering, Ordering::MostRecent);
        assert_eq!(encode(&decode("ordering=-publication_date")), "");
    }

    #[test]
    fn facet_values_are_percent_encoded_independently() {
        let q = SearchQuery {
            journal: vec!["Physics Letters B".to_string(), "A&B=C".to_string()],
            ..SearchQuery::default()
        };
        let encoded = encode(&q);
        assert_eq!(encoded, "journal=Physics+Letters+B&journal=A%26B%3DC");
        assert_eq!(decode(&encoded), q);
    }

    #[test]
    fn encoding_follows_whitelist_order() {
        let encoded = "page=3&page_size=50&search=neutrino&country=Japan&journal=JHEP\
            &publication_year__gte=2019&publication_year__lte=2021&ordering=publication_date";
        assert_eq!(encode(&decode(encoded)), encoded);
        let shuffled = "ordering=publication_date&journal=JHEP&publication_year__lte=2021\
            &country=Japan&search=neutrino&publication_year__gte=2019&page_size=50&page=3";
        assert_eq!(encode(&decode(shuffled)), encoded);
    }

    fn facet_set() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[A-Za-z &,.()=%+-]{1,24}", 0..4).prop_map(|values| {
            let mut set = Vec::new();
            for v in values {
                if !set.contains(&v) {
                    set.push(v);
                }
            }
            set
        })
    }

    fn valid_query() -> impl Strategy<Value = SearchQuery> {
        (
            1u32..500,
            1u32..200,
            "[a-zA-Z0-9 äöü&?#=+%]{0,20}",
            facet_set(),
            facet_set(),
            proptest::option::of((1900i32..2100, 0i32..30)),
            prop_oneof![Just(Ordering::MostRecent), Just(Ordering::LeastRecent)],
        )
            .prop_map(|(page, page_size, search, country, journal, range, ordering)| SearchQuery {
                page,
                page_size,
                search,
                country,
                journal,
                year_range: range.map(|(start, span)| YearRange::new(start, start + span)),
                ordering,
            })
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(q in valid_query()) {
            prop_assert_eq!(decode(&encode(&q)), q);
        }

        #[test]
        fn encode_of_decoded_canonical_string_is_stable(q in valid_query()) {
            let s = encode(&q);
            prop_assert_eq!(encode(&decode(&s)), s);
        }

        #[test]
        fn decode_never_yields_non_positive_pagination(s in ".{0,60}") {
            let q = decode(&s);
            prop_assert!(q.page >= 1);
            prop_assert!(q.page_size >= 1);
            if let Some(r) = q.year_range {
                prop_assert!(r.start() <= r.end());
            }
        }
    }
}
