//! Shared constants for query encoding and request building.

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Bumped whenever the URL vocabulary below changes.
/// v1 used a single joined `publication_year__range=A__B` field.
pub const QUERY_CODEC_VERSION: u32 = 2;

pub const FIELD_PAGE: &str = "page";
pub const FIELD_PAGE_SIZE: &str = "page_size";
pub const FIELD_SEARCH: &str = "search";
pub const FIELD_COUNTRY: &str = "country";
pub const FIELD_JOURNAL: &str = "journal";
pub const FIELD_YEAR_FROM: &str = "publication_year__gte";
pub const FIELD_YEAR_TO: &str = "publication_year__lte";
pub const FIELD_ORDERING: &str = "ordering";

/// Every key the codec reads or writes, in canonical emission order.
pub const QUERY_FIELDS: [&str; 8] = [
    FIELD_PAGE,
    FIELD_PAGE_SIZE,
    FIELD_SEARCH,
    FIELD_COUNTRY,
    FIELD_JOURNAL,
    FIELD_YEAR_FROM,
    FIELD_YEAR_TO,
    FIELD_ORDERING,
];

pub const ORDERING_MOST_RECENT: &str = "-publication_date";
pub const ORDERING_LEAST_RECENT: &str = "publication_date";

pub const SEARCH_API_PATH: &str = "/api/search/article";
pub const EXPORT_ALL_FIELD: &str = "all";
pub const EXPORT_FORMAT_FIELD: &str = "format";
pub const EXPORT_FORMAT_CSV: &str = "csv";

/// Checkbox facets show this many buckets until "show more" is clicked.
pub const FACET_COLLAPSED_LIMIT: usize = 13;

/// Result cards list at most this many authors before "et al".
pub const RESULT_CARD_AUTHOR_LIMIT: usize = 5;
