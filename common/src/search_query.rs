//! Shared search query models and helpers.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::search_const::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, FIELD_COUNTRY, FIELD_JOURNAL, ORDERING_LEAST_RECENT,
    ORDERING_MOST_RECENT,
};

/// The canonical search state. Always derivable from a URL query string
/// through [`crate::query_codec::decode`] and back through
/// [`crate::query_codec::encode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub country: Vec<String>,
    pub journal: Vec<String>,
    pub year_range: Option<YearRange>,
    pub ordering: Ordering,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            country: Vec::new(),
            journal: Vec::new(),
            year_range: None,
            ordering: Ordering::default(),
        }
    }
}

/// Inclusive year bounds. `start <= end` holds for every value built
/// through [`YearRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Builds a range from two bounds given in either order.
    pub fn new(a: i32, b: i32) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Builds a range only if the bounds are already ordered.
    pub fn ordered(start: i32, end: i32) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn single(year: i32) -> Self {
        Self { start: year, end: year }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }

    pub fn is_single_year(&self) -> bool {
        self.start == self.end
    }
}

impl From<(i32, i32)> for YearRange {
    fn from((a, b): (i32, i32)) -> Self {
        YearRange::new(a, b)
    }
}

impl From<YearRange> for (i32, i32) {
    fn from(range: YearRange) -> Self {
        (range.start, range.end)
    }
}

impl Display for YearRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_single_year() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}–{}", self.start, self.end)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Ordering {
    #[default]
    MostRecent,
    LeastRecent,
}

impl Ordering {
    pub const ALL: [Ordering; 2] = [Ordering::MostRecent, Ordering::LeastRecent];

    pub fn as_query_value(&self) -> &'static str {
        match self {
            Ordering::MostRecent => ORDERING_MOST_RECENT,
            Ordering::LeastRecent => ORDERING_LEAST_RECENT,
        }
    }

    pub fn from_query_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_query_value() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ordering::MostRecent => "Most recent",
            Ordering::LeastRecent => "Least recent",
        }
    }
}

/// The multi-valued facet dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetField {
    Country,
    Journal,
}

impl FacetField {
    pub const ALL: [FacetField; 2] = [FacetField::Country, FacetField::Journal];

    pub fn query_key(&self) -> &'static str {
        match self {
            FacetField::Country => FIELD_COUNTRY,
            FacetField::Journal => FIELD_JOURNAL,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FacetField::Country => "Country / Region / Territory",
            FacetField::Journal => "Journal",
        }
    }
}

/// Everything a control is allowed to ask of the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMutation {
    SetSearch(String),
    ToggleFacet { field: FacetField, value: String },
    SetYearRange(Option<YearRange>),
    SetPage(u32),
    SetOrdering(Ordering),
}

impl SearchQuery {
    pub fn from_search(search: impl Into<String>) -> Self {
        Self::default().apply(QueryMutation::SetSearch(search.into()))
    }

    /// An unfiltered query narrowed to one facet value.
    pub fn from_facet(field: FacetField, value: impl Into<String>) -> Self {
        Self::default().apply(QueryMutation::ToggleFacet { field, value: value.into() })
    }

    pub fn facet(&self, field: FacetField) -> &[String] {
        match field {
            FacetField::Country => &self.country,
            FacetField::Journal => &self.journal,
        }
    }

    fn facet_mut(&mut self, field: FacetField) -> &mut Vec<String> {
        match field {
            FacetField::Country => &mut self.country,
            FacetField::Journal => &mut self.journal,
        }
    }

    pub fn is_facet_selected(&self, field: FacetField, value: &str) -> bool {
        self.facet(field).iter().any(|v| v == value)
    }

    pub fn has_filters(&self) -> bool {
        !self.search.is_empty()
            || !self.country.is_empty()
            || !self.journal.is_empty()
            || self.year_range.is_some()
    }

    /// Returns the query that results from `mutation`. Every mutation other
    /// than `SetPage` lands on the first page.
    pub fn apply(&self, mutation: QueryMutation) -> SearchQuery {
        let mut next = self.clone();
        match mutation {
            QueryMutation::SetSearch(search) => {
                next.search = search.trim().to_string();
                next.page = DEFAULT_PAGE;
            }
            // an empty value cannot be carried by the URL
            QueryMutation::ToggleFacet { value, .. } if value.is_empty() => {}
            QueryMutation::ToggleFacet { field, value } => {
                let values = next.facet_mut(field);
                if let Some(pos) = values.iter().position(|v| *v == value) {
                    values.remove(pos);
                } else {
                    values.push(value);
                }
                next.page = DEFAULT_PAGE;
            }
            QueryMutation::SetYearRange(range) => {
                next.year_range = range;
                next.page = DEFAULT_PAGE;
            }
            QueryMutation::SetPage(page) => {
                next.page = page.max(DEFAULT_PAGE);
            }
            QueryMutation::SetOrdering(ordering) => {
                next.ordering = ordering;
                next.page = DEFAULT_PAGE;
            }
        }
        next
    }

    /// Number of result pages for `count` hits at this page size.
    pub fn page_count(&self, count: u64) -> u64 {
        let page_size = u64::from(self.page_size.max(1));
        count.div_ceil(page_size)
    }
}
