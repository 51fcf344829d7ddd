//! Year range facet: a contiguous selection over date-histogram buckets.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::navigation::NavigationBridge;
use crate::search_query::{QueryMutation, SearchQuery, YearRange};
use crate::search_result::FacetBucket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBucket {
    pub year: i32,
    pub doc_count: u64,
}

/// Inclusive pair of bucket indices, `start_index <= end_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSelection {
    pub start_index: usize,
    pub end_index: usize,
}

impl RangeSelection {
    fn new(a: usize, b: usize) -> Self {
        Self { start_index: a.min(b), end_index: a.max(b) }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index <= self.end_index
    }
}

/// One bar of the histogram as the view draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBar {
    pub index: usize,
    pub year: i32,
    pub doc_count: u64,
    pub highlighted: bool,
    pub hovered: bool,
}

/// Range control state over a fixed bucket list.
///
/// The committed selection lives in the query (`year_range`); `selection`
/// only runs ahead of it while a drag is in progress and is rebuilt from the
/// query on [`RangeFacetState::resync`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeFacetState {
    buckets: Vec<YearBucket>,
    query: SearchQuery,
    selection: Option<RangeSelection>,
    hovered: Option<usize>,
}

impl RangeFacetState {
    pub fn new(buckets: &[FacetBucket], query: &SearchQuery) -> Self {
        let mut years = Vec::<YearBucket>::with_capacity(buckets.len());
        for bucket in buckets {
            let Some(year) = bucket_year(&bucket.key) else {
                tracing::debug!("ignoring year bucket with unreadable key {:?}", bucket.key);
                continue;
            };
            years.push(YearBucket { year, doc_count: bucket.doc_count });
        }
        years.sort_by_key(|b| b.year);
        years.dedup_by(|later, earlier| {
            if later.year == earlier.year {
                earlier.doc_count += later.doc_count;
                true
            } else {
                false
            }
        });

        let mut state = Self { buckets: years, query: query.clone(), selection: None, hovered: None };
        state.selection = state.selection_for_query();
        state
    }

    pub fn buckets(&self) -> &[YearBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// A single bucket leaves nothing to choose between.
    pub fn is_disabled(&self) -> bool {
        self.buckets.len() < 2
    }

    /// Whether the query carries a year filter; drives the "reset" button.
    pub fn is_filtered(&self) -> bool {
        self.query.year_range.is_some()
    }

    pub fn full_span(&self) -> Option<YearRange> {
        let first = self.buckets.first()?;
        let last = self.buckets.last()?;
        Some(YearRange::new(first.year, last.year))
    }

    pub fn selection(&self) -> Option<RangeSelection> {
        self.selection
    }

    /// Years covered by the highlighted selection.
    pub fn selected_years(&self) -> Option<YearRange> {
        self.selection.map(|s| self.range_for(s))
    }

    pub fn hovered(&self) -> Option<YearBucket> {
        self.hovered.and_then(|i| self.buckets.get(i).copied())
    }

    /// Pointer tracking for the tooltip. Never navigates.
    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|i| *i < self.buckets.len());
    }

    pub fn bars(&self) -> Vec<YearBar> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(index, b)| YearBar {
                index,
                year: b.year,
                doc_count: b.doc_count,
                highlighted: self.selection.is_some_and(|s| s.contains(index)),
                hovered: self.hovered == Some(index),
            })
            .collect()
    }

    /// Moves the transient selection while a handle is being dragged.
    pub fn drag_to(&mut self, i: usize, j: usize) {
        if let Some(selection) = self.clamped(i, j) {
            self.selection = Some(selection);
        }
    }

    /// Commits whatever [`Self::drag_to`] left selected.
    pub fn commit_drag(&mut self, nav: &mut impl NavigationBridge) {
        if let Some(selection) = self.selection {
            self.commit(selection, nav);
        }
    }

    /// Selects buckets `i..=j`; bounds may come in either order.
    pub fn set_range_by_indices(&mut self, i: usize, j: usize, nav: &mut impl NavigationBridge) {
        if let Some(selection) = self.clamped(i, j) {
            self.commit(selection, nav);
        }
    }

    /// Click on one bar.
    pub fn set_range_by_single_bucket(&mut self, k: usize, nav: &mut impl NavigationBridge) {
        self.set_range_by_indices(k, k, nav);
    }

    /// Removes the year filter altogether.
    pub fn reset(&mut self, nav: &mut impl NavigationBridge) {
        if self.buckets.is_empty() {
            return;
        }
        let next = self.query.apply(QueryMutation::SetYearRange(None));
        nav.push_query(&next);
        self.resync(&next);
    }

    pub fn resync(&mut self, query: &SearchQuery) {
        self.query = query.clone();
        self.selection = self.selection_for_query();
    }

    fn commit(&mut self, selection: RangeSelection, nav: &mut impl NavigationBridge) {
        let range = self.range_for(selection);
        let next = self.query.apply(QueryMutation::SetYearRange(Some(range)));
        nav.push_query(&next);
        self.query = next;
        self.selection = Some(selection);
    }

    fn clamped(&self, i: usize, j: usize) -> Option<RangeSelection> {
        let last = self.buckets.len().checked_sub(1)?;
        Some(RangeSelection::new(i.min(last), j.min(last)))
    }

    fn range_for(&self, selection: RangeSelection) -> YearRange {
        YearRange::new(
            self.buckets[selection.start_index].year,
            self.buckets[selection.end_index].year,
        )
    }

    fn full_selection(&self) -> Option<RangeSelection> {
        self.clamped(0, usize::MAX)
    }

    fn selection_for_query(&self) -> Option<RangeSelection> {
        let Some(range) = self.query.year_range else {
            return self.full_selection();
        };
        let start = self.buckets.iter().position(|b| b.year >= range.start());
        let end = self.buckets.iter().rposition(|b| b.year <= range.end());
        match (start, end) {
            (Some(start), Some(end)) if start <= end => Some(RangeSelection::new(start, end)),
            _ => self.full_selection(),
        }
    }
}

/// Year of a histogram bucket key: a bare year, epoch milliseconds, an
/// RFC 3339 timestamp or a plain date.
pub fn bucket_year(key: &str) -> Option<i32> {
    let key = key.trim();
    if let Ok(n) = key.parse::<i64>() {
        if (-9999..=9999).contains(&n) {
            return i32::try_from(n).ok();
        }
        return DateTime::from_timestamp_millis(n).map(|dt| dt.year());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(key) {
        return Some(dt.year());
    }
    if let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        return Some(date.year());
    }
    NaiveDateTime::parse_from_str(key, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.year())
}
