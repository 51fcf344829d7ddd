//! Checkbox facet state for one multi-valued dimension.

use crate::navigation::NavigationBridge;
use crate::search_const::FACET_COLLAPSED_LIMIT;
use crate::search_query::{FacetField, QueryMutation, SearchQuery};

/// Selection of one facet dimension, derived from the current query.
///
/// The only way to change it is [`MultiValueFacetState::toggle`], which
/// mirrors a checkbox click: it writes the whole updated set back through
/// navigation in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiValueFacetState {
    field: FacetField,
    query: SearchQuery,
}

impl MultiValueFacetState {
    pub fn new(field: FacetField, query: &SearchQuery) -> Self {
        Self { field, query: query.clone() }
    }

    pub fn field(&self) -> FacetField {
        self.field
    }

    pub fn selected(&self) -> &[String] {
        self.query.facet(self.field)
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.query.is_facet_selected(self.field, value)
    }

    /// Drops local state in favour of a freshly decoded query.
    pub fn resync(&mut self, query: &SearchQuery) {
        self.query = query.clone();
    }

    /// Removes `value` if selected, appends it otherwise, and navigates once.
    pub fn toggle(&mut self, value: &str, nav: &mut impl NavigationBridge) {
        let next = self.query.apply(QueryMutation::ToggleFacet {
            field: self.field,
            value: value.to_string(),
        });
        nav.push_query(&next);
        self.query = next;
    }
}

/// Show-more windowing over a bucket list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetWindow {
    pub expanded: bool,
    pub collapsed_limit: usize,
}

impl Default for FacetWindow {
    fn default() -> Self {
        Self { expanded: false, collapsed_limit: FACET_COLLAPSED_LIMIT }
    }
}

impl FacetWindow {
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.expanded {
            items
        } else {
            &items[..items.len().min(self.collapsed_limit)]
        }
    }

    pub fn has_more(&self, total: usize) -> bool {
        total > self.collapsed_limit
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.expanded { "Show Less" } else { "Show More" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::InMemoryNavigation;
    use crate::query_codec;
    use pretty_assertions::assert_eq;

    #[test]
    fn toggle_adds_then_removes_with_one_navigation_each() {
        let mut nav = InMemoryNavigation::new("page=4&journal=JHEP&country=Japan");
        let mut state = MultiValueFacetState::new(FacetField::Country, &nav.current_query());

        state.toggle("Chile", &mut nav);
        assert_eq!(nav.push_count(), 1);
        assert_eq!(nav.current_query_string(), "country=Japan&country=Chile&journal=JHEP");
        assert!(state.is_selected("Chile"));

        state.resync(&nav.current_query());
        state.toggle("Japan", &mut nav);
        assert_eq!(nav.push_count(), 2);
        let q = nav.current_query();
        assert_eq!(q.country, vec!["Chile".to_string()]);
        assert_eq!(q.journal, vec!["JHEP".to_string()]);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn toggling_twice_restores_membership() {
        let start = query_codec::decode("country=Japan&country=Chile&page_size=50");
        let mut nav = InMemoryNavigation::new(query_codec::encode(&start));
        let mut state = MultiValueFacetState::new(FacetField::Country, &start);
        for value in ["Japan", "Peru"] {
            state.toggle(value, &mut nav);
            state.toggle(value, &mut nav);
            let mut expected = state.selected().to_vec();
            expected.sort();
            let mut original = start.country.clone();
            original.sort();
            assert_eq!(expected, original);
        }
        assert_eq!(nav.current_query().page_size, 50);
    }

    #[test]
    fn window_truncates_until_expanded() {
        let items = (0..20).collect::<Vec<_>>();
        let mut window = FacetWindow::default();
        assert_eq!(window.visible(&items).len(), 13);
        assert!(window.has_more(items.len()));
        assert_eq!(window.toggle_label(), "Show More");
        window.toggle();
        assert_eq!(window.visible(&items).len(), 20);
        assert_eq!(window.toggle_label(), "Show Less");
        assert!(!window.has_more(5));
    }
}
