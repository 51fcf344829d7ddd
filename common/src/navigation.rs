//! The seam between query state and whatever owns the URL.

use crate::query_codec;
use crate::search_query::SearchQuery;

/// Read the current location's query string, push a new one.
///
/// Implementations issue exactly one history entry per `push`.
pub trait NavigationBridge {
    fn current_query_string(&self) -> String;
    fn push(&mut self, query_string: &str);

    fn current_query(&self) -> SearchQuery {
        query_codec::decode(&self.current_query_string())
    }

    fn push_query(&mut self, query: &SearchQuery) {
        self.push(&query_codec::encode(query));
    }
}

/// Keeps the location in memory. Used off-browser and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryNavigation {
    history: Vec<String>,
}

// starts at the empty location, so the first push counts like any other
impl Default for InMemoryNavigation {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl InMemoryNavigation {
    pub fn new(initial_query_string: impl Into<String>) -> Self {
        Self { history: vec![initial_query_string.into()] }
    }

    /// Every location visited, oldest first, including the initial one.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Number of pushes since construction.
    pub fn push_count(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    pub fn back(&mut self) -> Option<String> {
        if self.history.len() > 1 {
            self.history.pop()
        } else {
            None
        }
    }
}

impl NavigationBridge for InMemoryNavigation {
    fn current_query_string(&self) -> String {
        self.history.last().cloned().unwrap_or_default()
    }

    fn push(&mut self, query_string: &str) {
        tracing::debug!("navigate: ?{}", query_string);
        self.history.push(query_string.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_restores_previous_location() {
        let mut nav = InMemoryNavigation::new("page=2");
        nav.push("page=3");
        assert_eq!(nav.current_query().page, 3);
        assert_eq!(nav.push_count(), 1);
        assert_eq!(nav.back().as_deref(), Some("page=3"));
        assert_eq!(nav.current_query().page, 2);
        assert_eq!(nav.back(), None);
    }

    #[test]
    fn default_location_counts_the_first_push() {
        let mut nav = InMemoryNavigation::default();
        assert_eq!(nav.current_query_string(), "");
        assert_eq!(nav.push_count(), 0);
        nav.push("page=2");
        assert_eq!(nav.push_count(), 1);
        assert_eq!(nav.back().as_deref(), Some("page=2"));
        assert_eq!(nav.current_query_string(), "");
    }
}
