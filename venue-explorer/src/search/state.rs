//! Search screen state: query, category filter and the derived results.

use std::sync::Arc;

use tracing::trace;

use crate::domain::{CategoryId, Location};

use super::filter::filter_locations;

/// What the search screen shows: results or the empty indicator, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchView {
    Results,
    Empty,
}

/// Query, selected category and filtered results for one search screen.
///
/// The filtered set is derived. It is recomputed from the full snapshot on
/// every query or category change and replaced wholesale, so readers never
/// observe a half-updated list.
#[derive(Debug, Clone)]
pub struct SearchState {
    query: String,
    selected_category: Option<CategoryId>,
    all: Option<Arc<[Location]>>,
    filtered: Arc<[Location]>,
}

impl SearchState {
    /// Create state over a location snapshot, showing everything.
    ///
    /// `None` means the SDK has not delivered locations yet.
    pub fn new(all: Option<Arc<[Location]>>) -> Self {
        let mut state = Self {
            query: String::new(),
            selected_category: None,
            all,
            filtered: Arc::from(Vec::<Location>::new()),
        };
        state.recompute();
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_category(&self) -> Option<&CategoryId> {
        self.selected_category.as_ref()
    }

    /// The full snapshot, if loaded.
    pub fn all(&self) -> Option<&[Location]> {
        self.all.as_deref()
    }

    /// The current results.
    pub fn results(&self) -> &[Location] {
        &self.filtered
    }

    /// A shared handle to the current results.
    pub fn results_handle(&self) -> Arc<[Location]> {
        Arc::clone(&self.filtered)
    }

    /// Update the query text and re-filter.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    /// Update the category filter and re-filter with the current query.
    pub fn set_category(&mut self, category: Option<CategoryId>) {
        self.selected_category = category;
        self.recompute();
    }

    /// Which of results/empty indicator to show.
    pub fn view(&self) -> SearchView {
        if self.filtered.is_empty() {
            SearchView::Empty
        } else {
            SearchView::Results
        }
    }

    fn recompute(&mut self) {
        let found = filter_locations(
            self.all.as_deref(),
            &self.query,
            self.selected_category.as_ref(),
        );
        trace!(
            query = %self.query,
            category = ?self.selected_category,
            results = found.len(),
            "search results recomputed"
        );
        self.filtered = Arc::from(found);
    }
}
