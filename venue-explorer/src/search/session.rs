//! Search screen session and its open/close handoff.
//!
//! Opening search hands the screen an explicit [`SearchContext`] with the
//! working set. The session lives until the user picks a result or cancels,
//! and then reports exactly one [`SearchOutcome`] to the caller.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{Category, CategoryId, Floor, Location, LocationId};

use super::chips::CategoryChips;
use super::state::{SearchState, SearchView};

/// Working set handed to the search screen when it opens.
#[derive(Debug, Clone)]
pub struct SearchContext {
    pub locations: Arc<[Location]>,
    pub categories: Arc<[Category]>,
    pub floors: Arc<[Floor]>,
}

/// Why the search screen was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchIntent {
    /// Plain search from the search bar (or the speech fallback).
    Browse,
    /// Pick the start of a route.
    Source,
    /// Pick the end of a route.
    Destination,
}

/// How a search session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Selected(LocationId),
    Cancelled,
}

/// An open search screen.
#[derive(Debug, Clone)]
pub struct SearchSession {
    intent: SearchIntent,
    state: SearchState,
    chips: CategoryChips,
    floors: Arc<[Floor]>,
}

impl SearchSession {
    /// Open a session over the given working set.
    pub fn open(context: SearchContext, intent: SearchIntent) -> Self {
        debug!(
            locations = context.locations.len(),
            categories = context.categories.len(),
            floors = context.floors.len(),
            ?intent,
            "search session opened"
        );
        Self {
            intent,
            state: SearchState::new(Some(context.locations)),
            chips: CategoryChips::new(&context.categories),
            floors: context.floors,
        }
    }

    pub fn intent(&self) -> SearchIntent {
        self.intent
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn chips(&self) -> &CategoryChips {
        &self.chips
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn view(&self) -> SearchView {
        self.state.view()
    }

    /// Text input changed.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
    }

    /// The clear button.
    pub fn clear_query(&mut self) {
        self.state.set_query(String::new());
    }

    /// A category chip was tapped. Returns whether the selection changed.
    pub fn select_category(&mut self, id: Option<CategoryId>) -> bool {
        if !self.chips.select(id.clone()) {
            return false;
        }
        self.state.set_category(id);
        true
    }

    /// A result row was tapped.
    ///
    /// Only rows currently shown can be picked; anything else is ignored.
    pub fn select(&self, id: &LocationId) -> Option<SearchOutcome> {
        if self.state.results().iter().any(|l| &l.id == id) {
            Some(SearchOutcome::Selected(id.clone()))
        } else {
            warn!(location = %id, "selected location is not among the visible results");
            None
        }
    }

    /// Back button.
    pub fn cancel(&self) -> SearchOutcome {
        SearchOutcome::Cancelled
    }
}
