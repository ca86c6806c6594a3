//! Category chip selector for the search screen.

use crate::domain::{Category, CategoryId};

/// Label of the synthetic chip that clears the category filter.
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// The category chips shown above search results, with one selected at a
/// time.
///
/// The list always starts with a synthetic "All" chip whose id is `None`.
/// It is not part of the SDK's data.
#[derive(Debug, Clone)]
pub struct CategoryChips {
    chips: Vec<Category>,
    selected: Option<CategoryId>,
}

impl CategoryChips {
    /// Build the chip list from the SDK's categories.
    pub fn new(categories: &[Category]) -> Self {
        let mut chips = Vec::with_capacity(categories.len() + 1);
        chips.push(Category {
            id: None,
            name: ALL_CATEGORIES_LABEL.to_string(),
            icon_name: None,
        });
        chips.extend(categories.iter().cloned());

        Self {
            chips,
            selected: None,
        }
    }

    /// All chips, "All" first.
    pub fn chips(&self) -> &[Category] {
        &self.chips
    }

    /// The currently selected category id (`None` = All).
    pub fn selected_id(&self) -> Option<&CategoryId> {
        self.selected.as_ref()
    }

    /// Select a chip by id. Returns `false` if it was already selected.
    pub fn select(&mut self, id: Option<CategoryId>) -> bool {
        if self.selected == id {
            return false;
        }
        self.selected = id;
        true
    }

    /// Whether the chip with the given id is the selected one.
    ///
    /// Both "no id" counts as equal; otherwise ids must match exactly.
    pub fn is_selected(&self, chip_id: Option<&CategoryId>) -> bool {
        match (self.selected.as_ref(), chip_id) {
            (None, None) => true,
            (Some(selected), Some(chip)) => selected == chip,
            _ => false,
        }
    }
}
