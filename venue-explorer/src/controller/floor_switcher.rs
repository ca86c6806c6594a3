//! Floor switcher: the collapsible floor list on the map screen.

use tracing::warn;

use crate::domain::{Floor, FloorId, floor_label};

/// Floor list with a selected floor and an expand/collapse toggle.
#[derive(Debug, Clone, Default)]
pub struct FloorSwitcher {
    floors: Vec<Floor>,
    selected: Option<Floor>,
    expanded: bool,
    visible: bool,
}

/// One row of the expanded floor list.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorEntry {
    pub id: FloorId,
    pub label: String,
    pub selected: bool,
}

impl FloorSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the floor list. The selection is kept only if still present.
    pub fn set_floors(&mut self, floors: Vec<Floor>) {
        if let Some(selected) = &self.selected {
            if !floors.iter().any(|f| f.id == selected.id) {
                self.selected = None;
            }
        }
        self.floors = floors;
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.expanded = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn selected(&self) -> Option<&Floor> {
        self.selected.as_ref()
    }

    /// Label on the collapsed button.
    pub fn selected_label(&self) -> Option<String> {
        self.selected.as_ref().map(floor_label)
    }

    /// Reflect a floor change reported by the map.
    pub fn update_selected(&mut self, floor: Floor) {
        self.selected = Some(floor);
    }

    /// The user picked a row. Collapses the list and returns the floor to
    /// forward to the map, or `None` for an id not in the list.
    pub fn choose(&mut self, id: &FloorId) -> Option<Floor> {
        let Some(floor) = self.floors.iter().find(|f| &f.id == id).cloned() else {
            warn!(floor = %id, "chosen floor is not in the switcher");
            return None;
        };
        self.selected = Some(floor.clone());
        self.expanded = false;
        Some(floor)
    }

    pub fn entries(&self) -> Vec<FloorEntry> {
        self.floors
            .iter()
            .map(|f| FloorEntry {
                id: f.id.clone(),
                label: floor_label(f),
                selected: self.selected.as_ref().is_some_and(|s| s.id == f.id),
            })
            .collect()
    }
}
