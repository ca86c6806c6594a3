//! Route summary bar shown once a route is calculated.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Floor, FloorId, Route, label_for_floor_id};

/// Destination label when the search bar has no destination.
pub const UNKNOWN_DESTINATION: &str = "Unknown Destination";

/// A floor chip on the route bar.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorChip {
    pub id: FloorId,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct RouteInfoBar {
    floors: Arc<[Floor]>,
    destination: String,
    distance: String,
    time: String,
    chips: Vec<FloorId>,
    selected_floor: Option<FloorId>,
    visible: bool,
}

impl Default for RouteInfoBar {
    fn default() -> Self {
        Self {
            floors: Arc::from(Vec::<Floor>::new()),
            destination: String::new(),
            distance: String::new(),
            time: String::new(),
            chips: Vec::new(),
            selected_floor: None,
            visible: false,
        }
    }
}

impl RouteInfoBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Floors used to label the chips.
    pub fn set_floors(&mut self, floors: Arc<[Floor]>) {
        self.floors = floors;
    }

    /// Show the summary of `route`.
    pub fn show_route(&mut self, route: &Route, destination: Option<&str>) {
        self.destination = destination
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(UNKNOWN_DESTINATION)
            .to_string();
        self.distance = route.formatted_distance();
        self.time = route.formatted_time();
        self.chips = route.floor_chips().to_vec();
        self.selected_floor = None;
        self.visible = true;
        debug!(destination = %self.destination, chips = self.chips.len(), "route info shown");
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn distance(&self) -> &str {
        &self.distance
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// Highlight a chip. Returns its label.
    pub fn select_chip(&mut self, id: &FloorId) -> String {
        self.selected_floor = Some(id.clone());
        self.label(id)
    }

    pub fn selected_floor(&self) -> Option<&FloorId> {
        self.selected_floor.as_ref()
    }

    pub fn label(&self, id: &FloorId) -> String {
        label_for_floor_id(&self.floors, id)
    }

    /// Chips in travel order; empty for single-floor routes.
    pub fn chips(&self) -> Vec<FloorChip> {
        self.chips
            .iter()
            .map(|id| FloorChip {
                id: id.clone(),
                label: self.label(id),
                selected: self.selected_floor.as_ref() == Some(id),
            })
            .collect()
    }
}
