//! Site hierarchy: a venue with buildings and their floors.

use super::{Floor, FloorId};

/// A building and its floors, ordered bottom to top as the SDK reports them.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub id: String,
    pub name: String,
    pub floors: Vec<Floor>,
}

/// The venue managed by the mapping SDK.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub name: String,
    pub buildings: Vec<Building>,
}

impl Site {
    /// Floors of the first building, which the map screen treats as active.
    pub fn primary_floors(&self) -> &[Floor] {
        self.buildings
            .first()
            .map(|b| b.floors.as_slice())
            .unwrap_or(&[])
    }

    /// Find a floor by id across every building.
    pub fn find_floor(&self, id: &FloorId) -> Option<&Floor> {
        self.buildings
            .iter()
            .flat_map(|b| b.floors.iter())
            .find(|f| &f.id == id)
    }
}
