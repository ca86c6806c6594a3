//! Points of interest.

use std::fmt;

use super::{Category, CategoryId, FloorId, LocationId};

/// Classification of a location as reported by the SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationType {
    Tenant,
    Amenity,
    PointOfInterest,
    Other(String),
}

impl LocationType {
    /// Parse the SDK's type tag. Unknown tags are preserved verbatim.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "TENANT" => LocationType::Tenant,
            "AMENITY" | "AMENITIES" => LocationType::Amenity,
            "POI" | "POINT_OF_INTEREST" => LocationType::PointOfInterest,
            _ => LocationType::Other(s.trim().to_string()),
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationType::Tenant => f.write_str("TENANT"),
            LocationType::Amenity => f.write_str("AMENITY"),
            LocationType::PointOfInterest => f.write_str("POI"),
            LocationType::Other(tag) => f.write_str(tag),
        }
    }
}

/// A single point of interest in the venue.
///
/// Immutable for the lifetime of one site session; the whole set is replaced
/// when the SDK reloads site data.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: Option<String>,
    /// Ordered; the first category is the one shown in subtitles.
    pub categories: Vec<Category>,
    pub floor_id: Option<FloorId>,
    pub location_type: Option<LocationType>,
    pub amenity: Option<String>,
}

impl Location {
    /// Create a location with only an id and a name.
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            categories: Vec::new(),
            floor_id: None,
            location_type: None,
            amenity: None,
        }
    }

    /// Whether any of this location's categories has the given id.
    pub fn has_category(&self, id: &CategoryId) -> bool {
        self.categories
            .iter()
            .any(|c| c.id.as_ref().is_some_and(|cid| cid == id))
    }

    /// Name shown in the search bar, with a fallback for blank names.
    pub fn display_text(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Location {}", self.id)
        } else {
            self.name.clone()
        }
    }

    /// The description, if present and not blank.
    pub fn non_blank_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }

    /// The first category, if any.
    pub fn primary_category(&self) -> Option<&Category> {
        self.categories.first()
    }
}
