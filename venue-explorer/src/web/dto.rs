//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Floor, Location, label_for_floor_id};
use crate::search::result_subtitle;

/// Which search bar control opened search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenTarget {
    Search,
    Speech,
    Source,
    Destination,
}

/// Form posted to `/search/open`.
#[derive(Debug, Deserialize)]
pub struct OpenSearchForm {
    pub target: OpenTarget,
}

/// Form posted to `/search/select`.
#[derive(Debug, Deserialize)]
pub struct SelectLocationForm {
    pub id: String,
}

/// Form posted to `/map/tap`. No id means a tap on empty space.
#[derive(Debug, Deserialize)]
pub struct MapTapForm {
    pub id: Option<String>,
}

/// Query string for the search screen and `/api/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Free-text query
    pub q: Option<String>,

    /// Category id; empty selects "All"
    pub category: Option<String>,
}

/// A location in search results.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    pub id: String,
    pub name: String,

    /// Description or category/floor/type summary
    pub subtitle: String,

    /// Floor label, if the location has a floor
    pub floor: Option<String>,

    /// Category ids in SDK order
    pub categories: Vec<String>,
}

impl LocationResult {
    pub fn from_location(location: &Location, floors: &[Floor]) -> Self {
        Self {
            id: location.id.to_string(),
            name: location.name.clone(),
            subtitle: result_subtitle(location, floors),
            floor: location
                .floor_id
                .as_ref()
                .map(|f| label_for_floor_id(floors, f)),
            categories: location
                .categories
                .iter()
                .filter_map(|c| c.id.as_ref().map(|id| id.to_string()))
                .collect(),
        }
    }
}

/// Response from `/api/search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<LocationResult>,

    /// True when the empty-results indicator should show instead of a list
    pub empty: bool,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
