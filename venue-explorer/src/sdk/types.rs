//! Venue data file format served by the mock SDK.
//!
//! These types mirror the JSON layout exactly and carry no validation;
//! [`super::convert`] turns them into domain types.

use serde::{Deserialize, Serialize};

/// Top-level venue document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueData {
    pub site: SiteDto,
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
    #[serde(default)]
    pub locations: Vec<LocationDto>,
    /// Precomputed routes between location pairs.
    #[serde(default)]
    pub routes: Vec<RouteDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteDto {
    /// Identifier the site is loaded by. Absent means any identifier matches.
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub buildings: Vec<BuildingDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub floors: Vec<FloorDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorDto {
    pub id: String,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub elevation: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub icon_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<String>,
    pub floor_id: Option<String>,
    #[serde(rename = "type")]
    pub location_type: Option<String>,
    pub amenity: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDto {
    pub from: String,
    pub to: String,
    /// Metres.
    pub distance: Option<f64>,
    pub time_seconds: Option<i64>,
    /// Floor ids in travel order.
    #[serde(default)]
    pub floors: Vec<String>,
    #[serde(default)]
    pub steps: usize,
}
