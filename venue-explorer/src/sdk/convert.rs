//! Conversion from the venue data file to domain types.
//!
//! Every cross reference (location → category, location → floor,
//! route → location/floor) is resolved here, so the domain types handed to
//! the rest of the application are internally consistent.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::Duration;

use crate::domain::{
    Building, Category, CategoryId, DomainError, Floor, FloorId, Location, LocationId,
    LocationType, Route, Site,
};

use super::types::{CategoryDto, FloorDto, LocationDto, RouteDto, SiteDto, VenueData};

/// Errors converting venue data into domain types.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// An id or other field failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A location references a category that does not exist
    #[error("location {location} references unknown category {category}")]
    UnknownCategory { location: String, category: String },

    /// A location or route references a floor that does not exist
    #[error("{owner} references unknown floor {floor}")]
    UnknownFloor { owner: String, floor: String },

    /// A route references a location that does not exist
    #[error("route references unknown location {0}")]
    UnknownLocation(String),

    /// A route walking time does not fit in a duration
    #[error("route {from} -> {to} has out of range time {seconds}s")]
    InvalidDuration {
        from: String,
        to: String,
        seconds: i64,
    },
}

/// Key of a precomputed route: (from, to).
pub type RouteKey = (LocationId, LocationId);

/// A fully converted venue.
#[derive(Debug, Clone)]
pub struct Venue {
    pub site: Arc<Site>,
    pub categories: Arc<[Category]>,
    pub locations: Arc<[Location]>,
    pub routes: HashMap<RouteKey, Route>,
}

impl Venue {
    /// Look up a location by id.
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| &l.id == id)
    }
}

/// Convert a parsed venue document.
pub fn convert_venue(data: &VenueData) -> Result<Venue, ConversionError> {
    let site = convert_site(&data.site)?;
    let floor_ids: HashSet<FloorId> = site
        .buildings
        .iter()
        .flat_map(|b| b.floors.iter().map(|f| f.id.clone()))
        .collect();

    let categories = data
        .categories
        .iter()
        .map(convert_category)
        .collect::<Result<Vec<_>, _>>()?;
    let by_id: HashMap<&str, &Category> = categories
        .iter()
        .filter_map(|c| c.id.as_ref().map(|id| (id.as_str(), c)))
        .collect();

    let mut seen = HashSet::new();
    let mut locations = Vec::with_capacity(data.locations.len());
    for dto in &data.locations {
        let location = convert_location(dto, &by_id, &floor_ids)?;
        if !seen.insert(location.id.clone()) {
            return Err(DomainError::DuplicateLocation(location.id).into());
        }
        locations.push(location);
    }

    let mut routes = HashMap::new();
    for dto in &data.routes {
        let (key, route) = convert_route(dto, &seen, &floor_ids)?;
        routes.insert(key, route);
    }

    Ok(Venue {
        site: Arc::new(site),
        categories: Arc::from(categories),
        locations: Arc::from(locations),
        routes,
    })
}

fn convert_site(dto: &SiteDto) -> Result<Site, ConversionError> {
    let buildings = dto
        .buildings
        .iter()
        .map(|b| -> Result<Building, ConversionError> {
            let floors = b
                .floors
                .iter()
                .map(convert_floor)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Building {
                id: b.id.clone(),
                name: b.name.clone(),
                floors,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Site {
        name: dto.name.clone(),
        buildings,
    })
}

fn convert_floor(dto: &FloorDto) -> Result<Floor, ConversionError> {
    let id = FloorId::parse(&dto.id).map_err(DomainError::from)?;
    Ok(Floor {
        id,
        name: dto.name.clone(),
        short_name: dto.short_name.clone(),
        elevation: dto.elevation,
    })
}

fn convert_category(dto: &CategoryDto) -> Result<Category, ConversionError> {
    let id = CategoryId::parse(&dto.id).map_err(DomainError::from)?;
    Ok(Category {
        id: Some(id),
        name: dto.name.clone(),
        icon_name: dto.icon_name.clone(),
    })
}

fn convert_location(
    dto: &LocationDto,
    categories: &HashMap<&str, &Category>,
    floors: &HashSet<FloorId>,
) -> Result<Location, ConversionError> {
    let id = LocationId::parse(&dto.id).map_err(DomainError::from)?;

    let categories = dto
        .category_ids
        .iter()
        .map(|cid| {
            categories
                .get(cid.as_str())
                .map(|c| (*c).clone())
                .ok_or_else(|| ConversionError::UnknownCategory {
                    location: dto.id.clone(),
                    category: cid.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let floor_id = dto
        .floor_id
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .map(|f| resolve_floor(f, floors, || format!("location {}", dto.id)))
        .transpose()?;

    Ok(Location {
        id,
        name: dto.name.clone(),
        description: dto.description.clone(),
        categories,
        floor_id,
        location_type: dto.location_type.as_deref().map(LocationType::parse),
        amenity: dto.amenity.clone(),
    })
}

fn convert_route(
    dto: &RouteDto,
    locations: &HashSet<LocationId>,
    floors: &HashSet<FloorId>,
) -> Result<(RouteKey, Route), ConversionError> {
    let endpoint = |raw: &str| -> Result<LocationId, ConversionError> {
        let id = LocationId::parse(raw).map_err(DomainError::from)?;
        if locations.contains(&id) {
            Ok(id)
        } else {
            Err(ConversionError::UnknownLocation(raw.to_string()))
        }
    };
    let from = endpoint(&dto.from)?;
    let to = endpoint(&dto.to)?;

    let involved_floors = dto
        .floors
        .iter()
        .map(|f| resolve_floor(f, floors, || format!("route {} -> {}", dto.from, dto.to)))
        .collect::<Result<Vec<_>, _>>()?;
    let distinct: HashSet<&FloorId> = involved_floors.iter().collect();

    let duration = dto
        .time_seconds
        .map(|seconds| {
            Duration::try_seconds(seconds).ok_or_else(|| ConversionError::InvalidDuration {
                from: dto.from.clone(),
                to: dto.to.clone(),
                seconds,
            })
        })
        .transpose()?;

    let route = Route {
        distance_m: dto.distance,
        duration,
        is_multi_floor: distinct.len() > 1,
        involved_floors,
        step_count: dto.steps,
    };
    Ok(((from, to), route))
}

fn resolve_floor(
    raw: &str,
    floors: &HashSet<FloorId>,
    owner: impl FnOnce() -> String,
) -> Result<FloorId, ConversionError> {
    let id = FloorId::parse(raw).map_err(DomainError::from)?;
    if floors.contains(&id) {
        Ok(id)
    } else {
        Err(ConversionError::UnknownFloor {
            owner: owner(),
            floor: raw.to_string(),
        })
    }
}
