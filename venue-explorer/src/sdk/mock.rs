//! Mock venue SDK serving a venue from a JSON file.
//!
//! Stands in for the real mapping SDK during development and in tests. The
//! whole venue is loaded up front; "asynchronous" results are queued on the
//! event bus and delivered when the consumer drains it.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{Floor, FloorId, Location, LocationId, Route, RouteErrorKind, Site};

use super::client::VenueSdk;
use super::convert::{Venue, convert_venue};
use super::error::SdkError;
use super::events::{EventBus, SdkEvent};
use super::types::VenueData;

/// Init error code for a site identifier the data file does not serve.
pub const INIT_UNKNOWN_SITE: i32 = 404;
/// Init error code for a site with nothing to render.
pub const INIT_EMPTY_SITE: i32 = 422;
/// Most recent route requests kept for inspection.
const ROUTE_REQUEST_HISTORY: usize = 32;

/// Mock SDK backed by an in-memory venue.
#[derive(Debug)]
pub struct MockVenueSdk {
    site_id: Option<String>,
    venue: Venue,
    loaded: bool,
    selected_floor: Option<FloorId>,
    selected_location: Option<LocationId>,
    routes: Vec<Route>,
    shown_route: Option<usize>,
    route_requests: Vec<(LocationId, LocationId)>,
    bus: EventBus,
}

impl MockVenueSdk {
    /// Load a venue from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SdkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SdkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sdk = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            locations = sdk.venue.locations.len(),
            routes = sdk.venue.routes.len(),
            "loaded mock venue"
        );
        Ok(sdk)
    }

    /// Load a venue from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        let data: VenueData = serde_json::from_str(json)?;
        Self::from_data(&data)
    }

    pub fn from_data(data: &VenueData) -> Result<Self, SdkError> {
        let venue = convert_venue(data)?;
        Ok(Self {
            site_id: data.site.id.clone(),
            venue,
            loaded: false,
            selected_floor: None,
            selected_location: None,
            routes: Vec::new(),
            shown_route: None,
            route_requests: Vec::new(),
            bus: EventBus::new(),
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn selected_floor(&self) -> Option<&FloorId> {
        self.selected_floor.as_ref()
    }

    pub fn selected_location(&self) -> Option<&LocationId> {
        self.selected_location.as_ref()
    }

    /// Routes from the last successful route request.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn shown_route(&self) -> Option<usize> {
        self.shown_route
    }

    /// The most recent route requests, oldest first.
    pub fn route_requests(&self) -> &[(LocationId, LocationId)] {
        &self.route_requests
    }

    /// Simulate the user tapping locations on the map.
    ///
    /// Unknown ids are skipped. An empty tap reports an empty selection.
    pub fn tap(&mut self, ids: &[LocationId]) {
        let locations: Vec<Location> = ids
            .iter()
            .filter_map(|id| {
                let found = self.venue.location(id).cloned();
                if found.is_none() {
                    warn!(location = %id, "tap on unknown location ignored");
                }
                found
            })
            .collect();
        self.selected_location = locations.first().map(|l| l.id.clone());
        self.bus.publish(SdkEvent::LocationsSelected {
            locations,
            timestamp: Utc::now(),
        });
    }

    /// The configured route between two locations, reversed when only the
    /// opposite direction is on file.
    pub fn configured_route(&self, from: &LocationId, to: &LocationId) -> Option<Route> {
        if let Some(route) = self.venue.routes.get(&(from.clone(), to.clone())) {
            return Some(route.clone());
        }
        self.venue
            .routes
            .get(&(to.clone(), from.clone()))
            .map(|route| {
                let mut reversed = route.clone();
                reversed.involved_floors.reverse();
                reversed
            })
    }
}

impl VenueSdk for MockVenueSdk {
    fn load(&mut self, site_id: &str) -> Result<(), SdkError> {
        if let Some(expected) = &self.site_id {
            if expected != site_id {
                warn!(requested = site_id, served = %expected, "unknown site identifier");
                self.bus.publish(SdkEvent::InitError {
                    code: INIT_UNKNOWN_SITE,
                    message: format!("unknown site identifier: {site_id}"),
                });
                return Ok(());
            }
        }
        if self.venue.site.buildings.is_empty() {
            self.bus.publish(SdkEvent::InitError {
                code: INIT_EMPTY_SITE,
                message: "site has no buildings".to_string(),
            });
            return Ok(());
        }

        self.loaded = true;
        self.bus
            .publish(SdkEvent::RenderComplete(Arc::clone(&self.venue.site)));
        self.bus.publish(SdkEvent::AppDataLoaded {
            locations: Arc::clone(&self.venue.locations),
            categories: Arc::clone(&self.venue.categories),
        });
        debug!(site = site_id, "site load queued");
        Ok(())
    }

    fn site(&self) -> Option<Arc<Site>> {
        self.loaded.then(|| Arc::clone(&self.venue.site))
    }

    fn select_floor(&mut self, floor: &Floor) -> Result<(), SdkError> {
        if !self.loaded {
            return Err(SdkError::NotReady);
        }
        let found = self
            .venue
            .site
            .find_floor(&floor.id)
            .cloned()
            .ok_or_else(|| SdkError::FloorNotFound(floor.id.clone()))?;
        self.selected_floor = Some(found.id.clone());
        self.bus.publish(SdkEvent::FloorChanged(found));
        Ok(())
    }

    fn select_location(&mut self, location: &Location) -> Result<(), SdkError> {
        if !self.loaded {
            return Err(SdkError::NotReady);
        }
        if self.venue.location(&location.id).is_none() {
            return Err(SdkError::LocationNotFound(location.id.clone()));
        }
        self.selected_location = Some(location.id.clone());
        Ok(())
    }

    fn request_route(&mut self, from: &Location, to: &Location) -> Result<(), SdkError> {
        if self.route_requests.len() == ROUTE_REQUEST_HISTORY {
            self.route_requests.remove(0);
        }
        self.route_requests.push((from.id.clone(), to.id.clone()));

        let outcome = if !self.loaded {
            Err(RouteErrorKind::RoutingUnavailable)
        } else if from.id == to.id {
            Err(RouteErrorKind::InvalidParameters)
        } else {
            self.configured_route(&from.id, &to.id)
                .ok_or(RouteErrorKind::NoRouteFound)
        };

        match outcome {
            Ok(route) => {
                self.routes = vec![route];
                self.shown_route = None;
                self.bus
                    .publish(SdkEvent::RouteCalculated(self.routes.clone()));
            }
            Err(kind) => self.bus.publish(SdkEvent::RouteError(kind)),
        }
        Ok(())
    }

    fn show_route(&mut self, index: usize) -> Result<(), SdkError> {
        if index >= self.routes.len() {
            return Err(SdkError::RouteIndexOutOfRange {
                index,
                available: self.routes.len(),
            });
        }
        self.shown_route = Some(index);
        Ok(())
    }

    fn clear_routes(&mut self) -> Result<(), SdkError> {
        self.routes.clear();
        self.shown_route = None;
        Ok(())
    }

    fn clear_selection(&mut self) -> Result<(), SdkError> {
        self.selected_location = None;
        Ok(())
    }

    fn events(&mut self) -> &mut EventBus {
        &mut self.bus
    }
}
