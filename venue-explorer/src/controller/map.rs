//! The map screen: reacts to SDK events and user actions.
//!
//! [`MapController`] owns the SDK handle and every piece of screen state.
//! All transitions run synchronously on the caller's thread; SDK results
//! are picked up by [`MapController::pump_events`].

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::{Category, Floor, FloorId, Location, LocationId, Route, RouteErrorKind, Site};
use crate::routing::{SearchBar, SearchBarEvent};
use crate::sdk::{SdkError, SdkEvent, VenueSdk};
use crate::search::{SearchContext, SearchIntent, SearchOutcome, SearchSession};

use super::details_card::LocationDetailsCard;
use super::floor_switcher::FloorSwitcher;
use super::notice::Notice;
use super::route_info::RouteInfoBar;

/// Shown while a route request is outstanding.
pub const CALCULATING_ROUTE: &str = "Calculating route...";
/// Shown when the SDK refuses a route request outright.
pub const ROUTE_REQUEST_FAILED: &str = "Route calculation failed. Please try again.";
pub const MAP_NOT_READY: &str = "Map data not ready";
pub const FLOOR_NOT_FOUND: &str = "Floor not found";
pub const FLOOR_SWITCH_FAILED: &str = "Failed to switch floor";

/// Map screen state and behaviour, generic over the SDK.
#[derive(Debug)]
pub struct MapController<S> {
    sdk: S,
    site: Option<Arc<Site>>,
    floors: Arc<[Floor]>,
    locations: Option<Arc<[Location]>>,
    categories: Option<Arc<[Category]>>,
    init_error: Option<String>,
    search_bar: SearchBar,
    floor_switcher: FloorSwitcher,
    card: LocationDetailsCard,
    route_info: RouteInfoBar,
    search: Option<SearchSession>,
    notices: Vec<Notice>,
}

impl<S: VenueSdk> MapController<S> {
    pub fn new(sdk: S) -> Self {
        let mut search_bar = SearchBar::new();
        search_bar.set_listener(|event: &SearchBarEvent| {
            if let SearchBarEvent::LocationsSwapped {
                source,
                destination,
            } = event
            {
                info!(source = %source.name, destination = %destination.name, "locations swapped");
            }
        });

        Self {
            sdk,
            site: None,
            floors: Arc::from(Vec::<Floor>::new()),
            locations: None,
            categories: None,
            init_error: None,
            search_bar,
            floor_switcher: FloorSwitcher::new(),
            card: LocationDetailsCard::new(),
            route_info: RouteInfoBar::new(),
            search: None,
            notices: Vec::new(),
        }
    }

    /// Ask the SDK to load a site and process whatever it reports.
    pub fn load_site(&mut self, site_id: &str) -> Result<(), SdkError> {
        info!(site = site_id, "loading site");
        self.sdk.load(site_id)?;
        self.pump_events();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    pub fn sdk_mut(&mut self) -> &mut S {
        &mut self.sdk
    }

    pub fn site(&self) -> Option<&Site> {
        self.site.as_deref()
    }

    /// Floors of the active building, bottom to top.
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn locations(&self) -> Option<&[Location]> {
        self.locations.as_deref()
    }

    pub fn categories(&self) -> Option<&[Category]> {
        self.categories.as_deref()
    }

    /// Whether search can be opened.
    pub fn is_data_ready(&self) -> bool {
        self.locations.is_some() && self.categories.is_some()
    }

    pub fn init_error(&self) -> Option<&str> {
        self.init_error.as_deref()
    }

    pub fn search_bar(&self) -> &SearchBar {
        &self.search_bar
    }

    pub fn floor_switcher(&self) -> &FloorSwitcher {
        &self.floor_switcher
    }

    pub fn card(&self) -> &LocationDetailsCard {
        &self.card
    }

    pub fn route_info(&self) -> &RouteInfoBar {
        &self.route_info
    }

    pub fn search_session(&self) -> Option<&SearchSession> {
        self.search.as_ref()
    }

    pub fn search_session_mut(&mut self) -> Option<&mut SearchSession> {
        self.search.as_mut()
    }

    /// Notices raised since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // ------------------------------------------------------------------
    // SDK events
    // ------------------------------------------------------------------

    /// Drain and handle every pending SDK event. Returns how many ran.
    pub fn pump_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.sdk.poll_event() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    pub fn handle_event(&mut self, event: SdkEvent) {
        debug!(event = event.name(), "sdk event");
        match event {
            SdkEvent::RenderComplete(site) => self.on_render_complete(site),
            SdkEvent::InitError { code, message } => {
                error!(code, %message, "map initialisation failed");
                self.init_error = Some(format!("{code}: {message}"));
            }
            SdkEvent::AppDataLoaded {
                locations,
                categories,
            } => self.on_app_data_loaded(locations, categories),
            SdkEvent::FloorChanged(floor) => {
                debug!(floor = %floor.id, "floor changed");
                self.floor_switcher.update_selected(floor);
            }
            SdkEvent::LocationsSelected {
                locations,
                timestamp,
            } => self.on_locations_selected(locations, timestamp),
            SdkEvent::RouteCalculated(routes) => self.on_route_calculated(routes),
            SdkEvent::RouteError(kind) => self.on_route_error(kind),
        }
    }

    fn on_render_complete(&mut self, site: Arc<Site>) {
        self.floors = Arc::from(site.primary_floors().to_vec());
        info!(site = %site.name, floors = self.floors.len(), "map render complete");
        self.init_error = None;
        self.site = Some(site);
    }

    fn on_app_data_loaded(&mut self, locations: Arc<[Location]>, categories: Arc<[Category]>) {
        info!(
            locations = locations.len(),
            categories = categories.len(),
            "app data cached"
        );
        self.locations = Some(locations);
        self.categories = Some(categories);

        if let Some(first) = self.floors.first().cloned() {
            self.floor_switcher.set_floors(self.floors.to_vec());
            self.floor_switcher.show();
            self.floor_switcher.update_selected(first);
            self.route_info.set_floors(Arc::clone(&self.floors));
        }
    }

    fn on_locations_selected(
        &mut self,
        locations: Vec<Location>,
        timestamp: chrono::DateTime<chrono::Utc>,
    ) {
        debug!(count = locations.len(), %timestamp, "locations selected on map");
        let Some(primary) = locations.into_iter().next() else {
            if self.card.is_visible() {
                self.card.dismiss();
            }
            return;
        };

        if self.search_bar.is_routing() {
            debug!(location = %primary.id, "routing in progress, map selection ignored");
            return;
        }
        self.search_bar.set_destination(primary.clone());
        self.card.show(primary);
    }

    fn on_route_calculated(&mut self, routes: Vec<Route>) {
        let Some(primary) = routes.first() else {
            warn!("route calculated with no routes");
            return;
        };
        info!(
            routes = routes.len(),
            distance = %primary.formatted_distance(),
            time = %primary.formatted_time(),
            steps = primary.step_count,
            "route calculated"
        );

        let destination = self.search_bar.destination().map(|d| d.name.clone());
        self.route_info.show_route(primary, destination.as_deref());

        if let Err(e) = self.sdk.show_route(0) {
            error!(error = %e, "failed to display route on map");
        }
    }

    fn on_route_error(&mut self, kind: RouteErrorKind) {
        error!(error = %kind, "route calculation failed");
        self.notices.push(Notice::error(kind.user_message()));
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// React to a search bar interaction.
    pub fn handle_search_bar_event(&mut self, event: &SearchBarEvent) -> bool {
        match event {
            SearchBarEvent::SearchRequested => self.open_search(SearchIntent::Browse),
            SearchBarEvent::SpeechRequested => {
                info!("voice search is not supported, opening text search");
                self.open_search(SearchIntent::Browse)
            }
            SearchBarEvent::SourceRequested => self.open_search(SearchIntent::Source),
            SearchBarEvent::DestinationRequested => self.open_search(SearchIntent::Destination),
            SearchBarEvent::LocationsSwapped { .. } => false,
        }
    }

    /// Tap on the search input.
    pub fn request_search(&mut self) -> bool {
        let event = self.search_bar.request_search();
        self.handle_search_bar_event(&event)
    }

    /// Tap on the microphone.
    pub fn request_speech(&mut self) -> bool {
        let event = self.search_bar.request_speech();
        self.handle_search_bar_event(&event)
    }

    pub fn request_source(&mut self) -> bool {
        let event = self.search_bar.request_source();
        self.handle_search_bar_event(&event)
    }

    pub fn request_destination(&mut self) -> bool {
        let event = self.search_bar.request_destination();
        self.handle_search_bar_event(&event)
    }

    /// Open the search screen. Returns `false` while venue data is still
    /// loading.
    pub fn open_search(&mut self, intent: SearchIntent) -> bool {
        let (Some(locations), Some(categories)) = (&self.locations, &self.categories) else {
            warn!(?intent, "search data not yet available");
            return false;
        };

        let context = SearchContext {
            locations: Arc::clone(locations),
            categories: Arc::clone(categories),
            floors: Arc::clone(&self.floors),
        };
        self.search = Some(SearchSession::open(context, intent));
        true
    }

    /// Close the search screen with its outcome.
    pub fn complete_search(&mut self, outcome: SearchOutcome) {
        let Some(session) = self.search.take() else {
            warn!(?outcome, "no search session to complete");
            return;
        };

        match outcome {
            SearchOutcome::Cancelled => debug!("search cancelled"),
            SearchOutcome::Selected(id) => {
                let intent = session.intent();
                let replaces_destination =
                    intent == SearchIntent::Destination && self.search_bar.source().is_some();
                if replaces_destination {
                    self.replace_destination(&id);
                } else {
                    self.handle_location_selection(&id);
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Location selection and routing
    // ------------------------------------------------------------------

    /// A location was picked from search.
    ///
    /// With a different destination already set, the pick becomes the
    /// route source and a route is requested. Otherwise it becomes the
    /// destination and the details card opens.
    pub fn handle_location_selection(&mut self, id: &LocationId) {
        debug!(location = %id, "location selected from search");
        let Some(location) = self.find_location(id) else {
            warn!(location = %id, "location not found in cached locations");
            return;
        };

        if let Err(e) = self.sdk.select_location(&location) {
            error!(location = %id, error = %e, "failed to select location on map");
            return;
        }

        match self.search_bar.destination().cloned() {
            Some(destination) if destination.id != location.id => {
                info!(
                    source = %location.name,
                    destination = %destination.name,
                    "routing mode"
                );
                self.search_bar.set_source(location.clone());
                self.request_route(&location, &destination);
            }
            _ => {
                self.search_bar.set_destination(location.clone());
                self.card.show(location);
            }
        }
    }

    /// The "to" row was used to pick a new destination for an existing
    /// source.
    fn replace_destination(&mut self, id: &LocationId) {
        let Some(location) = self.find_location(id) else {
            warn!(location = %id, "location not found in cached locations");
            return;
        };
        if let Err(e) = self.sdk.select_location(&location) {
            error!(location = %id, error = %e, "failed to select location on map");
            return;
        }
        self.search_bar.set_destination(location.clone());
        if let Some(source) = self.search_bar.source().cloned() {
            self.request_route(&source, &location);
        }
    }

    fn find_location(&self, id: &LocationId) -> Option<Location> {
        self.locations
            .as_deref()
            .and_then(|all| all.iter().find(|l| &l.id == id))
            .cloned()
    }

    fn request_route(&mut self, from: &Location, to: &Location) {
        info!(from = %from.name, to = %to.name, "calculating route");
        self.notices.push(Notice::info(CALCULATING_ROUTE));
        if let Err(e) = self.sdk.request_route(from, to) {
            error!(error = %e, "route request failed");
            self.notices.push(Notice::error(ROUTE_REQUEST_FAILED));
        }
    }

    /// Exchange source and destination while routing.
    pub fn swap_locations(&mut self) -> bool {
        self.search_bar.swap()
    }

    // ------------------------------------------------------------------
    // Details card
    // ------------------------------------------------------------------

    /// "Navigate" on the card: keep the destination, pick a source.
    pub fn navigate_from_card(&mut self) -> bool {
        let Some(location) = self.card.location() else {
            return false;
        };
        info!(destination = %location.name, "navigation requested, picking source");
        self.search_bar.clear_source();
        let opened = self.open_search(SearchIntent::Source);
        self.card.dismiss();
        opened
    }

    /// Close the card: clears the search bar and the map selection.
    pub fn dismiss_card(&mut self) {
        self.card.dismiss();
        self.search_bar.clear_text();
        if let Err(e) = self.sdk.clear_selection() {
            error!(error = %e, "failed to clear map selection");
        }
    }

    // ------------------------------------------------------------------
    // Floors
    // ------------------------------------------------------------------

    pub fn toggle_floor_switcher(&mut self) {
        self.floor_switcher.toggle();
    }

    /// A floor was picked in the floor switcher.
    pub fn select_floor(&mut self, id: &FloorId) -> bool {
        let Some(floor) = self.floor_switcher.choose(id) else {
            return false;
        };
        match self.sdk.select_floor(&floor) {
            Ok(()) => {
                debug!(floor = %floor.id, "floor selected");
                true
            }
            Err(e) => {
                error!(floor = %floor.id, error = %e, "error selecting floor");
                false
            }
        }
    }

    /// A floor chip on the route bar was tapped.
    pub fn select_route_floor(&mut self, id: &FloorId) {
        let label = self.route_info.select_chip(id);

        let Some(site) = self.sdk.site() else {
            warn!("site data not available for floor switching");
            self.notices.push(Notice::info(MAP_NOT_READY));
            return;
        };
        let Some(floor) = site.find_floor(id).cloned() else {
            warn!(floor = %id, "floor not found");
            self.notices.push(Notice::info(FLOOR_NOT_FOUND));
            return;
        };

        match self.sdk.select_floor(&floor) {
            Ok(()) => {
                debug!(floor = %label, "switched floor from route info");
                self.notices.push(Notice::info(format!("Switched to {label}")));
            }
            Err(e) => {
                error!(floor = %label, error = %e, "failed to switch floor");
                self.notices.push(Notice::error(FLOOR_SWITCH_FAILED));
            }
        }
    }

    /// Close the route bar: back to the initial search bar, no route, no
    /// selection.
    pub fn close_route_info(&mut self) {
        debug!("route info closed");
        self.route_info.hide();
        self.search_bar.reset();
        if let Err(e) = self.sdk.clear_routes() {
            error!(error = %e, "failed to clear routes from map");
        }
        if let Err(e) = self.sdk.clear_selection() {
            error!(error = %e, "failed to clear map selection");
        }
    }
}
