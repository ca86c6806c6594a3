//! The mapping SDK seen from the application.

use std::sync::Arc;

use crate::domain::{Floor, Location, Site};

use super::error::SdkError;
use super::events::{EventBus, SdkEvent};

/// Outbound calls into the mapping SDK.
///
/// Calls return once the request is accepted. Results arrive later as
/// [`SdkEvent`]s on the SDK's [`EventBus`].
pub trait VenueSdk: Send {
    /// Start loading the given site. Completion is reported through
    /// `RenderComplete` and `AppDataLoaded`, failure through `InitError`.
    fn load(&mut self, site_id: &str) -> Result<(), SdkError>;

    /// The rendered site, once available.
    fn site(&self) -> Option<Arc<Site>>;

    fn select_floor(&mut self, floor: &Floor) -> Result<(), SdkError>;

    /// Highlight a location. Fails with [`SdkError::LocationNotFound`] for
    /// locations the SDK does not know.
    fn select_location(&mut self, location: &Location) -> Result<(), SdkError>;

    /// Ask for walking directions with no waypoints.
    fn request_route(&mut self, from: &Location, to: &Location) -> Result<(), SdkError>;

    /// Draw one of the routes from the last `RouteCalculated` event.
    fn show_route(&mut self, index: usize) -> Result<(), SdkError>;

    fn clear_routes(&mut self) -> Result<(), SdkError>;

    fn clear_selection(&mut self) -> Result<(), SdkError>;

    fn events(&mut self) -> &mut EventBus;

    /// Next pending event, if any.
    fn poll_event(&mut self) -> Option<SdkEvent> {
        self.events().next_event()
    }
}
