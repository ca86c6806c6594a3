//! Events delivered by the mapping SDK.
//!
//! The SDK never calls into the application directly. It publishes events
//! onto an [`EventBus`]; the consumer drains the bus in order and every
//! subscribed handler sees each event synchronously as it is drained.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{Category, Floor, Location, Route, RouteErrorKind, Site};

/// Something the SDK reports to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum SdkEvent {
    /// The site finished rendering; carries the building/floor hierarchy.
    RenderComplete(Arc<Site>),
    /// Map initialisation failed.
    InitError { code: i32, message: String },
    /// Locations and categories are available.
    AppDataLoaded {
        locations: Arc<[Location]>,
        categories: Arc<[Category]>,
    },
    /// The map switched floors.
    FloorChanged(Floor),
    /// The user tapped locations on the map. May be empty.
    LocationsSelected {
        locations: Vec<Location>,
        timestamp: DateTime<Utc>,
    },
    /// Candidate routes for the last route request, best first.
    RouteCalculated(Vec<Route>),
    /// The last route request failed.
    RouteError(RouteErrorKind),
}

impl SdkEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            SdkEvent::RenderComplete(_) => "render_complete",
            SdkEvent::InitError { .. } => "init_error",
            SdkEvent::AppDataLoaded { .. } => "app_data_loaded",
            SdkEvent::FloorChanged(_) => "floor_changed",
            SdkEvent::LocationsSelected { .. } => "locations_selected",
            SdkEvent::RouteCalculated(_) => "route_calculated",
            SdkEvent::RouteError(_) => "route_error",
        }
    }
}

/// A subscriber to SDK events.
pub trait SdkEventHandler: Send {
    fn handle(&mut self, event: &SdkEvent);
}

impl<F> SdkEventHandler for F
where
    F: FnMut(&SdkEvent) + Send,
{
    fn handle(&mut self, event: &SdkEvent) {
        self(event)
    }
}

/// Ordered queue of pending SDK events plus their subscribers.
#[derive(Default)]
pub struct EventBus {
    pending: VecDeque<SdkEvent>,
    handlers: Vec<Box<dyn SdkEventHandler>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("pending", &self.pending.len())
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber. It sees every event drained after this call.
    pub fn subscribe(&mut self, handler: impl SdkEventHandler + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Queue an event for delivery.
    pub fn publish(&mut self, event: SdkEvent) {
        self.pending.push_back(event);
    }

    /// Take the oldest pending event, dispatching it to every subscriber
    /// before handing it back.
    pub fn next_event(&mut self) -> Option<SdkEvent> {
        let event = self.pending.pop_front()?;
        for handler in &mut self.handlers {
            handler.handle(&event);
        }
        Some(event)
    }

    /// Number of events waiting to be drained.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
