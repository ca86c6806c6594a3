//! The search bar: single-destination search vs two-point routing.
//!
//! The bar holds an optional source and an optional destination. Its mode is
//! never stored; [`SearchBar::mode`] derives it from the two ends every time,
//! so the displayed mode cannot drift from the selection.

use std::fmt;

use tracing::debug;

use crate::domain::Location;

/// Which face of the search bar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBarMode {
    /// No destination. A lone source also displays as idle.
    Idle,
    /// Destination set, source unset.
    SingleDestination,
    /// Both ends set.
    Routing,
}

impl SearchBarMode {
    /// Derive the mode from the two ends.
    pub fn derive(source: Option<&Location>, destination: Option<&Location>) -> Self {
        match (source, destination) {
            (Some(_), Some(_)) => SearchBarMode::Routing,
            (None, Some(_)) => SearchBarMode::SingleDestination,
            (_, None) => SearchBarMode::Idle,
        }
    }
}

/// User interactions the search bar reports upward.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchBarEvent {
    SearchRequested,
    SpeechRequested,
    SourceRequested,
    DestinationRequested,
    LocationsSwapped {
        source: Location,
        destination: Location,
    },
}

/// Observer for search bar events.
pub trait SearchBarListener: Send {
    fn on_event(&mut self, event: &SearchBarEvent);
}

impl<F> SearchBarListener for F
where
    F: FnMut(&SearchBarEvent) + Send,
{
    fn on_event(&mut self, event: &SearchBarEvent) {
        self(event)
    }
}

/// Source/destination selection plus the text shown in search mode.
#[derive(Default)]
pub struct SearchBar {
    source: Option<Location>,
    destination: Option<Location>,
    text: String,
    listener: Option<Box<dyn SearchBarListener>>,
}

impl fmt::Debug for SearchBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBar")
            .field("source", &self.source.as_ref().map(|l| &l.id))
            .field("destination", &self.destination.as_ref().map(|l| &l.id))
            .field("text", &self.text)
            .field("mode", &self.mode())
            .finish()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl SearchBarListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn mode(&self) -> SearchBarMode {
        SearchBarMode::derive(self.source.as_ref(), self.destination.as_ref())
    }

    pub fn is_routing(&self) -> bool {
        self.mode() == SearchBarMode::Routing
    }

    pub fn source(&self) -> Option<&Location> {
        self.source.as_ref()
    }

    pub fn destination(&self) -> Option<&Location> {
        self.destination.as_ref()
    }

    /// Text in the search-mode input.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the input text directly. Does not touch the destination.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Labels for the "from" and "to" rows, only while routing.
    pub fn routing_labels(&self) -> Option<(String, String)> {
        match (&self.source, &self.destination) {
            (Some(src), Some(dst)) => Some((src.display_text(), dst.display_text())),
            _ => None,
        }
    }

    pub fn set_destination(&mut self, location: Location) {
        self.destination = Some(location);
        self.sync_text();
        self.log_mode("destination set");
    }

    pub fn set_source(&mut self, location: Location) {
        self.source = Some(location);
        self.log_mode("source set");
    }

    pub fn clear_destination(&mut self) {
        self.destination = None;
        self.log_mode("destination cleared");
    }

    pub fn clear_source(&mut self) {
        self.source = None;
        self.log_mode("source cleared");
    }

    /// Clear the input text and the destination.
    pub fn clear_text(&mut self) {
        self.text.clear();
        self.destination = None;
        self.log_mode("text cleared");
    }

    /// Back to the initial state, from any mode.
    pub fn reset(&mut self) {
        self.source = None;
        self.destination = None;
        self.text.clear();
        self.log_mode("reset");
    }

    /// Exchange source and destination.
    ///
    /// Only does anything while routing; returns whether a swap happened.
    /// The listener sees the swapped pair.
    pub fn swap(&mut self) -> bool {
        if !self.is_routing() {
            return false;
        }
        std::mem::swap(&mut self.source, &mut self.destination);

        if let (Some(source), Some(destination)) = (&self.source, &self.destination) {
            let event = SearchBarEvent::LocationsSwapped {
                source: source.clone(),
                destination: destination.clone(),
            };
            self.notify(&event);
        }
        true
    }

    /// The search input or search icon was tapped.
    pub fn request_search(&mut self) -> SearchBarEvent {
        self.emit(SearchBarEvent::SearchRequested)
    }

    /// The microphone icon was tapped.
    pub fn request_speech(&mut self) -> SearchBarEvent {
        self.emit(SearchBarEvent::SpeechRequested)
    }

    /// The "from" row was tapped.
    pub fn request_source(&mut self) -> SearchBarEvent {
        self.emit(SearchBarEvent::SourceRequested)
    }

    /// The "to" row was tapped.
    pub fn request_destination(&mut self) -> SearchBarEvent {
        self.emit(SearchBarEvent::DestinationRequested)
    }

    fn emit(&mut self, event: SearchBarEvent) -> SearchBarEvent {
        self.notify(&event);
        event
    }

    fn notify(&mut self, event: &SearchBarEvent) {
        match self.listener.as_mut() {
            Some(listener) => listener.on_event(event),
            None => debug!(?event, "no search bar listener registered"),
        }
    }

    /// In search mode the input mirrors the destination.
    fn sync_text(&mut self) {
        if self.mode() != SearchBarMode::Routing {
            if let Some(dest) = &self.destination {
                self.text = dest.display_text();
            }
        }
    }

    fn log_mode(&self, transition: &'static str) {
        debug!(transition, mode = ?self.mode(), "search bar updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationId;
    use std::sync::{Arc, Mutex};

    fn loc(id: &str, name: &str) -> Location {
        Location::new(LocationId::parse(id).unwrap(), name)
    }

    #[test]
    fn starts_idle() {
        let bar = SearchBar::new();
        assert_eq!(bar.mode(), SearchBarMode::Idle);
        assert!(bar.text().is_empty());
    }

    #[test]
    fn documented_walkthrough() {
        let mut bar = SearchBar::new();

        bar.set_destination(loc("a", "A"));
        assert_eq!(bar.mode(), SearchBarMode::SingleDestination);

        bar.set_source(loc("b", "B"));
        assert_eq!(bar.mode(), SearchBarMode::Routing);

        assert!(bar.swap());
        assert_eq!(bar.source().unwrap().id.as_str(), "a");
        assert_eq!(bar.destination().unwrap().id.as_str(), "b");
        assert_eq!(bar.mode(), SearchBarMode::Routing);

        bar.reset();
        assert_eq!(bar.mode(), SearchBarMode::Idle);
        assert!(bar.source().is_none());
        assert!(bar.destination().is_none());
        assert!(bar.text().is_empty());
    }

    #[test]
    fn source_alone_displays_idle() {
        let mut bar = SearchBar::new();
        bar.set_source(loc("b", "B"));
        assert_eq!(bar.mode(), SearchBarMode::Idle);
        assert!(bar.routing_labels().is_none());
    }

    #[test]
    fn clearing_source_drops_to_single_destination() {
        let mut bar = SearchBar::new();
        bar.set_destination(loc("a", "A"));
        bar.set_source(loc("b", "B"));

        bar.clear_source();
        assert_eq!(bar.mode(), SearchBarMode::SingleDestination);

        bar.clear_destination();
        assert_eq!(bar.mode(), SearchBarMode::Idle);
    }

    #[test]
    fn clearing_destination_while_routing_goes_idle() {
        let mut bar = SearchBar::new();
        bar.set_destination(loc("a", "A"));
        bar.set_source(loc("b", "B"));

        bar.clear_destination();
        assert_eq!(bar.mode(), SearchBarMode::Idle);
        assert!(bar.source().is_some());
    }

    #[test]
    fn swap_outside_routing_is_noop() {
        let mut bar = SearchBar::new();
        assert!(!bar.swap());

        bar.set_destination(loc("a", "A"));
        assert!(!bar.swap());
        assert_eq!(bar.destination().unwrap().id.as_str(), "a");
        assert!(bar.source().is_none());

        let mut bar = SearchBar::new();
        bar.set_source(loc("b", "B"));
        assert!(!bar.swap());
        assert_eq!(bar.source().unwrap().id.as_str(), "b");
    }

    #[test]
    fn destination_sets_text_in_search_mode() {
        let mut bar = SearchBar::new();
        bar.set_destination(loc("a", "Starbucks"));
        assert_eq!(bar.text(), "Starbucks");

        bar.set_destination(loc("z", " "));
        assert_eq!(bar.text(), "Location z");
    }

    #[test]
    fn destination_while_routing_keeps_text() {
        let mut bar = SearchBar::new();
        bar.set_destination(loc("a", "Starbucks"));
        bar.set_source(loc("b", "Nike"));
        bar.set_destination(loc("c", "Zara"));
        assert_eq!(bar.text(), "Starbucks");
        assert_eq!(
            bar.routing_labels(),
            Some(("Nike".to_string(), "Zara".to_string()))
        );
    }

    #[test]
    fn clear_text_clears_destination() {
        let mut bar = SearchBar::new();
        bar.set_destination(loc("a", "Starbucks"));
        bar.clear_text();
        assert!(bar.text().is_empty());
        assert_eq!(bar.mode(), SearchBarMode::Idle);
    }

    #[test]
    fn listener_sees_swapped_pair() {
        let seen: Arc<Mutex<Vec<SearchBarEvent>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let mut bar = SearchBar::new();
        bar.set_listener(move |event: &SearchBarEvent| sink.lock().unwrap().push(event.clone()));
        bar.set_destination(loc("a", "A"));
        bar.set_source(loc("b", "B"));
        bar.swap();

        let events = seen.lock().unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            SearchBarEvent::LocationsSwapped {
                source,
                destination,
            } => {
                assert_eq!(source.id.as_str(), "a");
                assert_eq!(destination.id.as_str(), "b");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn requests_are_reported() {
        let mut bar = SearchBar::new();
        assert_eq!(bar.request_search(), SearchBarEvent::SearchRequested);
        assert_eq!(bar.request_speech(), SearchBarEvent::SpeechRequested);
        assert_eq!(bar.request_source(), SearchBarEvent::SourceRequested);
        assert_eq!(bar.request_destination(), SearchBarEvent::DestinationRequested);
    }
}
