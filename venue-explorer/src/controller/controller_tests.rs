//! Map controller flows driven through the mock SDK.

use super::*;
use crate::domain::{FloorId, LocationId, RouteErrorKind};
use crate::routing::SearchBarMode;
use crate::sdk::{MockVenueSdk, SdkEvent};
use crate::search::{SearchIntent, SearchOutcome, SearchView};

const VENUE: &str = r#"{
    "site": {
        "id": "mall",
        "name": "Mall",
        "buildings": [{
            "id": "main",
            "name": "Main",
            "floors": [
                { "id": "g", "elevation": 0.0 },
                { "id": "l1", "shortName": "L1", "elevation": 1.0 },
                { "id": "l2", "elevation": 2.0 }
            ]
        }]
    },
    "categories": [
        { "id": "food", "name": "Food", "iconName": "restaurant" },
        { "id": "shopping", "name": "Shopping", "iconName": "shopping" }
    ],
    "locations": [
        { "id": "sb", "name": "Starbucks", "categoryIds": ["food"], "floorId": "g", "type": "TENANT" },
        { "id": "nike", "name": "Nike Store", "categoryIds": ["shopping"], "floorId": "l1", "type": "TENANT" },
        { "id": "zara", "name": "Zara", "categoryIds": ["shopping"], "floorId": "l1" },
        { "id": "atm", "name": "ATM", "floorId": "g", "type": "AMENITY", "amenity": "atm" }
    ],
    "routes": [
        { "from": "sb", "to": "nike", "distance": 85.0, "timeSeconds": 70, "floors": ["g", "l1"], "steps": 4 },
        { "from": "zara", "to": "nike", "distance": 20.0, "timeSeconds": 15, "floors": ["l1"], "steps": 1 }
    ]
}"#;

fn id(s: &str) -> LocationId {
    LocationId::parse(s).unwrap()
}

fn fid(s: &str) -> FloorId {
    FloorId::parse(s).unwrap()
}

fn unloaded() -> MapController<MockVenueSdk> {
    MapController::new(MockVenueSdk::from_json(VENUE).unwrap())
}

fn controller() -> MapController<MockVenueSdk> {
    let mut c = unloaded();
    c.load_site("mall").unwrap();
    c
}

/// Pick a location through the search screen.
fn pick(c: &mut MapController<MockVenueSdk>, intent: SearchIntent, location: &str) {
    assert!(c.open_search(intent));
    let outcome = c
        .search_session()
        .and_then(|s| s.select(&id(location)))
        .unwrap();
    c.complete_search(outcome);
    c.pump_events();
}

#[test]
fn load_caches_site_and_data() {
    let c = controller();
    assert_eq!(c.site().map(|s| s.name.as_str()), Some("Mall"));
    assert_eq!(c.floors().len(), 3);
    assert_eq!(c.locations().map(|l| l.len()), Some(4));
    assert!(c.is_data_ready());

    assert!(c.floor_switcher().is_visible());
    assert_eq!(c.floor_switcher().selected_label().as_deref(), Some("GF"));
}

#[test]
fn init_error_is_recorded() {
    let mut c = unloaded();
    c.load_site("elsewhere").unwrap();
    assert!(c.init_error().unwrap().contains("unknown site identifier"));
    assert!(!c.is_data_ready());
}

#[test]
fn search_before_data_is_refused() {
    let mut c = unloaded();
    assert!(!c.request_search());
    assert!(c.search_session().is_none());
}

#[test]
fn speech_falls_back_to_search() {
    let mut c = controller();
    assert!(c.request_speech());
    assert_eq!(
        c.search_session().map(|s| s.intent()),
        Some(SearchIntent::Browse)
    );
}

#[test]
fn search_session_filters_with_query_and_chip() {
    let mut c = controller();
    assert!(c.request_search());

    let session = c.search_session_mut().unwrap();
    assert_eq!(session.state().results().len(), 4);

    session.set_query("a");
    let names: Vec<&str> = session.state().results().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Starbucks", "Zara", "ATM"]);

    assert!(session.select_category(Some(crate::domain::CategoryId::parse("shopping").unwrap())));
    let names: Vec<&str> = session.state().results().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Zara"]);

    session.set_query("xyz");
    assert_eq!(session.view(), SearchView::Empty);
}

#[test]
fn cancelled_search_changes_nothing() {
    let mut c = controller();
    assert!(c.request_search());
    c.complete_search(SearchOutcome::Cancelled);

    assert!(c.search_session().is_none());
    assert_eq!(c.search_bar().mode(), SearchBarMode::Idle);
    assert!(!c.card().is_visible());
}

#[test]
fn first_pick_sets_destination_and_shows_card() {
    let mut c = controller();
    pick(&mut c, SearchIntent::Browse, "nike");

    assert_eq!(c.search_bar().mode(), SearchBarMode::SingleDestination);
    assert_eq!(c.search_bar().text(), "Nike Store");
    assert_eq!(c.card().title(), Some("Nike Store"));
    assert_eq!(c.sdk().selected_location(), Some(&id("nike")));
    assert!(c.sdk().route_requests().is_empty());
}

#[test]
fn navigate_then_pick_source_calculates_route() {
    let mut c = controller();
    pick(&mut c, SearchIntent::Browse, "nike");

    assert!(c.navigate_from_card());
    assert!(!c.card().is_visible());
    assert_eq!(
        c.search_session().map(|s| s.intent()),
        Some(SearchIntent::Source)
    );
    let outcome = c.search_session().and_then(|s| s.select(&id("sb"))).unwrap();
    c.complete_search(outcome);

    assert_eq!(c.search_bar().mode(), SearchBarMode::Routing);
    assert_eq!(c.sdk().route_requests(), &[(id("sb"), id("nike"))]);
    let notices = c.take_notices();
    assert_eq!(notices, vec![Notice::info(CALCULATING_ROUTE)]);

    c.pump_events();
    let bar = c.route_info();
    assert!(bar.is_visible());
    assert_eq!(bar.destination(), "Nike Store");
    assert_eq!(bar.distance(), "85 m");
    assert_eq!(bar.time(), "2 min");
    let chips: Vec<String> = bar.chips().into_iter().map(|c| c.label).collect();
    assert_eq!(chips, vec!["GF", "L1"]);
    assert_eq!(c.sdk().shown_route(), Some(0));
}

#[test]
fn single_floor_route_has_no_chips() {
    let mut c = controller();
    pick(&mut c, SearchIntent::Browse, "nike");
    pick(&mut c, SearchIntent::Source, "zara");

    assert!(c.route_info().is_visible());
    assert!(c.route_info().chips().is_empty());
}

#[test]
fn picking_the_destination_again_does_not_route() {
    let mut c = controller();
    pick(&mut c, SearchIntent::Browse, "nike");
    pick(&mut c, SearchIntent::Browse, "nike");

    assert_eq!(c.search_bar().mode(), SearchBarMode::SingleDestination);
    assert!(c.sdk().route_requests().is_empty());
    assert!(c.card().is_visible());
}

#[test]
fn route_error_becomes_notice() {
    let mut c = controller();
    pick(&mut c, SearchIntent::Browse, "nike");
    pick(&mut c, SearchIntent::Source, "atm");

    let notices = c.take_notices();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].message, CALCULATING_ROUTE);
    assert!(notices[1].is_error());
    assert_eq!(
        notices[1].message,
        RouteErrorKind::NoRouteFound.user_message()
    );
    assert!(!c.route_info().is_visible());
    assert_eq!(c.search_bar().mode(), SearchBarMode::Routing);
}

#[test]
fn unknown_location_is_ignored() {
    let mut c = controller();
    c.handle_location_selection(&id("ghost"));

    assert_eq!(c.search_bar().mode(), SearchBarMode::Idle);
    assert!(!c.card().is_visible());
    assert!(c.take_notices().is_empty());
}

#[test]
fn sdk_selection_failure_aborts() {
    let mut c = controller();
    // Cached location the SDK does not know about.
    let mut locations = c.locations().unwrap().to_vec();
    locations.push(crate::domain::Location::new(id("popup"), "Pop-up"));
    let categories = c.categories().unwrap().to_vec();
    c.handle_event(SdkEvent::AppDataLoaded {
        locations: std::sync::Arc::from(locations),
        categories: std::sync::Arc::from(categories),
    });

    c.handle_location_selection(&id("popup"));
    assert_eq!(c.search_bar().mode(), SearchBarMode::Idle);
    assert!(!c.card().is_visible());
}

#[test]
fn swap_only_while_routing() {
    let mut c = controller();
    assert!(!c.swap_locations());

    pick(&mut c, SearchIntent::Browse, "nike");
    assert!(!c.swap_locations());

    pick(&mut c, SearchIntent::Source, "sb");
    assert!(c.swap_locations());
    assert_eq!(c.search_bar().source().map(|l| l.name.as_str()), Some("Nike Store"));
    assert_eq!(c.search_bar().destination().map(|l| l.name.as_str()), Some("Starbucks"));
    assert_eq!(c.search_bar().mode(), SearchBarMode::Routing);
}

#[test]
fn destination_row_replaces_destination() {
    let mut c = controller();
    pick(&mut c, SearchIntent::Browse, "nike");
    pick(&mut c, SearchIntent::Source, "sb");

    assert!(c.request_destination());
    let outcome = c.search_session().and_then(|s| s.select(&id("zara"))).unwrap();
    c.complete_search(outcome);

    assert_eq!(c.search_bar().source().map(|l| l.name.as_str()), Some("Starbucks"));
    assert_eq!(c.search_bar().destination().map(|l| l.name.as_str()), Some("Zara"));
    assert_eq!(c.sdk().route_requests().last(), Some(&(id("sb"), id("zara"))));
}

#[test]
fn close_route_info_resets_everything() {
    let mut c = controller();
    pick(&mut c, SearchIntent::Browse, "nike");
    pick(&mut c, SearchIntent::Source, "sb");
    assert!(c.route_info().is_visible());

    c.close_route_info();
    assert!(!c.route_info().is_visible());
    assert_eq!(c.search_bar().mode(), SearchBarMode::Idle);
    assert_eq!(c.search_bar().text(), "");
    assert!(c.sdk().routes().is_empty());
    assert!(c.sdk().selected_location().is_none());
}

#[test]
fn dismiss_card_clears_bar_and_selection() {
    let mut c = controller();
    pick(&mut c, SearchIntent::Browse, "nike");

    c.dismiss_card();
    assert!(!c.card().is_visible());
    assert_eq!(c.search_bar().mode(), SearchBarMode::Idle);
    assert_eq!(c.search_bar().text(), "");
    assert!(c.sdk().selected_location().is_none());
}

#[test]
fn navigate_without_card_does_nothing() {
    let mut c = controller();
    assert!(!c.navigate_from_card());
    assert!(c.search_session().is_none());
}

#[test]
fn map_tap_sets_destination_when_not_routing() {
    let mut c = controller();
    c.sdk_mut().tap(&[id("zara"), id("nike")]);
    c.pump_events();

    assert_eq!(c.card().title(), Some("Zara"));
    assert_eq!(c.search_bar().destination().map(|l| l.name.as_str()), Some("Zara"));
}

#[test]
fn map_tap_is_ignored_while_routing() {
    let mut c = controller();
    pick(&mut c, SearchIntent::Browse, "nike");
    pick(&mut c, SearchIntent::Source, "sb");

    c.sdk_mut().tap(&[id("zara")]);
    c.pump_events();
    assert_eq!(c.search_bar().destination().map(|l| l.name.as_str()), Some("Nike Store"));
    assert_eq!(c.card().title(), Some("Nike Store"));
}

#[test]
fn empty_map_tap_dismisses_card() {
    let mut c = controller();
    pick(&mut c, SearchIntent::Browse, "nike");
    assert!(c.card().is_visible());

    c.sdk_mut().tap(&[]);
    c.pump_events();
    assert!(!c.card().is_visible());
    // The destination survives a plain dismiss.
    assert_eq!(c.search_bar().mode(), SearchBarMode::SingleDestination);
}

#[test]
fn floor_switcher_selection_reaches_map() {
    let mut c = controller();
    c.toggle_floor_switcher();
    assert!(c.floor_switcher().is_expanded());

    assert!(c.select_floor(&fid("l2")));
    assert!(!c.floor_switcher().is_expanded());
    assert_eq!(c.sdk().selected_floor(), Some(&fid("l2")));

    c.pump_events();
    assert_eq!(c.floor_switcher().selected_label().as_deref(), Some("F2"));
}

#[test]
fn unknown_switcher_floor_is_rejected() {
    let mut c = controller();
    assert!(!c.select_floor(&fid("roof")));
    assert!(c.sdk().selected_floor().is_none());
}

#[test]
fn route_floor_chip_switches_floor() {
    let mut c = controller();
    pick(&mut c, SearchIntent::Browse, "nike");
    pick(&mut c, SearchIntent::Source, "sb");
    c.take_notices();

    c.select_route_floor(&fid("l1"));
    assert_eq!(c.take_notices(), vec![Notice::info("Switched to L1")]);
    assert_eq!(c.sdk().selected_floor(), Some(&fid("l1")));
    assert_eq!(c.route_info().selected_floor(), Some(&fid("l1")));
}

#[test]
fn route_floor_chip_unknown_floor() {
    let mut c = controller();
    c.select_route_floor(&fid("roof"));
    assert_eq!(c.take_notices(), vec![Notice::info(FLOOR_NOT_FOUND)]);
}

#[test]
fn route_floor_chip_before_load() {
    let mut c = unloaded();
    c.select_route_floor(&fid("g"));
    assert_eq!(c.take_notices(), vec![Notice::info(MAP_NOT_READY)]);
}

#[test]
fn route_calculated_without_destination_uses_fallback() {
    let mut c = controller();
    let route = c.sdk().configured_route(&id("sb"), &id("nike")).unwrap();
    c.handle_event(SdkEvent::RouteCalculated(vec![route]));
    assert_eq!(c.route_info().destination(), UNKNOWN_DESTINATION);
}

#[test]
fn empty_route_list_is_ignored() {
    let mut c = controller();
    c.handle_event(SdkEvent::RouteCalculated(Vec::new()));
    assert!(!c.route_info().is_visible());
}

#[test]
fn notices_are_drained_once() {
    let mut c = controller();
    c.handle_event(SdkEvent::RouteError(RouteErrorKind::Other("boom".into())));
    let notices = c.take_notices();
    assert_eq!(notices[0].message, "Route calculation failed: boom");
    assert!(c.take_notices().is_empty());
}
