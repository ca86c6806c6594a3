//! Askama templates for the web frontend.

use askama::Template;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::controller::{MapController, Notice};
use crate::domain::{CategoryIcon, Floor, Location};
use crate::routing::SearchBarMode;
use crate::sdk::VenueSdk;
use crate::search::{SearchIntent, SearchSession, SearchView, result_subtitle};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// The map screen.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapTemplate {
    pub site_name: String,
    pub init_error: Option<String>,
    pub data_ready: bool,
    pub notices: Vec<NoticeView>,
    pub search_bar: SearchBarView,
    pub floor_switcher: Option<FloorSwitcherView>,
    pub card: Option<CardView>,
    pub route: Option<RouteView>,
}

/// The search screen.
#[derive(Template)]
#[template(path = "search.html")]
pub struct SearchTemplate {
    pub heading: &'static str,
    pub query: String,
    pub chips: Vec<ChipView>,
    pub results: Vec<ResultView>,
    pub empty: bool,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeView {
    pub message: String,
    pub is_error: bool,
}

impl From<Notice> for NoticeView {
    fn from(notice: Notice) -> Self {
        Self {
            is_error: notice.is_error(),
            message: notice.message,
        }
    }
}

/// Search bar in whichever layout its mode calls for.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchBarView {
    pub routing: bool,
    pub text: String,
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloorSwitcherView {
    pub selected_label: String,
    pub expanded: bool,
    pub floors: Vec<FloorLinkView>,
}

/// A floor button. `action` is the form target with the id encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorLinkView {
    pub label: String,
    pub selected: bool,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteView {
    pub destination: String,
    pub distance: String,
    pub time: String,
    pub chips: Vec<FloorLinkView>,
}

/// A category chip. `id` is empty for "All".
#[derive(Debug, Clone, PartialEq)]
pub struct ChipView {
    pub id: String,
    pub href: String,
    pub name: String,
    pub icon: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub icon: &'static str,
}

/// Percent-encode an opaque id for a URL path segment or query value.
fn url_component(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}

impl ResultView {
    pub fn from_location(location: &Location, floors: &[Floor]) -> Self {
        let icon = location
            .primary_category()
            .map(|c| c.icon())
            .unwrap_or(CategoryIcon::Generic);
        Self {
            id: location.id.to_string(),
            name: location.display_text(),
            subtitle: result_subtitle(location, floors),
            icon: icon.css_class(),
        }
    }
}

impl MapTemplate {
    /// Snapshot the map screen, draining pending notices.
    pub fn from_controller<S: VenueSdk>(controller: &mut MapController<S>) -> Self {
        let notices = controller
            .take_notices()
            .into_iter()
            .map(NoticeView::from)
            .collect();

        let bar = controller.search_bar();
        let (source, destination) = bar.routing_labels().unwrap_or_default();
        let search_bar = SearchBarView {
            routing: bar.mode() == SearchBarMode::Routing,
            text: bar.text().to_string(),
            source,
            destination,
        };

        let switcher = controller.floor_switcher();
        let floor_switcher = switcher.is_visible().then(|| FloorSwitcherView {
            selected_label: switcher.selected_label().unwrap_or_default(),
            expanded: switcher.is_expanded(),
            floors: switcher
                .entries()
                .into_iter()
                .map(|entry| FloorLinkView {
                    action: format!("/floors/{}", url_component(entry.id.as_str())),
                    label: entry.label,
                    selected: entry.selected,
                })
                .collect(),
        });

        let card = controller.card();
        let card = match (card.title(), card.description()) {
            (Some(title), Some(description)) => Some(CardView {
                title: title.to_string(),
                description,
            }),
            _ => None,
        };

        let route_info = controller.route_info();
        let route = route_info.is_visible().then(|| RouteView {
            destination: route_info.destination().to_string(),
            distance: route_info.distance().to_string(),
            time: route_info.time().to_string(),
            chips: route_info
                .chips()
                .into_iter()
                .map(|chip| FloorLinkView {
                    action: format!("/route/floors/{}", url_component(chip.id.as_str())),
                    label: chip.label,
                    selected: chip.selected,
                })
                .collect(),
        });

        Self {
            site_name: controller
                .site()
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            init_error: controller.init_error().map(str::to_string),
            data_ready: controller.is_data_ready(),
            notices,
            search_bar,
            floor_switcher,
            card,
            route,
        }
    }
}

impl SearchTemplate {
    pub fn from_session(session: &SearchSession) -> Self {
        let heading = match session.intent() {
            SearchIntent::Browse => "Search",
            SearchIntent::Source => "Choose starting point",
            SearchIntent::Destination => "Choose destination",
        };

        let chips = session.chips();
        let chip_views = chips
            .chips()
            .iter()
            .map(|c| {
                let id = c.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
                ChipView {
                    href: format!("/search?category={}", url_component(&id)),
                    id,
                    name: c.name.clone(),
                icon: c.icon().css_class(),
                    selected: chips.is_selected(c.id.as_ref()),
                }
            })
            .collect();

        let results = session
            .state()
            .results()
            .iter()
            .map(|l| ResultView::from_location(l, session.floors()))
            .collect();

        Self {
            heading,
            query: session.state().query().to_string(),
            chips: chip_views,
            results,
            empty: session.view() == SearchView::Empty,
        }
    }
}
