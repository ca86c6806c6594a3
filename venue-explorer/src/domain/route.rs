//! Route summaries and route failure classification.

use std::fmt;

use chrono::Duration;

use super::FloorId;

/// Placeholder shown when a route summary field is missing.
pub const MISSING_VALUE: &str = "--";

/// A candidate walking route computed by the SDK.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Distance in metres, if reported.
    pub distance_m: Option<f64>,
    /// Estimated walking time, if reported.
    pub duration: Option<Duration>,
    pub is_multi_floor: bool,
    /// Floors the route passes through, in travel order.
    pub involved_floors: Vec<FloorId>,
    pub step_count: usize,
}

impl Route {
    /// Distance for display, e.g. "120 m" or "1.4 km".
    pub fn formatted_distance(&self) -> String {
        match self.distance_m.filter(|d| d.is_finite() && *d >= 0.0) {
            Some(d) if d >= 1000.0 => format!("{:.1} km", d / 1000.0),
            Some(d) => format!("{} m", d.round() as i64),
            None => MISSING_VALUE.to_string(),
        }
    }

    /// Walking time for display, e.g. "4 min" or "1 h 5 min".
    pub fn formatted_time(&self) -> String {
        let Some(duration) = self.duration else {
            return MISSING_VALUE.to_string();
        };
        let secs = duration.num_seconds().max(0);
        let mins = (secs + 59) / 60;
        if mins < 1 {
            "< 1 min".to_string()
        } else if mins < 60 {
            format!("{} min", mins)
        } else {
            format!("{} h {} min", mins / 60, mins % 60)
        }
    }

    /// Floors to show as chips: only for multi-floor routes.
    pub fn floor_chips(&self) -> &[FloorId] {
        if self.is_multi_floor {
            &self.involved_floors
        } else {
            &[]
        }
    }
}

/// Why the SDK could not compute a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteErrorKind {
    NoRouteFound,
    InvalidParameters,
    DataCorruption,
    RoutingUnavailable,
    Other(String),
}

impl RouteErrorKind {
    /// Human-readable message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            RouteErrorKind::NoRouteFound => {
                "No route found between selected locations. Please try different locations."
                    .to_string()
            }
            RouteErrorKind::InvalidParameters => {
                "Invalid route parameters. Please check your selections.".to_string()
            }
            RouteErrorKind::DataCorruption => "Route data is corrupted. Please try again.".to_string(),
            RouteErrorKind::RoutingUnavailable => {
                "Route system is not ready. Please try again.".to_string()
            }
            RouteErrorKind::Other(message) => format!("Route calculation failed: {}", message),
        }
    }
}

impl fmt::Display for RouteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteErrorKind::NoRouteFound => f.write_str("no route found"),
            RouteErrorKind::InvalidParameters => f.write_str("invalid parameters"),
            RouteErrorKind::DataCorruption => f.write_str("route data corruption"),
            RouteErrorKind::RoutingUnavailable => f.write_str("routing unavailable"),
            RouteErrorKind::Other(message) => write!(f, "other: {}", message),
        }
    }
}
