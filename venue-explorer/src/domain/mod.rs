//! Domain types for the venue explorer.
//!
//! This module contains the venue model as the mapping SDK delivers it:
//! locations, categories, floors and route summaries. Identifiers are
//! validated at construction time, so code that receives them can trust them.

mod category;
mod error;
mod floor;
mod ids;
mod location;
mod route;
mod site;

pub use category::{Category, CategoryIcon};
pub use error::DomainError;
pub use floor::{Floor, UNKNOWN_FLOOR_LABEL, elevation_label, floor_label, label_for_floor_id};
pub use ids::{CategoryId, FloorId, InvalidId, LocationId};
pub use location::{Location, LocationType};
pub use route::{MISSING_VALUE, Route, RouteErrorKind};
pub use site::{Building, Site};
