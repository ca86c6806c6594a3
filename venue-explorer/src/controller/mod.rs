//! Map screen controller and its on-screen components.

mod details_card;
mod floor_switcher;
mod map;
mod notice;
mod route_info;

#[cfg(test)]
mod controller_tests;

pub use details_card::LocationDetailsCard;
pub use floor_switcher::{FloorEntry, FloorSwitcher};
pub use map::{
    CALCULATING_ROUTE, FLOOR_NOT_FOUND, FLOOR_SWITCH_FAILED, MAP_NOT_READY, MapController,
    ROUTE_REQUEST_FAILED,
};
pub use notice::{Notice, NoticeLevel};
pub use route_info::{FloorChip, RouteInfoBar, UNKNOWN_DESTINATION};
