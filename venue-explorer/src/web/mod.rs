//! Web layer for the venue explorer.
//!
//! Serves the map and search screens as HTML pages driven by form posts,
//! plus a JSON search endpoint.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
