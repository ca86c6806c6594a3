//! Boundary with the external mapping SDK.
//!
//! The application talks to the SDK through [`VenueSdk`] and hears back
//! through [`SdkEvent`]s. [`MockVenueSdk`] serves a venue from a JSON file.

mod client;
mod convert;
mod error;
mod events;
mod mock;
pub mod types;

pub use client::VenueSdk;
pub use convert::{ConversionError, RouteKey, Venue, convert_venue};
pub use error::SdkError;
pub use events::{EventBus, SdkEvent, SdkEventHandler};
pub use mock::{INIT_EMPTY_SITE, INIT_UNKNOWN_SITE, MockVenueSdk};
