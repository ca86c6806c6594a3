//! Location search for the search screen.
//!
//! Free-text substring matching combined with a category filter, the chip
//! selector that drives the filter, and the session that carries the working
//! set in and the chosen location out.

mod chips;
mod describe;
mod filter;
mod session;
mod state;

pub use chips::{ALL_CATEGORIES_LABEL, CategoryChips};
pub use describe::{DEFAULT_CARD_DESCRIPTION, NO_DESCRIPTION, card_description, result_subtitle};
pub use filter::{filter_locations, matches_category, matches_query};
pub use session::{SearchContext, SearchIntent, SearchOutcome, SearchSession};
pub use state::{SearchState, SearchView};
