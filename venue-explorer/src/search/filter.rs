//! Location filtering by free text and category.
//!
//! This is the whole search engine: one linear pass over the site's
//! locations. Location counts per venue are small, so every keystroke simply
//! recomputes the result from scratch.

use crate::domain::{CategoryId, Location};

/// Whether a location's name contains the query, case-insensitively.
///
/// An empty query matches everything. No tokenization or fuzzy matching.
pub fn matches_query(location: &Location, query: &str) -> bool {
    matches_lowercase(location, &query.to_lowercase())
}

/// `needle` must already be lower-cased.
fn matches_lowercase(location: &Location, needle: &str) -> bool {
    needle.is_empty() || location.name.to_lowercase().contains(needle)
}

/// Whether a location belongs to the selected category.
///
/// `None` is the "All" filter and matches everything.
pub fn matches_category(location: &Location, category: Option<&CategoryId>) -> bool {
    match category {
        None => true,
        Some(id) => location.has_category(id),
    }
}

/// Filter locations by query and category, preserving input order.
///
/// Returns an empty result when the location set has not been loaded yet.
///
/// ```
/// use venue_explorer::domain::{Location, LocationId};
/// use venue_explorer::search::filter_locations;
///
/// let all = vec![
///     Location::new(LocationId::parse("1").unwrap(), "Starbucks"),
///     Location::new(LocationId::parse("2").unwrap(), "Nike Store"),
/// ];
/// let found = filter_locations(Some(all.as_slice()), "sta", None);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id.as_str(), "1");
/// ```
pub fn filter_locations(
    all: Option<&[Location]>,
    query: &str,
    category: Option<&CategoryId>,
) -> Vec<Location> {
    let Some(all) = all else {
        return Vec::new();
    };

    // Lower-case once rather than per location
    let needle = query.to_lowercase();

    all.iter()
        .filter(|loc| matches_lowercase(loc, &needle))
        .filter(|loc| matches_category(loc, category))
        .cloned()
        .collect()
}
