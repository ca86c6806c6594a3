//! Secondary text for locations: search result subtitles and the details
//! card description.

use crate::domain::{Floor, Location, label_for_floor_id};

/// Subtitle when a location has nothing to describe it.
pub const NO_DESCRIPTION: &str = "No description available";

/// Details card text when a location has nothing to describe it.
pub const DEFAULT_CARD_DESCRIPTION: &str = "Location details";

const SEPARATOR: &str = " • ";

/// Subtitle shown under a search result.
///
/// The description if present, otherwise "category • Floor: label • type"
/// built from whichever parts are available.
pub fn result_subtitle(location: &Location, floors: &[Floor]) -> String {
    if let Some(description) = location.non_blank_description() {
        return description.to_string();
    }

    let mut parts: Vec<String> = Vec::new();

    if let Some(name) = location
        .primary_category()
        .map(|c| c.name.as_str())
        .filter(|n| !n.is_empty())
    {
        parts.push(name.to_string());
    }

    if let Some(floor_id) = &location.floor_id {
        parts.push(format!("Floor: {}", label_for_floor_id(floors, floor_id)));
    }

    if let Some(kind) = &location.location_type {
        parts.push(kind.to_string());
    }

    if parts.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        parts.join(SEPARATOR)
    }
}

/// Description shown on the location details card.
pub fn card_description(location: &Location) -> String {
    if let Some(description) = location.non_blank_description() {
        return description.to_string();
    }

    if let Some(category) = location.primary_category() {
        return format!("Category: {}", category.name);
    }

    if let Some(amenity) = location.amenity.as_deref().filter(|a| !a.trim().is_empty()) {
        return format!("Amenity: {}", amenity);
    }

    DEFAULT_CARD_DESCRIPTION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, CategoryId, FloorId, LocationId, LocationType};

    fn loc() -> Location {
        Location::new(LocationId::parse("1").unwrap(), "Starbucks")
    }

    fn floors() -> Vec<Floor> {
        vec![
            Floor::new(FloorId::parse("g").unwrap()).with_elevation(0.0),
            Floor::new(FloorId::parse("l1").unwrap()).with_short_name("L1"),
        ]
    }

    #[test]
    fn subtitle_prefers_description() {
        let mut l = loc();
        l.description = Some("Coffee and snacks".into());
        l.floor_id = Some(FloorId::parse("g").unwrap());
        assert_eq!(result_subtitle(&l, &floors()), "Coffee and snacks");
    }

    #[test]
    fn subtitle_joins_available_parts() {
        let mut l = loc();
        l.categories = vec![Category::new(CategoryId::parse("food").unwrap(), "Food")];
        l.floor_id = Some(FloorId::parse("g").unwrap());
        l.location_type = Some(LocationType::Tenant);
        assert_eq!(result_subtitle(&l, &floors()), "Food • Floor: GF • TENANT");
    }

    #[test]
    fn subtitle_skips_missing_parts() {
        let mut l = loc();
        l.floor_id = Some(FloorId::parse("l1").unwrap());
        assert_eq!(result_subtitle(&l, &floors()), "Floor: L1");

        l.floor_id = Some(FloorId::parse("mezz").unwrap());
        assert_eq!(result_subtitle(&l, &floors()), "Floor: mezz");
    }

    #[test]
    fn subtitle_default() {
        assert_eq!(result_subtitle(&loc(), &floors()), NO_DESCRIPTION);
    }

    #[test]
    fn card_description_fallbacks() {
        let mut l = loc();
        assert_eq!(card_description(&l), "Location details");

        l.amenity = Some("toilets".into());
        assert_eq!(card_description(&l), "Amenity: toilets");

        l.categories = vec![Category::new(CategoryId::parse("food").unwrap(), "Food")];
        assert_eq!(card_description(&l), "Category: Food");

        l.description = Some("Open late".into());
        assert_eq!(card_description(&l), "Open late");
    }

    #[test]
    fn blank_amenity_is_ignored() {
        let mut l = loc();
        l.amenity = Some("  ".into());
        assert_eq!(card_description(&l), DEFAULT_CARD_DESCRIPTION);
    }
}
