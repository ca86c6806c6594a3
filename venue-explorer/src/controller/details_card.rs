//! Bottom card showing the selected location.

use crate::domain::Location;
use crate::search::card_description;

#[derive(Debug, Clone, Default)]
pub struct LocationDetailsCard {
    location: Option<Location>,
}

impl LocationDetailsCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, location: Location) {
        self.location = Some(location);
    }

    /// Hide the card and forget its location.
    pub fn dismiss(&mut self) {
        self.location = None;
    }

    pub fn is_visible(&self) -> bool {
        self.location.is_some()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.name.as_str())
    }

    pub fn description(&self) -> Option<String> {
        self.location.as_ref().map(card_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationId;

    #[test]
    fn show_and_dismiss() {
        let mut card = LocationDetailsCard::new();
        assert!(!card.is_visible());

        let mut atm = Location::new(LocationId::parse("atm").unwrap(), "ATM");
        atm.amenity = Some("atm".into());
        card.show(atm);
        assert!(card.is_visible());
        assert_eq!(card.title(), Some("ATM"));
        assert_eq!(card.description().as_deref(), Some("Amenity: atm"));

        card.dismiss();
        assert!(!card.is_visible());
        assert!(card.location().is_none());
    }
}
