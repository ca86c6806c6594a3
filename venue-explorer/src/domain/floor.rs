//! Floors and the floor display-name resolver.
//!
//! The floor switcher, route floor chips and search result subtitles all
//! label floors through [`floor_label`] and [`label_for_floor_id`]; there is
//! no other place that derives a floor label.

use super::FloorId;

/// Label for a known floor with no usable metadata.
pub const UNKNOWN_FLOOR_LABEL: &str = "?";

/// One level of a building.
#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    pub id: FloorId,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub elevation: Option<f64>,
}

impl Floor {
    /// Create a floor with only an id.
    pub fn new(id: FloorId) -> Self {
        Self {
            id,
            name: None,
            short_name: None,
            elevation: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = Some(elevation);
        self
    }

    /// Short human-readable label. See [`floor_label`].
    pub fn label(&self) -> String {
        floor_label(self)
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Label derived from elevation alone, or `None` if elevation is absent or
/// not a finite number.
///
/// Rounds half away from zero on the magnitude.
pub fn elevation_label(elevation: Option<f64>) -> Option<String> {
    let e = elevation.filter(|e| e.is_finite())?;
    let label = if e == 0.0 {
        "GF".to_string()
    } else if e > 0.0 {
        format!("F{}", e.round() as i64)
    } else {
        format!("B{}", e.abs().round() as i64)
    };
    Some(label)
}

/// Resolve a short label for a floor.
///
/// First non-empty of: short name (trimmed), name (trimmed), elevation label,
/// then `"?"`.
///
/// ```
/// use venue_explorer::domain::{Floor, FloorId, floor_label};
///
/// let basement = Floor::new(FloorId::parse("b1").unwrap()).with_elevation(-1.0);
/// assert_eq!(floor_label(&basement), "B1");
///
/// let named = Floor::new(FloorId::parse("l2").unwrap()).with_short_name(" L2 ");
/// assert_eq!(floor_label(&named), "L2");
/// ```
pub fn floor_label(floor: &Floor) -> String {
    non_blank(floor.short_name.as_deref())
        .or_else(|| non_blank(floor.name.as_deref()))
        .map(str::to_string)
        .or_else(|| elevation_label(floor.elevation))
        .unwrap_or_else(|| UNKNOWN_FLOOR_LABEL.to_string())
}

/// Resolve a label for a floor referenced by id.
///
/// Known floors use [`floor_label`]; ids that match no known floor are
/// shown verbatim.
pub fn label_for_floor_id(floors: &[Floor], id: &FloorId) -> String {
    floors
        .iter()
        .find(|f| &f.id == id)
        .map(floor_label)
        .unwrap_or_else(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(id: &str) -> Floor {
        Floor::new(FloorId::parse(id).unwrap())
    }

    #[test]
    fn short_name_wins() {
        let f = floor("f1").with_short_name("L1").with_name("Level One");
        assert_eq!(floor_label(&f), "L1");
    }

    #[test]
    fn blank_short_name_falls_back_to_name() {
        let f = floor("f1").with_short_name("   ").with_name(" Level One ");
        assert_eq!(floor_label(&f), "Level One");
    }

    #[test]
    fn elevation_fallbacks() {
        assert_eq!(floor_label(&floor("a").with_elevation(-1.0)), "B1");
        assert_eq!(floor_label(&floor("b").with_elevation(2.0)), "F2");
        assert_eq!(floor_label(&floor("c").with_elevation(0.0)), "GF");
        assert_eq!(floor_label(&floor("d").with_elevation(-0.0)), "GF");
    }

    #[test]
    fn elevation_rounds_half_away_from_zero() {
        assert_eq!(floor_label(&floor("a").with_elevation(2.5)), "F3");
        assert_eq!(floor_label(&floor("b").with_elevation(-2.5)), "B3");
        assert_eq!(floor_label(&floor("c").with_elevation(1.4)), "F1");
        assert_eq!(floor_label(&floor("d").with_elevation(0.3)), "F0");
    }

    #[test]
    fn nothing_known_is_question_mark() {
        assert_eq!(floor_label(&floor("f9")), "?");
        assert_eq!(floor_label(&floor("f9").with_name("  ")), "?");
    }

    #[test]
    fn non_finite_elevation_is_absent() {
        assert_eq!(floor_label(&floor("x").with_elevation(f64::NAN)), "?");
        assert_eq!(floor_label(&floor("y").with_elevation(f64::INFINITY)), "?");
    }

    #[test]
    fn lookup_by_id() {
        let floors = vec![floor("g").with_elevation(0.0), floor("l1").with_short_name("L1")];

        assert_eq!(label_for_floor_id(&floors, &FloorId::parse("g").unwrap()), "GF");
        assert_eq!(label_for_floor_id(&floors, &FloorId::parse("l1").unwrap()), "L1");
        assert_eq!(
            label_for_floor_id(&floors, &FloorId::parse("roof").unwrap()),
            "roof"
        );
    }
}
