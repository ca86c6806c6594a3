//! Identifier types for venue entities.
//!
//! The SDK hands out opaque string identifiers. We only require that they
//! are non-empty after trimming; everything else is the SDK's business.

use std::fmt;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {reason}")]
pub struct InvalidId {
    kind: &'static str,
    reason: &'static str,
}

fn validate(kind: &'static str, s: &str) -> Result<String, InvalidId> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(InvalidId {
            kind,
            reason: "must not be empty",
        });
    }
    if trimmed.len() != s.len() {
        return Err(InvalidId {
            kind,
            reason: "must not have leading or trailing whitespace",
        });
    }
    Ok(trimmed.to_string())
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Parse an identifier, rejecting blank or padded input.
            pub fn parse(s: &str) -> Result<Self, InvalidId> {
                validate($kind, s).map(Self)
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Stable identifier of a location (point of interest).
    ///
    /// ```
    /// use venue_explorer::domain::LocationId;
    ///
    /// let id = LocationId::parse("loc-42").unwrap();
    /// assert_eq!(id.as_str(), "loc-42");
    /// assert!(LocationId::parse("  ").is_err());
    /// ```
    LocationId,
    "location"
);

string_id!(
    /// Identifier of a category. The synthetic "All" filter has no id at all,
    /// so it is represented as `Option::<CategoryId>::None`, never as a value.
    CategoryId,
    "category"
);

string_id!(
    /// Identifier of a floor.
    FloorId,
    "floor"
);
