//! SDK error types.

use std::path::PathBuf;

use crate::domain::{FloorId, LocationId};

use super::convert::ConversionError;

/// Errors returned by outbound SDK calls and venue loading.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The location is not in the SDK's current cache
    #[error("location not found in map cache: {0}")]
    LocationNotFound(LocationId),

    /// The floor is not part of the loaded site
    #[error("floor not found: {0}")]
    FloorNotFound(FloorId),

    /// The map has not finished loading
    #[error("map is not ready")]
    NotReady,

    /// Asked to display a route that was not calculated
    #[error("route index {index} out of range ({available} routes)")]
    RouteIndexOutOfRange { index: usize, available: usize },

    /// Venue data file could not be read
    #[error("failed to read venue data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Venue data is not valid JSON
    #[error("failed to parse venue data: {0}")]
    Json(#[from] serde_json::Error),

    /// Venue data is inconsistent
    #[error("invalid venue data: {0}")]
    Conversion(#[from] ConversionError),
}
