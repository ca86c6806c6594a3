//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::controller::MapController;
use crate::sdk::MockVenueSdk;

/// Shared application state.
///
/// The map screen is one sequential UI context, so every request takes the
/// controller lock for its whole transition.
#[derive(Clone)]
pub struct AppState {
    /// Map screen controller backed by the mock SDK
    pub controller: Arc<Mutex<MapController<MockVenueSdk>>>,

    /// Server configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(controller: MapController<MockVenueSdk>, config: AppConfig) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
            config: Arc::new(config),
        }
    }
}
