use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use venue_explorer::config::AppConfig;
use venue_explorer::controller::MapController;
use venue_explorer::sdk::MockVenueSdk;
use venue_explorer::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("venue_explorer=info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let sdk = MockVenueSdk::from_file(&config.data_path).expect("Failed to load venue data");
    let mut controller = MapController::new(sdk);
    controller
        .load_site(&config.site_id)
        .expect("Failed to start site load");
    if let Some(e) = controller.init_error() {
        error!(error = e, "map initialisation failed; serving without venue data");
    }

    let addr = config.bind_addr;
    let state = AppState::new(controller, config);
    let app = create_router(state);

    info!("Venue Explorer listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET  /health      - Health check");
    info!("  GET  /api/search  - Filter locations (?q=&category=)");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");
    axum::serve(listener, app).await.expect("Server error");
}
