//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{debug, error};

use crate::domain::{CategoryId, FloorId, InvalidId, LocationId};
use crate::search::{SearchOutcome, filter_locations};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    Router::new()
        .route("/", get(map_page))
        .route("/health", get(health))
        .route("/search", get(search_page))
        .route("/search/open", post(open_search))
        .route("/search/select", post(select_location))
        .route("/search/cancel", post(cancel_search))
        .route("/search-bar/swap", post(swap_locations))
        .route("/floor-switcher/toggle", post(toggle_floor_switcher))
        .route("/floors/:id", post(select_floor))
        .route("/route/floors/:id", post(select_route_floor))
        .route("/route/close", post(close_route_info))
        .route("/card/navigate", post(navigate_from_card))
        .route("/card/dismiss", post(dismiss_card))
        .route("/map/tap", post(tap_map))
        .route("/api/search", get(api_search))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn render(template: impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

fn home() -> Redirect {
    Redirect::to("/")
}

/// The map screen.
async fn map_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut controller = state.controller.lock().await;
    controller.pump_events();
    render(MapTemplate::from_controller(&mut *controller))
}

/// The search screen. Query parameters update the open session.
async fn search_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let mut controller = state.controller.lock().await;
    let Some(session) = controller.search_session_mut() else {
        return Ok(home().into_response());
    };

    if let Some(q) = query.q {
        session.set_query(q);
    }
    if let Some(category) = query.category {
        session.select_category(parse_category(&category)?);
    }

    Ok(render(SearchTemplate::from_session(session))?.into_response())
}

async fn open_search(
    State(state): State<AppState>,
    Form(form): Form<OpenSearchForm>,
) -> Redirect {
    let mut controller = state.controller.lock().await;
    let opened = match form.target {
        OpenTarget::Search => controller.request_search(),
        OpenTarget::Speech => controller.request_speech(),
        OpenTarget::Source => controller.request_source(),
        OpenTarget::Destination => controller.request_destination(),
    };
    if opened { Redirect::to("/search") } else { home() }
}

async fn select_location(
    State(state): State<AppState>,
    Form(form): Form<SelectLocationForm>,
) -> Result<Redirect, AppError> {
    let id = LocationId::parse(&form.id)?;
    let mut controller = state.controller.lock().await;

    let Some(session) = controller.search_session() else {
        return Err(AppError::NotFound {
            message: "No search in progress".to_string(),
        });
    };
    let Some(outcome) = session.select(&id) else {
        return Ok(Redirect::to("/search"));
    };

    controller.complete_search(outcome);
    controller.pump_events();
    Ok(home())
}

async fn cancel_search(State(state): State<AppState>) -> Redirect {
    let mut controller = state.controller.lock().await;
    controller.complete_search(SearchOutcome::Cancelled);
    home()
}

async fn swap_locations(State(state): State<AppState>) -> Redirect {
    let mut controller = state.controller.lock().await;
    if !controller.swap_locations() {
        debug!("swap ignored outside routing mode");
    }
    home()
}

async fn toggle_floor_switcher(State(state): State<AppState>) -> Redirect {
    state.controller.lock().await.toggle_floor_switcher();
    home()
}

async fn select_floor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = FloorId::parse(&id)?;
    let mut controller = state.controller.lock().await;
    if !controller.select_floor(&id) {
        return Err(AppError::NotFound {
            message: format!("Floor {} not available", id),
        });
    }
    controller.pump_events();
    Ok(home())
}

async fn select_route_floor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let id = FloorId::parse(&id)?;
    let mut controller = state.controller.lock().await;
    controller.select_route_floor(&id);
    controller.pump_events();
    Ok(home())
}

async fn close_route_info(State(state): State<AppState>) -> Redirect {
    let mut controller = state.controller.lock().await;
    controller.close_route_info();
    controller.pump_events();
    home()
}

async fn navigate_from_card(State(state): State<AppState>) -> Redirect {
    let mut controller = state.controller.lock().await;
    if controller.navigate_from_card() {
        Redirect::to("/search")
    } else {
        home()
    }
}

async fn dismiss_card(State(state): State<AppState>) -> Redirect {
    let mut controller = state.controller.lock().await;
    controller.dismiss_card();
    controller.pump_events();
    home()
}

/// Simulate a tap on the map. Stands in for touch input on the rendered map.
async fn tap_map(
    State(state): State<AppState>,
    Form(form): Form<MapTapForm>,
) -> Result<Redirect, AppError> {
    let ids = form
        .id
        .filter(|id| !id.is_empty())
        .map(|id| LocationId::parse(&id))
        .transpose()?
        .into_iter()
        .collect::<Vec<_>>();

    let mut controller = state.controller.lock().await;
    controller.sdk_mut().tap(&ids);
    controller.pump_events();
    Ok(home())
}

/// Filter the cached locations without touching the search screen.
async fn api_search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let category = parse_category(query.category.as_deref().unwrap_or_default())?;
    let controller = state.controller.lock().await;

    let matches = filter_locations(
        controller.locations(),
        query.q.as_deref().unwrap_or_default(),
        category.as_ref(),
    );
    let results: Vec<LocationResult> = matches
        .iter()
        .map(|l| LocationResult::from_location(l, controller.floors()))
        .collect();

    Ok(Json(SearchResponse {
        empty: results.is_empty(),
        results,
    }))
}

/// Empty selects the "All" chip.
fn parse_category(raw: &str) -> Result<Option<CategoryId>, AppError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        Ok(Some(CategoryId::parse(raw)?))
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<InvalidId> for AppError {
    fn from(e: InvalidId) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
