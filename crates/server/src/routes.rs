use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use rail_atlas_core::map::MapFigure;
use rail_atlas_core::plot::{DestinationChoice, ScheduleTable};
use rail_atlas_core::{Dashboard, PlotError};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(dashboard: Dashboard) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/states", get(states))
        .route("/api/stations", get(stations))
        .route("/api/trains", get(trains))
        .route("/api/trains/from-stations", get(from_stations))
        .route("/api/trains/destinations", get(destinations))
        .route("/api/trains/map", get(train_map))
        .route("/api/trains/schedule", get(schedule))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(dashboard)
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Deserialize)]
struct StationsQuery {
    #[serde(default)]
    state: String,
    #[serde(default)]
    boundary: bool,
}

#[derive(Debug, Deserialize)]
struct FromQuery {
    #[serde(default)]
    from: String,
}

#[derive(Debug, Deserialize)]
struct TrainsQuery {
    #[serde(default)]
    from: String,
    #[serde(default)]
    to: String,
    #[serde(default = "show_stops_by_default")]
    stops: bool,
}

fn show_stops_by_default() -> bool {
    true
}

// ============================================================================
// Errors
// ============================================================================

struct ApiError(PlotError);

impl From<PlotError> for ApiError {
    fn from(err: PlotError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            PlotError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            PlotError::AmbiguousSelection => StatusCode::BAD_REQUEST,
        };
        tracing::debug!(%status, err = %self.0, "request rejected");

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> &'static str {
    "OK"
}

async fn states(State(dashboard): State<Dashboard>) -> Json<&'static [&'static str]> {
    Json(dashboard.states())
}

async fn stations(
    State(dashboard): State<Dashboard>,
    Query(query): Query<StationsQuery>,
) -> Response {
    match dashboard.stations_panel(&query.state, query.boundary) {
        Some(panel) => Json(panel).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn from_stations(State(dashboard): State<Dashboard>) -> Json<Vec<String>> {
    Json(dashboard.from_stations())
}

async fn destinations(
    State(dashboard): State<Dashboard>,
    Query(query): Query<FromQuery>,
) -> Json<DestinationChoice> {
    Json(dashboard.destinations(&query.from))
}

async fn trains(State(dashboard): State<Dashboard>, Query(query): Query<TrainsQuery>) -> Response {
    Json(dashboard.trains_panel(&query.from, &query.to, query.stops)).into_response()
}

async fn train_map(
    State(dashboard): State<Dashboard>,
    Query(query): Query<TrainsQuery>,
) -> Result<Json<MapFigure>, ApiError> {
    Ok(Json(dashboard.route_map(&query.from, &query.to, query.stops)?))
}

async fn schedule(
    State(dashboard): State<Dashboard>,
    Query(query): Query<TrainsQuery>,
) -> Result<Json<ScheduleTable>, ApiError> {
    Ok(Json(dashboard.schedule(&query.from, &query.to)?))
}
