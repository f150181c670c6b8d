//! Route handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::dashboard::{ChartSet, Controls};
use crate::data::filter::{PayloadRange, SiteSelection};

use super::types::{ApiResponse, ApiState, ChartQuery, HealthResponse};

/// Dashboard page; fetches controls once, then charts on every change.
const INDEX_HTML: &str = include_str!("index.html");

/// Create the router with the page and all API endpoints.
pub fn create_router(state: Arc<ApiState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/controls", get(controls_handler))
        .route("/api/charts", get(charts_handler))
        .layer(cors)
        .with_state(state)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler for GET /api/health
async fn health_handler(State(state): State<Arc<ApiState>>) -> Json<ApiResponse<HealthResponse>> {
    let table = state.dashboard.table();
    Json(ApiResponse::new(HealthResponse {
        status: "ok".to_string(),
        rows: table.len(),
        sites: table.launch_sites().len(),
    }))
}

/// Handler for GET /api/controls
async fn controls_handler(State(state): State<Arc<ApiState>>) -> Json<ApiResponse<Controls>> {
    Json(ApiResponse::new(state.dashboard.controls()))
}

/// Handler for GET /api/charts
async fn charts_handler(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ChartQuery>,
) -> Json<ApiResponse<ChartSet>> {
    let site = query
        .site
        .as_deref()
        .map(SiteSelection::from_value)
        .unwrap_or_default();
    let initial = state.dashboard.initial_range();
    let range = PayloadRange::new(
        query.low.unwrap_or(initial.low),
        query.high.unwrap_or(initial.high),
    );

    let charts = state.dashboard.update_charts(&site, &range);
    log::info!(
        "charts site={} payload=[{}, {}] rows={}",
        site.value(),
        range.low,
        range.high,
        charts.selected_rows
    );
    Json(ApiResponse::new(charts))
}
