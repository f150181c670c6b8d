//! Integration tests for the dashboard HTTP API.
//!
//! Run with: `cargo test --test api_integration`

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use launch_dash::color::Rgb;
use launch_dash::config::SliderConfig;
use launch_dash::dashboard::{ChartSet, Controls, Dashboard};
use launch_dash::data::loader::parse_csv;
use launch_dash::server::{create_router, create_state, ApiResponse};

const FIXTURE: &str = include_str!("data/launches.csv");

fn create_test_router() -> Router {
    let table = parse_csv(FIXTURE.as_bytes()).unwrap();
    create_router(create_state(Dashboard::new(table, SliderConfig::default())))
}

/// Helper to make a GET request; bodies that are not JSON come back as null.
async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(json!(null));

    (status, json)
}

/// Fetch `/api/charts` and decode it back into the descriptor types.
async fn get_charts(router: &Router, uri: &str) -> ChartSet {
    let (status, body) = get(router, uri).await;
    assert_eq!(status, StatusCode::OK);
    let response: ApiResponse<ChartSet> = serde_json::from_value(body).unwrap();
    response.data
}

#[tokio::test]
async fn health_reports_table_size() {
    let router = create_test_router();
    let (status, body) = get(&router, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["rows"], 18);
    assert_eq!(body["data"]["sites"], 4);
    assert!(body["timestamp"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn controls_list_sites_after_the_all_entry() {
    let router = create_test_router();
    let (status, body) = get(&router, "/api/controls").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["site_dropdown"]["options"][0],
        json!({"label": "All Sites", "value": "ALL"})
    );

    let response: ApiResponse<Controls> = serde_json::from_value(body).unwrap();
    let controls = response.data;
    assert_eq!(controls.title, "SpaceX Launch Records Dashboard");
    assert_eq!(controls.site_dropdown.options.len(), 5);
    assert_eq!(controls.payload_slider.value, [0.0, 9600.0]);
    assert_eq!(controls.payload_slider.marks.len(), 11);
}

#[tokio::test]
async fn default_chart_query_covers_every_row() {
    let router = create_test_router();
    let charts = get_charts(&router, "/api/charts").await;

    assert_eq!(charts.pie.title, "Total Success by Launch Sites");
    assert_eq!(charts.pie.slices.len(), 4);
    assert_eq!(charts.pie.total(), 8.0);
    assert_eq!(charts.scatter.point_count(), 18);
    assert_eq!(charts.selected_rows, 18);
}

#[tokio::test]
async fn site_query_returns_success_rate() {
    let router = create_test_router();
    let charts = get_charts(&router, "/api/charts?site=KSC%20LC-39A&low=0&high=10000").await;

    assert_eq!(charts.pie.title, "Success Rate by Chosen Site");
    assert_eq!(charts.pie.slices[0].label, "Success");
    assert_eq!(charts.pie.slices[0].value, 0.75);
    assert!((charts.pie.total() - 1.0).abs() < 1e-12);
    assert_eq!(charts.pie.slices[0].color, Rgb::SUCCESS);
    assert_eq!(charts.scatter.point_count(), 4);
}

#[tokio::test]
async fn hover_labels_survive_the_wire() {
    let router = create_test_router();
    let charts = get_charts(&router, "/api/charts?site=VAFB%20SLC-4E").await;

    assert_eq!(
        charts.scatter.labels_at("FT", 9600.0, 1.0),
        ["Flight 36: F9 FT B1036.1", "Flight 44: F9 FT B1036.2"]
    );
}

#[tokio::test]
async fn range_excluding_everything_gives_empty_charts() {
    let router = create_test_router();
    let charts = get_charts(&router, "/api/charts?site=ALL&low=9700&high=10000").await;

    assert!(charts.pie.slices.is_empty());
    assert_eq!(charts.scatter.point_count(), 0);
}

#[tokio::test]
async fn malformed_bound_is_a_bad_request() {
    let router = create_test_router();
    let (status, _) = get(&router, "/api/charts?low=heavy").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn index_serves_the_dashboard_page() {
    let router = create_test_router();
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("site-dropdown"));
    assert!(html.contains("/api/charts"));
}
