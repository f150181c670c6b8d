//! Integration tests for fetching the launch CSV over HTTP.
//!
//! A local axum server stands in for the remote dataset host.
//!
//! Run with: `cargo test --test fetch_integration`

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::net::TcpListener;

use launch_dash::data::loader::{fetch_csv, load_table, DataSource, LoadError};
use launch_dash::data::model::LaunchTable;

const FIXTURE: &str = include_str!("data/launches.csv");

/// Serve the fixture at `/launches.csv`; every other path is a 404.
async fn spawn_dataset_host() -> SocketAddr {
    let app = Router::new().route("/launches.csv", get(|| async { FIXTURE }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// The blocking client must run off the runtime workers.
async fn fetch(url: String) -> Result<LaunchTable, LoadError> {
    tokio::task::spawn_blocking(move || fetch_csv(&url))
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn fetches_and_parses_the_dataset() {
    let addr = spawn_dataset_host().await;

    let table = fetch(format!("http://{addr}/launches.csv")).await.unwrap();
    assert_eq!(table.len(), 18);
    assert_eq!(table.launch_sites().len(), 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn url_sources_go_through_the_http_client() {
    let addr = spawn_dataset_host().await;
    let source = DataSource::parse(&format!("http://{addr}/launches.csv"));
    assert!(matches!(source, DataSource::Url(_)));

    let table = tokio::task::spawn_blocking(move || load_table(&source))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(table.len(), 18);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn missing_resource_is_a_status_error() {
    let addr = spawn_dataset_host().await;

    let err = fetch(format!("http://{addr}/missing.csv")).await.unwrap_err();
    match err {
        LoadError::Status { status, url } => {
            assert_eq!(status.as_u16(), 404);
            assert!(url.ends_with("/missing.csv"));
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unreachable_host_is_an_http_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetch(format!("http://{addr}/launches.csv")).await.unwrap_err();
    assert!(matches!(err, LoadError::Http { .. }), "got {err:?}");
}
