//! Embedded web server for the dashboard.
//!
//! ## Endpoints
//!
//! - `GET /` - the dashboard page (controls + charts, rendered in the browser)
//! - `GET /api/health` - row and site counts
//! - `GET /api/controls` - dropdown options and slider bounds
//! - `GET /api/charts?site=ALL&low=0&high=10000` - pie + scatter descriptors
//!
//! The page calls `/api/charts` on every control change; each call is one
//! synchronous recomputation over the shared table.

mod routes;
mod types;

pub use routes::create_router;
pub use types::{ApiResponse, ApiState, ChartQuery, HealthResponse};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::dashboard::Dashboard;

pub fn create_state(dashboard: Dashboard) -> Arc<ApiState> {
    Arc::new(ApiState { dashboard })
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: SocketAddr, state: Arc<ApiState>) -> std::io::Result<()> {
    let app = create_router(state);
    let listener = TcpListener::bind(addr).await?;
    log::info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            log::info!("Shutting down");
        })
        .await
}
