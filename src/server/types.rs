//! API types and DTOs.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::dashboard::Dashboard;

/// Shared, read-only state for every request.
pub struct ApiState {
    pub dashboard: Dashboard,
}

/// Response wrapper with timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    /// Unix timestamp in milliseconds.
    pub timestamp: u64,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self { data, timestamp }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub rows: usize,
    pub sites: usize,
}

/// Query string of `GET /api/charts`. Missing values fall back to the
/// dropdown default (`ALL`) and the slider's initial range.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartQuery {
    pub site: Option<String>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}
