//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service liveness with timestamp and uptime.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "OK",
///   "timestamp": "2025-01-01T12:00:00.000Z",
///   "uptime": 42.5
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}
