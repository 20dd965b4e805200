//! DTO for the health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
    /// Seconds since process start.
    pub uptime: f64,
}
