//! DTO for the API status endpoint.

use serde::Serialize;

/// API status banner returned by `GET /api`.
#[derive(Debug, Serialize)]
pub struct ApiStatusResponse {
    pub status: String,
}
