//! Handler for the API status banner.

use axum::Json;

use crate::api::dto::status::ApiStatusResponse;

/// Reports that the API is up.
///
/// # Endpoint
///
/// `GET /api`
pub async fn api_status_handler() -> Json<ApiStatusResponse> {
    Json(ApiStatusResponse {
        status: "Aquisitions API is running".to_string(),
    })
}
