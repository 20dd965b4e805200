//! Handler for the root greeting.

use tracing::info;

/// Returns the service greeting.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> &'static str {
    info!("Hello from Acquisitions API");
    "Hello from Acquisitions API"
}
