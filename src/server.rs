//! HTTP server initialization and runtime setup.
//!
//! Handles decision client selection, router construction, and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::infrastructure::decision::{AllowAllDecisions, DecisionService, HttpDecisionClient};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Decision service client (or AllowAllDecisions fallback)
/// - Axum HTTP server with connect info for peer-IP logging
///
/// # Errors
///
/// Returns an error if:
/// - The decision client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let decisions: Arc<dyn DecisionService> = if let Some(url) = &config.decision_service_url {
        let client = HttpDecisionClient::new(url.as_str(), config.decision_service_key.clone())?;
        tracing::info!("Admission checks enabled");
        Arc::new(client)
    } else {
        tracing::warn!("DECISION_SERVICE_URL not set; all requests will be admitted");
        Arc::new(AllowAllDecisions::new())
    };

    let state = AppState::new(decisions);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
