//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Greeting (public)
//! - `GET  /health`      - Liveness with uptime (public)
//! - `GET  /api`         - API status banner (public)
//! - `POST /api/auth/*`  - Auth route group, behind the admission middleware
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging on every route
//! - **Admission** - Role-quota, bot, and shield checks on the auth group
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{api_status_handler, health_handler, root_handler};
use crate::api::middleware::{admission, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Routes registered inside the `/api/auth` nest pass through the admission
/// middleware; everything else is served directly.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let auth_router = api::routes::auth_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        admission::layer,
    ));

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api", get(api_status_handler))
        .nest("/api/auth", auth_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
