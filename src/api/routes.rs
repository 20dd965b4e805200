//! Auth route group configuration.
//!
//! Every route here sits behind the admission middleware when composed by
//! [`crate::routes::app_router`].

use crate::api::handlers::{sign_in_handler, sign_out_handler, sign_up_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Authentication routes, gated by the admission middleware.
///
/// # Endpoints
///
/// - `POST /sign-up`  - Account registration
/// - `POST /sign-in`  - Session creation
/// - `POST /sign-out` - Session teardown
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up_handler))
        .route("/sign-in", post(sign_in_handler))
        .route("/sign-out", post(sign_out_handler))
}
