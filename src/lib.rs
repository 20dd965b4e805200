//! # Acquisitions API
//!
//! A minimal HTTP API skeleton with a request-admission layer, built with
//! Axum.
//!
//! ## Architecture
//!
//! The crate is layered the same way regardless of its small size:
//!
//! - **Domain Layer** ([`domain`]) - Roles, rate policies, rules, decisions
//! - **Infrastructure Layer** ([`infrastructure`]) - Decision service client
//! - **API Layer** ([`api`]) - Handlers, DTOs, and the admission middleware
//!
//! ## Admission flow
//!
//! Requests to the auth route group pass through the admission middleware:
//! the caller's role selects a per-minute quota, the request is evaluated by
//! an external decision service against bot, shield, and rate-limit rules,
//! and the middleware either forwards the request or answers with a
//! reason-specific `403 Forbidden`. Evaluation failures surface as `500`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point at a decision service; without it, all requests pass
//! export DECISION_SERVICE_URL="https://decide.example.com"
//! export DECISION_SERVICE_KEY="..."
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::{AuthUser, Decision, DenyReason, Role, SlidingWindowRule, select_policy};
    pub use crate::error::AppError;
    pub use crate::infrastructure::decision::{DecisionError, DecisionService};
    pub use crate::state::AppState;
}
