//! Per-request metadata passed to the decision service and the logs.

use serde::Serialize;

/// Read-only request facts used for policy evaluation and denial logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestContext {
    /// Peer IP, or `"unknown"` when connect info is unavailable.
    pub ip: String,
    pub method: String,
    pub path: String,
    pub user_agent: Option<String>,
}
