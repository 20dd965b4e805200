//! Decision and rule types exchanged with the decision service.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Why a request was denied admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    Bot,
    Shield,
    RateLimit,
}

/// Outcome of evaluating a request against a rule.
///
/// Constructed once per request by the decision service and consumed exactly
/// once by the admission middleware; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Deny(_))
    }
}

/// Rule evaluation mode.
///
/// `Live` enforces the rule; `DryRun` evaluates it but never denies, useful
/// when rolling out a new quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleMode {
    Live,
    DryRun,
}

/// A sliding-window rate rule built per request from the caller's policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlidingWindowRule {
    pub name: String,
    pub mode: RuleMode,
    pub max_requests: u32,
    pub interval_seconds: u64,
}

impl SlidingWindowRule {
    /// Builds the enforcing `{role}-rate-limit` rule over a fixed 1-minute
    /// window with the given request ceiling.
    pub fn live(role: Role, max_requests: u32) -> Self {
        Self {
            name: format!("{role}-rate-limit"),
            mode: RuleMode::Live,
            max_requests,
            interval_seconds: 60,
        }
    }
}
