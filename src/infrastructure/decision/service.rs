//! Decision service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Decision, RequestContext, SlidingWindowRule};

/// Errors that can occur while evaluating a request.
///
/// Every variant is terminal for the current request: the admission layer
/// performs no retries and surfaces the failure as a 500.
#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("decision service transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("decision service protocol error: {0}")]
    Protocol(String),
}

/// Result type for decision evaluations.
pub type DecisionResult<T> = Result<T, DecisionError>;

/// Trait for evaluating a request against an admission rule.
///
/// Implementations must be thread-safe; the evaluation is the only await
/// point in the admission path, so a slow backend stalls one request's task
/// without blocking others.
///
/// # Implementations
///
/// - [`crate::infrastructure::decision::HttpDecisionClient`] - remote decision service over HTTP
/// - [`crate::infrastructure::decision::AllowAllDecisions`] - no-op fallback when no service is configured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DecisionService: Send + Sync {
    /// Evaluates a request against a sliding-window rule.
    ///
    /// Returns the service's classified decision: allowed, or denied for one
    /// of bot, shield, or rate-limit.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError`] when the service is unreachable or responds
    /// outside the expected protocol. Denials are not errors.
    async fn evaluate(
        &self,
        rule: &SlidingWindowRule,
        request: &RequestContext,
    ) -> DecisionResult<Decision>;
}
