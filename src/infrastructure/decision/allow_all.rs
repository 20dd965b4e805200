//! No-op decision service for development and tests.

use async_trait::async_trait;
use tracing::debug;

use super::service::{DecisionResult, DecisionService};
use crate::domain::{Decision, RequestContext, SlidingWindowRule};

/// A decision service that admits every request.
///
/// Used when no decision service is configured, so the skeleton stays
/// runnable locally without the external dependency. Never use in an
/// environment that relies on bot or rate-limit protection.
pub struct AllowAllDecisions;

impl AllowAllDecisions {
    pub fn new() -> Self {
        debug!("Using AllowAllDecisions (admission checks disabled)");
        Self
    }
}

impl Default for AllowAllDecisions {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecisionService for AllowAllDecisions {
    async fn evaluate(
        &self,
        _rule: &SlidingWindowRule,
        _request: &RequestContext,
    ) -> DecisionResult<Decision> {
        Ok(Decision::Allow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[tokio::test]
    async fn test_always_allows() {
        let decisions = AllowAllDecisions::new();
        let rule = SlidingWindowRule::live(Role::Guest, 5);
        let ctx = RequestContext {
            ip: "127.0.0.1".to_string(),
            method: "GET".to_string(),
            path: "/api/auth/sign-in".to_string(),
            user_agent: None,
        };

        let decision = decisions.evaluate(&rule, &ctx).await.unwrap();
        assert_eq!(decision, Decision::Allow);
    }
}
