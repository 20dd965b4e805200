#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use acquisitions_api::api::middleware::admission;
use acquisitions_api::api::routes::auth_routes;
use acquisitions_api::domain::{AuthUser, Decision, RequestContext, Role, SlidingWindowRule};
use acquisitions_api::infrastructure::decision::{DecisionError, DecisionResult, DecisionService};
use acquisitions_api::state::AppState;
use async_trait::async_trait;
use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
};

/// Decision service stub returning the same decision for every request.
pub struct FixedDecisions(pub Decision);

#[async_trait]
impl DecisionService for FixedDecisions {
    async fn evaluate(
        &self,
        _rule: &SlidingWindowRule,
        _request: &RequestContext,
    ) -> DecisionResult<Decision> {
        Ok(self.0)
    }
}

/// Decision service stub failing every evaluation with a protocol error.
pub struct FailingDecisions(pub String);

#[async_trait]
impl DecisionService for FailingDecisions {
    async fn evaluate(
        &self,
        _rule: &SlidingWindowRule,
        _request: &RequestContext,
    ) -> DecisionResult<Decision> {
        Err(DecisionError::Protocol(self.0.clone()))
    }
}

/// Decision service stub that records the rules and contexts it was handed.
pub struct RecordingDecisions {
    pub decision: Decision,
    pub rules: Mutex<Vec<SlidingWindowRule>>,
    pub contexts: Mutex<Vec<RequestContext>>,
}

impl RecordingDecisions {
    pub fn new(decision: Decision) -> Arc<Self> {
        Arc::new(Self {
            decision,
            rules: Mutex::new(Vec::new()),
            contexts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl DecisionService for RecordingDecisions {
    async fn evaluate(
        &self,
        rule: &SlidingWindowRule,
        request: &RequestContext,
    ) -> DecisionResult<Decision> {
        self.rules.lock().unwrap().push(rule.clone());
        self.contexts.lock().unwrap().push(request.clone());
        Ok(self.decision)
    }
}

/// Builds the auth route group behind the admission middleware, optionally
/// with an outer layer that attaches `AuthUser { role }` the way the
/// upstream auth populator would.
pub fn admission_app(decisions: Arc<dyn DecisionService>, role: Option<Role>) -> Router {
    let state = AppState::new(decisions);

    let mut auth = auth_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        admission::layer,
    ));

    if let Some(role) = role {
        // Outer layer so the identity is in place before admission runs.
        auth = auth.route_layer(middleware::from_fn(
            move |mut req: Request, next: Next| async move {
                req.extensions_mut().insert(AuthUser { role });
                next.run(req).await
            },
        ));
    }

    Router::new().nest("/api/auth", auth).with_state(state)
}
