//! Role-based admission middleware.
//!
//! Gates a route group behind the external decision service: every request
//! is evaluated against its caller's sliding-window quota plus the service's
//! bot and shield rules before it reaches a handler.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use tracing::{error, warn};

use crate::domain::{
    AuthUser, Decision, DenyReason, RequestContext, SlidingWindowRule, select_policy,
};
use crate::error::AppError;
use crate::state::AppState;

/// Admits or rejects a request before it reaches downstream handlers.
///
/// # Flow
///
/// 1. Read the caller role from the [`AuthUser`] request extension set by
///    the upstream auth layer; an absent extension means guest.
/// 2. Select the role's policy and build the `{role}-rate-limit` rule
///    (1-minute sliding window, LIVE mode, policy quota).
/// 3. Evaluate via the decision service. This is the only await point;
///    other requests proceed while this one waits.
/// 4. Forward on allow, or respond with the reason-specific 403. Any
///    evaluation failure becomes a 500 carrying the failure detail.
///
/// Exactly one response is produced per request, and nothing is logged on
/// the allow path (the trace layer logs all requests separately).
///
/// # Example
///
/// ```rust,ignore
/// let auth = auth_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), admission::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let role = req
        .extensions()
        .get::<AuthUser>()
        .map(|user| user.role)
        .unwrap_or_default();

    let policy = select_policy(role);
    let rule = SlidingWindowRule::live(role, policy.quota);
    let ctx = request_context(&req);

    match st.decisions.evaluate(&rule, &ctx).await {
        Ok(Decision::Deny(DenyReason::Bot)) => {
            warn!(
                ip = %ctx.ip,
                user_agent = ctx.user_agent.as_deref().unwrap_or("-"),
                path = %ctx.path,
                "Blocked request from bot"
            );
            AppError::forbidden("Automated requests are not allowed").into_response()
        }
        Ok(Decision::Deny(DenyReason::Shield)) => {
            warn!(
                ip = %ctx.ip,
                user_agent = ctx.user_agent.as_deref().unwrap_or("-"),
                path = %ctx.path,
                method = %ctx.method,
                "Request blocked by shield"
            );
            AppError::forbidden("Requests blocked by shield").into_response()
        }
        Ok(Decision::Deny(DenyReason::RateLimit)) => {
            warn!(
                ip = %ctx.ip,
                user_agent = ctx.user_agent.as_deref().unwrap_or("-"),
                path = %ctx.path,
                method = %ctx.method,
                limit_message = policy.message,
                "Rate limit exceeded"
            );
            AppError::forbidden("Requests blocked by rate limit").into_response()
        }
        Ok(Decision::Allow) => next.run(req).await,
        Err(e) => {
            error!("Admission evaluation failed: {e}");
            AppError::internal(e.to_string()).into_response()
        }
    }
}

/// Collects the request facts sent to the decision service and the logs.
///
/// The peer IP comes from connect info when the server was started with it;
/// `"unknown"` otherwise (e.g. in-process test transports).
fn request_context(req: &Request) -> RequestContext {
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    RequestContext {
        ip,
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        user_agent,
    }
}
