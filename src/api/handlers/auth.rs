//! Skeleton handlers for the authentication route group.
//!
//! Credential handling lives in a separate auth service; these responders
//! keep the route group observable so the admission middleware in front of
//! it can be exercised end to end.

/// `POST /api/auth/sign-up`
pub async fn sign_up_handler() -> &'static str {
    "POST /api/auth/sign-up response"
}

/// `POST /api/auth/sign-in`
pub async fn sign_in_handler() -> &'static str {
    "POST /api/auth/sign-in response"
}

/// `POST /api/auth/sign-out`
pub async fn sign_out_handler() -> &'static str {
    "POST /api/auth/sign-out response"
}
