//! Role-to-policy mapping for the admission layer.

use super::role::Role;

/// Rate policy for a single role.
///
/// `quota` is the request ceiling per 1-minute sliding window. `message` is
/// the per-role limit-exceeded text; the denial response uses a fixed
/// reason-specific message instead, so this field only reaches the warning
/// log (see `DESIGN.md`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatePolicy {
    pub quota: u32,
    pub message: &'static str,
}

/// Returns the rate policy for a role.
///
/// Pure lookup over a static table; the match is total over [`Role`], so
/// every role has exactly one policy by construction.
pub fn select_policy(role: Role) -> RatePolicy {
    match role {
        Role::Admin => RatePolicy {
            quota: 20,
            message: "You have reached the maximum number of admin requests",
        },
        Role::User => RatePolicy {
            quota: 10,
            message: "You have reached the maximum number of user requests",
        },
        Role::Guest => RatePolicy {
            quota: 5,
            message: "You have reached the maximum number of guest requests",
        },
    }
}
