//! Caller roles and the authenticated-user request extension.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller classification used to select a rate policy.
///
/// Derived from the upstream authentication context. An anonymous request
/// has no role and is treated as [`Role::Guest`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    #[default]
    Guest,
}

impl Role {
    /// Parses a role string from the auth context, coercing unknown values
    /// to [`Role::Guest`].
    ///
    /// The upstream auth service owns the role vocabulary; anything this
    /// service does not recognize gets the most restrictive policy rather
    /// than failing the request.
    pub fn parse_or_guest(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            "user" => Self::User,
            "guest" => Self::Guest,
            other => {
                tracing::debug!("Unrecognized role '{}', treating as guest", other);
                Self::Guest
            }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Guest => "guest",
        };
        f.write_str(s)
    }
}

/// Authenticated caller identity, attached to the request as an extension by
/// the upstream auth middleware.
///
/// Its absence is a normal state and means the caller is a guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub role: Role,
}
