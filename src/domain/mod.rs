//! Core domain types for request admission.
//!
//! This layer is framework-free: roles, policies, rules, and decisions are
//! plain values so they can be exercised without a running server.

pub mod context;
pub mod decision;
pub mod policy;
pub mod role;

pub use context::RequestContext;
pub use decision::{Decision, DenyReason, RuleMode, SlidingWindowRule};
pub use policy::{RatePolicy, select_policy};
pub use role::{AuthUser, Role};
