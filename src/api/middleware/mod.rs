//! HTTP middleware for request processing and protection.
//!
//! Provides the admission gate and observability middleware.

pub mod admission;
pub mod tracing;
