//! Decision service trait and implementations.

pub mod allow_all;
pub mod http_client;
pub mod service;

pub use allow_all::AllowAllDecisions;
pub use http_client::HttpDecisionClient;
pub use service::{DecisionError, DecisionResult, DecisionService};

#[cfg(test)]
pub use service::MockDecisionService;
