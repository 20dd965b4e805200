//! External integrations.
//!
//! The only collaborator of this skeleton is the decision service that
//! evaluates bot, shield, and rate-limit rules.

pub mod decision;
