//! Response DTOs.

pub mod health;
pub mod status;
