//! HTTP request handlers.

pub mod auth;
pub mod health;
pub mod root;
pub mod status;

pub use auth::{sign_in_handler, sign_out_handler, sign_up_handler};
pub use health::health_handler;
pub use root::root_handler;
pub use status::api_status_handler;
