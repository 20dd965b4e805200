//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DECISION_SERVICE_URL` - Base URL of the decision service; when unset,
//!   admission checks are disabled and every request is allowed
//! - `DECISION_SERVICE_KEY` - Optional bearer credential for the decision
//!   service

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Decision service endpoint. `None` disables admission checks.
    pub decision_service_url: Option<String>,
    /// Bearer credential sent to the decision service on every evaluation.
    pub decision_service_key: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let decision_service_url = env::var("DECISION_SERVICE_URL").ok();
        let decision_service_key = env::var("DECISION_SERVICE_KEY").ok();

        Self {
            listen_addr,
            log_level,
            log_format,
            decision_service_url,
            decision_service_key,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `decision_service_url` is present but not an HTTP(S) URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref url) = self.decision_service_url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            anyhow::bail!(
                "DECISION_SERVICE_URL must start with 'http://' or 'https://', got '{}'",
                url
            );
        }

        Ok(())
    }

    /// Returns whether admission checks are backed by a real decision service.
    pub fn is_admission_enabled(&self) -> bool {
        self.decision_service_url.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if let Some(ref url) = self.decision_service_url {
            tracing::info!("  Decision service: {} (enabled)", url);
        } else {
            tracing::info!("  Decision service: disabled (all requests allowed)");
        }

        if self.decision_service_key.is_some() {
            tracing::info!("  Decision service key: ***");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            decision_service_url: None,
            decision_service_key: None,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test invalid decision service URL
        config.decision_service_url = Some("decide.example.com".to_string());
        assert!(config.validate().is_err());

        config.decision_service_url = Some("https://decide.example.com".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_admission_enabled_tracks_url() {
        let mut config = base_config();
        assert!(!config.is_admission_enabled());

        config.decision_service_url = Some("https://decide.example.com".to_string());
        assert!(config.is_admission_enabled());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
            env::remove_var("DECISION_SERVICE_URL");
            env::remove_var("DECISION_SERVICE_KEY");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert!(config.decision_service_url.is_none());
        assert!(config.decision_service_key.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_decision_service() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DECISION_SERVICE_URL", "https://decide.example.com");
            env::set_var("DECISION_SERVICE_KEY", "test-key");
        }

        let config = Config::from_env();

        assert_eq!(
            config.decision_service_url.as_deref(),
            Some("https://decide.example.com")
        );
        assert_eq!(config.decision_service_key.as_deref(), Some("test-key"));

        // Cleanup
        unsafe {
            env::remove_var("DECISION_SERVICE_URL");
            env::remove_var("DECISION_SERVICE_KEY");
        }
    }
}
