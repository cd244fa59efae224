//! Order API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `URBAN_BREW_API_URL` - Base URL of the order backend
//!   (default: `http://127.0.0.1:5000`)

use thiserror::Error;
use url::Url;

/// Base URL used when `URBAN_BREW_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Order backend configuration.
#[derive(Debug, Clone)]
pub struct OrderApiConfig {
    /// Base URL of the order backend.
    pub base_url: Url,
}

impl OrderApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `URBAN_BREW_API_URL` is set but does not
    /// parse as a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = std::env::var("URBAN_BREW_API_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::new(&raw)
    }

    /// Create a configuration from a base URL string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the string does not parse as a URL.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("URBAN_BREW_API_URL", e.to_string()))?;

        Ok(Self { base_url })
    }
}
