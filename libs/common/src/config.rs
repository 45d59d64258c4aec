//! Client configuration
//!
//! The base endpoint defaults to a constant and can be overridden from the
//! environment for local development and tests.

use config::{Config, Environment};
use reqwest::Url;
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

/// Origin plus versioned API prefix used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Configuration for the resource server connection
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL including the versioned path prefix
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create a new ApiConfig from environment variables
    ///
    /// # Environment Variables
    /// - `API_BASE_URL`: Base URL of the resource server (default: "http://localhost:8080/api/v1")
    pub fn from_env() -> ClientResult<Self> {
        Config::builder()
            .set_default("base_url", DEFAULT_API_BASE_URL)
            .map_err(|e| ClientError::Configuration(e.to_string()))?
            .add_source(Environment::with_prefix("API"))
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| ClientError::Configuration(e.to_string()))
    }

    /// Validate the base URL
    pub fn parse_base_url(&self) -> ClientResult<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::Configuration(format!("Invalid base URL {}: {}", self.base_url, e))
        })?;

        if url.cannot_be_a_base() {
            return Err(ClientError::Configuration(format!(
                "Base URL cannot carry resource paths: {}",
                self.base_url
            )));
        }

        Ok(url)
    }
}
