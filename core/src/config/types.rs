//! Minimal configuration types for hotel-tools core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default base URL of the Amadeus self-service test environment
pub const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

/// OAuth2 client credentials for the upstream API
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new<I: Into<String>, S: Into<String>>(client_id: I, client_secret: S) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Both halves must be present
    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.trim().is_empty() {
            return Err("client_id cannot be empty".to_string());
        }
        if self.client_secret.trim().is_empty() {
            return Err("client_secret cannot be empty".to_string());
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// A fully resolved API configuration ready for use by core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedApiConfig {
    /// Base URL for the API, without trailing slash
    pub base_url: String,
    /// Credentials used by the token provider
    pub credentials: Credentials,
    /// Optional per-request timeout applied to the HTTP client
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ResolvedApiConfig {
    /// Create a new resolved API config
    pub fn new(base_url: String, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            request_timeout_secs: None,
        }
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.credentials.validate()?;

        if self.base_url.is_empty() {
            return Err("Base URL cannot be empty".to_string());
        }

        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Base URL is not a valid URL: {}", e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err("Base URL must start with http:// or https://".to_string());
        }

        if self.request_timeout_secs == Some(0) {
            return Err("Request timeout must be greater than zero".to_string());
        }

        Ok(())
    }
}
