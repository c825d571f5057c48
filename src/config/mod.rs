//! Configuration module for the Ideogram client.
//!
//! Configuration is programmatic only: API key, base URL and request timeout.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::errors::{IdeogramError, IdeogramResult};

/// Default base URL for the Ideogram API.
pub const DEFAULT_BASE_URL: &str = "https://api.ideogram.ai";

/// Default request timeout (60 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the Ideogram client.
#[derive(Clone)]
pub struct IdeogramConfig {
    /// API key for authentication (stored securely).
    pub(crate) api_key: SecretString,
    /// Base URL for API requests, without a trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Extra headers sent with every request.
    pub custom_headers: Vec<(String, String)>,
}

impl IdeogramConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> IdeogramConfigBuilder {
        IdeogramConfigBuilder::new()
    }

    /// Returns the API key (exposing the secret).
    pub(crate) fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Returns the API key hint (last 4 characters) for debugging.
    pub fn api_key_hint(&self) -> String {
        key_hint(self.api_key.expose_secret())
    }
}

pub(crate) fn key_hint(key: &str) -> String {
    let count = key.chars().count();
    if count > 4 {
        let tail: String = key.chars().skip(count - 4).collect();
        format!("...{}", tail)
    } else {
        "****".to_string()
    }
}

impl std::fmt::Debug for IdeogramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdeogramConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for `IdeogramConfig`.
#[derive(Default)]
pub struct IdeogramConfigBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    custom_headers: Vec<(String, String)>,
}

impl IdeogramConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    /// Sets the API key from an existing secret.
    pub fn api_key_secret(mut self, api_key: SecretString) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Adds a custom header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> IdeogramResult<IdeogramConfig> {
        let api_key = self
            .api_key
            .ok_or_else(|| IdeogramError::configuration("API key is required"))?;

        if api_key.expose_secret().trim().is_empty() {
            return Err(IdeogramError::configuration("API key cannot be empty"));
        }

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let parsed = url::Url::parse(&base_url)
            .map_err(|e| IdeogramError::configuration(format!("Invalid base URL: {}", e)))?;
        if parsed.scheme() != "https" {
            return Err(IdeogramError::configuration("Base URL must use HTTPS"));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(IdeogramError::configuration("Timeout must be greater than zero"));
        }

        Ok(IdeogramConfig {
            api_key,
            base_url,
            timeout,
            custom_headers: self.custom_headers,
        })
    }
}
