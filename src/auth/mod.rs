//! Credentials for Ideogram requests.
//!
//! Ideogram expects `Authorization: Bearer <api key>` on every call. The
//! header is produced once, when the client is built, and merged into each
//! request's headers alongside `Accept: application/json`. A provider other
//! than [`ApiKeyAuth`] can be injected through
//! [`IdeogramClientBuilder::auth`](crate::IdeogramClientBuilder::auth), for
//! example to route through a proxy that expects a different header.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

use crate::config::key_hint;
use crate::errors::{IdeogramError, IdeogramResult};

/// Supplies the credential headers attached to every Ideogram request.
///
/// Called once per client. Headers written here replace custom headers of the
/// same name, whatever their case.
pub trait AuthProvider: Send + Sync {
    /// Writes credential headers into `headers`.
    fn apply_auth(&self, headers: &mut HashMap<String, String>);

    /// Scheme name used in logs, such as `Bearer`.
    fn scheme(&self) -> &str;

    /// Rejects unusable credentials before the client is built.
    fn validate(&self) -> IdeogramResult<()>;
}

/// Sends the Ideogram API key as a Bearer token.
///
/// The key never appears in `Debug` output; only its last four characters do.
pub struct ApiKeyAuth {
    api_key: SecretString,
}

impl ApiKeyAuth {
    /// Wraps an API key held as a secret.
    pub fn new(api_key: SecretString) -> Self {
        Self { api_key }
    }

    /// Wraps a plain string key.
    pub fn from_string(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
        }
    }

    /// Last four characters of the key, for logs.
    pub fn key_hint(&self) -> String {
        key_hint(self.api_key.expose_secret())
    }
}

impl AuthProvider for ApiKeyAuth {
    fn apply_auth(&self, headers: &mut HashMap<String, String>) {
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key.expose_secret()),
        );
    }

    fn scheme(&self) -> &str {
        "Bearer"
    }

    fn validate(&self) -> IdeogramResult<()> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(IdeogramError::configuration("API key cannot be empty"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for ApiKeyAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyAuth")
            .field("api_key", &"[REDACTED]")
            .field("key_hint", &self.key_hint())
            .finish()
    }
}
