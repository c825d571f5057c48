//! Ideogram API client.
//!
//! Provides the main client interface for interacting with the Ideogram API.

use http::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::SecretString;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::{ApiKeyAuth, AuthProvider};
use crate::config::{IdeogramConfig, IdeogramConfigBuilder};
use crate::errors::{IdeogramError, IdeogramResult};
use crate::services::ImageService;
use crate::transport::{HttpTransport, HttpTransportImpl};

/// The main Ideogram client.
///
/// Cheap to share: wrap it in an `Arc` and call it from any number of tasks.
///
/// # Example
///
/// ```rust,no_run
/// use integrations_ideogram::{AspectRatio, GenerateImageRequest, IdeogramClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = IdeogramClient::builder()
///         .api_key("your_api_key")
///         .build()?;
///
///     let request = GenerateImageRequest::new("A lighthouse at dusk")
///         .with_aspect_ratio(AspectRatio::Aspect16x9);
///
///     let response = client.images().generate(request).await?;
///     for url in response.urls() {
///         println!("{}", url);
///     }
///     Ok(())
/// }
/// ```
pub struct IdeogramClient {
    config: IdeogramConfig,
    image_service: ImageService,
}

impl IdeogramClient {
    /// Creates a new client builder.
    pub fn builder() -> IdeogramClientBuilder {
        IdeogramClientBuilder::new()
    }

    /// Creates a client from an API key, with default settings.
    pub fn from_api_key(api_key: impl Into<String>) -> IdeogramResult<Self> {
        IdeogramClientBuilder::new().api_key(api_key).build()
    }

    /// Returns the image service.
    pub fn images(&self) -> &ImageService {
        &self.image_service
    }

    /// Returns the configuration.
    pub fn config(&self) -> &IdeogramConfig {
        &self.config
    }
}

impl std::fmt::Debug for IdeogramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdeogramClient")
            .field("config", &self.config)
            .finish()
    }
}

/// Builder for the Ideogram client.
pub struct IdeogramClientBuilder {
    config_builder: IdeogramConfigBuilder,
    transport: Option<Arc<dyn HttpTransport>>,
    auth: Option<Arc<dyn AuthProvider>>,
}

impl IdeogramClientBuilder {
    /// Creates a new client builder.
    pub fn new() -> Self {
        Self {
            config_builder: IdeogramConfigBuilder::new(),
            transport: None,
            auth: None,
        }
    }

    /// Creates a builder from an existing configuration.
    pub fn from_config(config: IdeogramConfig) -> Self {
        let mut config_builder = IdeogramConfigBuilder::new()
            .api_key_secret(config.api_key().clone())
            .base_url(config.base_url)
            .timeout(config.timeout);
        for (name, value) in config.custom_headers {
            config_builder = config_builder.header(name, value);
        }

        Self {
            config_builder,
            transport: None,
            auth: None,
        }
    }

    /// Sets the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_key(api_key);
        self
    }

    /// Sets the API key from an existing secret.
    pub fn api_key_secret(mut self, api_key: SecretString) -> Self {
        self.config_builder = self.config_builder.api_key_secret(api_key);
        self
    }

    /// Sets the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(base_url);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    /// Sets the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config_builder = self.config_builder.timeout_secs(secs);
        self
    }

    /// Adds a header sent with every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.header(name, value);
        self
    }

    /// Sets a custom transport.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets a custom auth provider.
    pub fn auth(mut self, auth: Arc<dyn AuthProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Builds the client.
    pub fn build(self) -> IdeogramResult<IdeogramClient> {
        let config = self.config_builder.build()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(
                HttpTransportImpl::new(&config.base_url, config.timeout)
                    .map_err(|e| IdeogramError::configuration(e.to_string()))?,
            ),
        };

        let auth: Arc<dyn AuthProvider> = match self.auth {
            Some(a) => a,
            None => Arc::new(ApiKeyAuth::new(config.api_key().clone())),
        };
        auth.validate()?;

        let default_headers = default_headers(&config, auth.as_ref())?;

        tracing::debug!(
            base_url = %config.base_url,
            timeout_ms = config.timeout.as_millis() as u64,
            api_key = %config.api_key_hint(),
            "Ideogram client configured"
        );

        Ok(IdeogramClient {
            image_service: ImageService::new(transport, Arc::new(default_headers)),
            config,
        })
    }
}

impl Default for IdeogramClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Headers sent with every request. Names are normalised through
/// `http::HeaderMap`, so a later header replaces an earlier one regardless of
/// case: custom headers first, then `Accept`, then the auth provider's.
fn default_headers(
    config: &IdeogramConfig,
    auth: &dyn AuthProvider,
) -> IdeogramResult<HashMap<String, String>> {
    let mut auth_headers = HashMap::new();
    auth.apply_auth(&mut auth_headers);

    let accept = std::iter::once((
        http::header::ACCEPT.as_str(),
        mime::APPLICATION_JSON.essence_str(),
    ));
    let pairs = config
        .custom_headers
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .chain(accept)
        .chain(
            auth_headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        );

    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            IdeogramError::configuration(format!("Invalid header name: {}", name))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|_| {
            IdeogramError::configuration(format!("Invalid value for header {}", name))
        })?;
        headers.insert(header_name, header_value);
    }

    headers
        .iter()
        .map(|(name, value)| {
            value
                .to_str()
                .map(|value| (name.as_str().to_string(), value.to_string()))
                .map_err(|_| {
                    IdeogramError::configuration(format!("Invalid value for header {}", name))
                })
        })
        .collect()
}
