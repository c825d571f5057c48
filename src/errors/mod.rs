//! Error types for the Ideogram client.
//!
//! Every failure surfaces as a single [`IdeogramError`]. Callers can match on
//! the variant, or branch on [`IdeogramError::status_code`] and
//! [`IdeogramError::error_code`]:
//!
//! | kind         | status code | error code | source            |
//! |--------------|-------------|------------|-------------------|
//! | validation   | no          | no         | no                |
//! | network      | no          | no         | transport failure |
//! | timeout      | no          | no         | transport failure |
//! | api          | yes         | optional   | no                |
//! | decode       | no          | no         | serde failure     |

mod mapping;

pub use mapping::{ErrorEnvelope, ErrorMapper};

use thiserror::Error;

use crate::transport::TransportError;

/// Result type alias for Ideogram operations.
pub type IdeogramResult<T> = Result<T, IdeogramError>;

/// Message used for connection and I/O failures.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error occurred while communicating with Ideogram API";

/// Message used when the transport reports a timeout.
pub const TIMEOUT_ERROR_MESSAGE: &str = "Request timed out";

/// Message used when the caller cancels an in-flight request.
pub const CANCELLED_ERROR_MESSAGE: &str = "Request was cancelled";

/// Message used when a success response cannot be decoded.
pub const DECODE_ERROR_MESSAGE: &str = "Failed to deserialize response";

/// Message used when an error envelope carries neither `error` nor `message`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Error type for Ideogram client operations.
#[derive(Debug, Error)]
pub enum IdeogramError {
    /// Caller input rejected before any network call.
    #[error("Validation error: {message}")]
    Validation {
        /// Error message describing the validation issue.
        message: String,
        /// The request field that failed validation.
        param: Option<String>,
    },

    /// Invalid client configuration.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue.
        message: String,
    },

    /// The request could not complete (connection or I/O failure).
    #[error("{message}")]
    Network {
        /// Fixed descriptive message.
        message: String,
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// The request timed out or was cancelled before a response arrived.
    #[error("{message}")]
    Timeout {
        /// Fixed descriptive message.
        message: String,
        /// Underlying transport failure.
        #[source]
        source: TransportError,
    },

    /// The API answered with a non-success status.
    #[error("API error (HTTP {status_code}): {message}")]
    Api {
        /// Message extracted from the error envelope.
        message: String,
        /// HTTP status code.
        status_code: u16,
        /// Provider-specific error code.
        error_code: Option<String>,
    },

    /// A success response body could not be interpreted.
    #[error("{message}")]
    Decode {
        /// Fixed descriptive message.
        message: String,
        /// Underlying deserialization failure, if any.
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl IdeogramError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        IdeogramError::Validation {
            message: message.into(),
            param: None,
        }
    }

    /// Creates a validation error tied to a request field.
    pub fn validation_param(message: impl Into<String>, param: impl Into<String>) -> Self {
        IdeogramError::Validation {
            message: message.into(),
            param: Some(param.into()),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        IdeogramError::Configuration {
            message: message.into(),
        }
    }

    /// Creates a decode error wrapping a serde failure.
    pub fn decode(source: Option<serde_json::Error>) -> Self {
        IdeogramError::Decode {
            message: DECODE_ERROR_MESSAGE.to_string(),
            source,
        }
    }

    /// Returns the bare error message, without the kind prefix used by `Display`.
    pub fn message(&self) -> &str {
        match self {
            IdeogramError::Validation { message, .. }
            | IdeogramError::Configuration { message }
            | IdeogramError::Network { message, .. }
            | IdeogramError::Timeout { message, .. }
            | IdeogramError::Api { message, .. }
            | IdeogramError::Decode { message, .. } => message,
        }
    }

    /// Returns the HTTP status code. Only API errors carry one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            IdeogramError::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns the provider error code, if the API sent one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            IdeogramError::Api { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }

    /// Returns true for errors raised before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, IdeogramError::Validation { .. })
    }

    /// Returns true when the call never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            IdeogramError::Network { .. } | IdeogramError::Timeout { .. }
        )
    }

    /// Returns true for timed out or cancelled requests.
    pub fn is_timeout(&self) -> bool {
        matches!(self, IdeogramError::Timeout { .. })
    }

    /// Returns true for undecodable success responses.
    pub fn is_decode(&self) -> bool {
        matches!(self, IdeogramError::Decode { .. })
    }
}

impl From<TransportError> for IdeogramError {
    fn from(err: TransportError) -> Self {
        ErrorMapper::from_transport(err)
    }
}
