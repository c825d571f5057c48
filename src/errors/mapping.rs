use serde::{Deserialize, Serialize};

use crate::errors::{
    IdeogramError, CANCELLED_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE, TIMEOUT_ERROR_MESSAGE,
    UNKNOWN_ERROR_MESSAGE,
};
use crate::transport::TransportError;

/// Error body returned by the Ideogram API on non-success statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorEnvelope {
    /// Primary error message.
    #[serde(default)]
    pub error: Option<String>,
    /// Additional error details.
    #[serde(default)]
    pub message: Option<String>,
    /// Provider error code, e.g. `INVALID_API_KEY`.
    #[serde(default)]
    pub code: Option<String>,
}

impl ErrorEnvelope {
    /// Picks the caller-facing message: a non-empty `error`, then `message`,
    /// then a fixed fallback.
    pub fn resolved_message(&self) -> String {
        match (&self.error, &self.message) {
            (Some(error), _) if !error.is_empty() => error.clone(),
            (_, Some(message)) => message.clone(),
            _ => UNKNOWN_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Turns failed responses and transport failures into [`IdeogramError`]s.
pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps a non-success status and its raw body to an API error.
    ///
    /// The status code is always preserved. When the body is not an error
    /// envelope the message is synthesized from the status line.
    pub fn map_status(status_code: u16, body: &[u8]) -> IdeogramError {
        match serde_json::from_slice::<Option<ErrorEnvelope>>(body) {
            Ok(envelope) => {
                let envelope = envelope.unwrap_or_default();
                IdeogramError::Api {
                    message: envelope.resolved_message(),
                    status_code,
                    error_code: envelope.code,
                }
            }
            Err(e) => {
                tracing::debug!(status = status_code, error = %e, "Error body is not an error envelope");
                IdeogramError::Api {
                    message: format!("HTTP {}: {}", status_code, Self::reason_phrase(status_code)),
                    status_code,
                    error_code: None,
                }
            }
        }
    }

    /// Maps a transport failure (no status received) to an error.
    pub fn from_transport(err: TransportError) -> IdeogramError {
        match err {
            TransportError::Timeout { .. } => IdeogramError::Timeout {
                message: TIMEOUT_ERROR_MESSAGE.to_string(),
                source: err,
            },
            TransportError::Cancelled => IdeogramError::Timeout {
                message: CANCELLED_ERROR_MESSAGE.to_string(),
                source: err,
            },
            TransportError::Connection { .. }
            | TransportError::InvalidRequest { .. }
            | TransportError::InvalidResponse { .. } => IdeogramError::Network {
                message: NETWORK_ERROR_MESSAGE.to_string(),
                source: err,
            },
        }
    }

    /// Returns the canonical reason phrase for a status code.
    pub fn reason_phrase(status_code: u16) -> &'static str {
        http::StatusCode::from_u16(status_code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown Status")
    }
}
