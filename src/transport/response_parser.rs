use serde::de::DeserializeOwned;

use super::HttpResponse;
use crate::errors::{ErrorMapper, IdeogramError, IdeogramResult};

/// Turns transport responses into typed results or normalized errors.
pub struct ResponseParser;

impl ResponseParser {
    /// Parses a response into `T`, or maps a failure status to an API error.
    ///
    /// A success status with an empty or `null` body is a decode error.
    pub fn parse<T: DeserializeOwned>(response: &HttpResponse) -> IdeogramResult<T> {
        if !response.is_success() {
            let error = ErrorMapper::map_status(response.status, &response.body);
            tracing::warn!(
                status = response.status,
                error_code = error.error_code().unwrap_or_default(),
                error_message = error.message(),
                "Ideogram API returned an error"
            );
            return Err(error);
        }

        match serde_json::from_slice::<Option<T>>(&response.body) {
            Ok(Some(parsed)) => {
                tracing::debug!(status = response.status, "Decoded response");
                Ok(parsed)
            }
            Ok(None) => {
                tracing::warn!(status = response.status, "Response body was null");
                Err(IdeogramError::decode(None))
            }
            Err(e) => {
                tracing::warn!(
                    status = response.status,
                    error = %e,
                    body_len = response.body.len(),
                    "Failed to deserialize response"
                );
                Err(IdeogramError::decode(Some(e)))
            }
        }
    }
}
