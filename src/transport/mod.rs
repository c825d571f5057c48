//! HTTP transport layer for the Ideogram client.
//!
//! Holds the transport abstraction the client sends requests through, the
//! reqwest-backed default implementation, and the stateless codec pair that
//! sits on either side of it: [`RequestEncoder`] and [`ResponseParser`].

mod http;
mod request_encoder;
mod response_parser;

pub use http::{HttpRequest, HttpResponse, HttpTransport, HttpTransportImpl};
pub use request_encoder::{EncodedRequest, Endpoint, RequestEncoder, API_VERSION};
pub use response_parser::ResponseParser;

use std::collections::HashMap;
use std::time::Duration;

/// Multipart request for file-bearing operations.
#[derive(Debug, Clone)]
pub struct MultipartRequest {
    /// Request path, relative to the base URL.
    pub path: String,
    /// Request headers.
    pub headers: HashMap<String, String>,
    /// Multipart form parts, in wire order.
    pub parts: Vec<MultipartPart>,
}

impl MultipartRequest {
    /// Creates an empty multipart request for a path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            headers: HashMap::new(),
            parts: Vec::new(),
        }
    }

    /// Appends a part.
    pub fn with_part(mut self, part: MultipartPart) -> Self {
        self.parts.push(part);
        self
    }

    /// Returns the part with the given field name.
    pub fn part(&self, name: &str) -> Option<&MultipartPart> {
        self.parts.iter().find(|p| p.name() == name)
    }
}

/// A part of a multipart form.
#[derive(Debug, Clone)]
pub enum MultipartPart {
    /// JSON text field.
    Json {
        /// Field name.
        name: String,
        /// Serialized JSON document.
        value: String,
    },
    /// File field.
    File {
        /// Field name.
        name: String,
        /// File name.
        filename: String,
        /// Content type.
        content_type: String,
        /// File data.
        data: Vec<u8>,
    },
}

impl MultipartPart {
    /// Returns the form field name.
    pub fn name(&self) -> &str {
        match self {
            MultipartPart::Json { name, .. } | MultipartPart::File { name, .. } => name,
        }
    }
}

/// Transport error types. These describe calls that never produced a status.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection error.
    #[error("Connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Timeout error.
    #[error("Timeout after {timeout:?}")]
    Timeout {
        /// Timeout duration.
        timeout: Duration,
    },

    /// The caller cancelled the request before it completed.
    #[error("Request cancelled")]
    Cancelled,

    /// The request could not be built.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// The response could not be read.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },
}
