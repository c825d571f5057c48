//! Mock implementations for testing.
//!
//! Provides a recording transport and a mock auth provider for exercising
//! the client without making real API calls.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use crate::auth::AuthProvider;
use crate::errors::IdeogramResult;
use crate::transport::{
    HttpRequest, HttpResponse, HttpTransport, MultipartPart, MultipartRequest, TransportError,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A recorded request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request path.
    pub path: String,
    /// Request headers, after default headers were merged.
    pub headers: HashMap<String, String>,
    /// JSON body, for requests sent through `send`.
    pub body: Option<Vec<u8>>,
    /// Multipart parts, for requests sent through `send_multipart`.
    pub parts: Vec<MultipartPart>,
}

impl RecordedRequest {
    /// Returns true if the request was multipart.
    pub fn is_multipart(&self) -> bool {
        self.body.is_none()
    }

    /// Parses the JSON body.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_slice(body).ok())
    }

    /// Parses the `image_request` multipart part.
    pub fn image_request_part(&self) -> Option<serde_json::Value> {
        self.parts.iter().find_map(|part| match part {
            MultipartPart::Json { name, value } if name == "image_request" => {
                serde_json::from_str(value).ok()
            }
            _ => None,
        })
    }

    /// Multipart field names, in wire order.
    pub fn part_names(&self) -> Vec<&str> {
        self.parts.iter().map(MultipartPart::name).collect()
    }

    /// Returns a header value, matching the name case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// A mock response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Creates a successful JSON response.
    pub fn json<T: serde::Serialize>(value: &T) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_default();
        Self::raw(200, body).with_header("content-type", "application/json")
    }

    /// Creates an error response in the Ideogram error envelope.
    pub fn error(status: u16, message: &str, code: Option<&str>) -> Self {
        let mut envelope = serde_json::json!({ "error": message });
        if let Some(code) = code {
            envelope["code"] = serde_json::Value::String(code.to_string());
        }
        let body = serde_json::to_vec(&envelope).unwrap_or_default();
        Self::raw(status, body).with_header("content-type", "application/json")
    }

    /// Creates a response with an arbitrary body.
    pub fn raw(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Adds a header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }
}

enum MockOutcome {
    Respond(MockResponse),
    Fail(TransportError),
    Hang,
}

/// Mock HTTP transport for testing.
///
/// Outcomes are consumed in FIFO order. With nothing queued, every call gets
/// a 500 response.
pub struct MockTransport {
    outcomes: Mutex<VecDeque<MockOutcome>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Creates a new mock transport.
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queues a response.
    pub fn queue(&self, response: MockResponse) {
        lock(&self.outcomes).push_back(MockOutcome::Respond(response));
    }

    /// Queues a JSON success response.
    pub fn queue_json<T: serde::Serialize>(&self, value: &T) {
        self.queue(MockResponse::json(value));
    }

    /// Queues a transport failure.
    pub fn queue_transport_error(&self, error: TransportError) {
        lock(&self.outcomes).push_back(MockOutcome::Fail(error));
    }

    /// Queues a call that never completes.
    pub fn queue_hang(&self) {
        lock(&self.outcomes).push_back(MockOutcome::Hang);
    }

    /// Gets all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Gets the last recorded request.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        lock(&self.requests).last().cloned()
    }

    /// Returns the number of requests made.
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    fn record(&self, request: RecordedRequest) {
        lock(&self.requests).push(request);
    }

    async fn respond(&self) -> Result<HttpResponse, TransportError> {
        let outcome = lock(&self.outcomes).pop_front();
        match outcome {
            Some(MockOutcome::Respond(response)) => Ok(HttpResponse {
                status: response.status,
                headers: response.headers,
                body: response.body,
            }),
            Some(MockOutcome::Fail(error)) => Err(error),
            Some(MockOutcome::Hang) => futures::future::pending().await,
            None => Ok(HttpResponse {
                status: 500,
                headers: HashMap::new(),
                body: br#"{"error":"No mock response configured"}"#.to_vec(),
            }),
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.record(RecordedRequest {
            path: request.path,
            headers: request.headers,
            body: Some(request.body),
            parts: Vec::new(),
        });
        self.respond().await
    }

    async fn send_multipart(
        &self,
        request: MultipartRequest,
    ) -> Result<HttpResponse, TransportError> {
        self.record(RecordedRequest {
            path: request.path,
            headers: request.headers,
            body: None,
            parts: request.parts,
        });
        self.respond().await
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("request_count", &self.request_count())
            .finish()
    }
}

/// Mock auth provider for testing.
pub struct MockAuth {
    api_key: String,
}

impl MockAuth {
    /// Creates a new mock auth provider.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl Default for MockAuth {
    fn default() -> Self {
        Self::new("mock_test_key")
    }
}

impl AuthProvider for MockAuth {
    fn apply_auth(&self, headers: &mut HashMap<String, String>) {
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        );
    }

    fn scheme(&self) -> &str {
        "Bearer"
    }

    fn validate(&self) -> IdeogramResult<()> {
        Ok(())
    }
}

impl std::fmt::Debug for MockAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockAuth").finish()
    }
}

/// Test fixtures for common response types.
pub mod fixtures {
    use crate::types::{DescribeResponse, DescriptionData, ImageData, ImageResponse};

    /// A PNG signature followed by a few bytes; enough to stand in for an image.
    pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    /// Creates an image response with `count` images.
    pub fn image_response(count: usize) -> ImageResponse {
        ImageResponse {
            data: (0..count)
                .map(|i| ImageData {
                    url: format!("https://ideogram.ai/api/images/ephemeral/mock-{}.png", i),
                    prompt: "a lighthouse at dusk".to_string(),
                    resolution: "1024x1024".to_string(),
                    is_image_safe: true,
                    seed: Some(7),
                })
                .collect(),
            created: 1000,
        }
    }

    /// Creates a describe response.
    pub fn describe_response(descriptions: &[&str]) -> DescribeResponse {
        DescribeResponse {
            data: descriptions
                .iter()
                .map(|d| DescriptionData {
                    description: (*d).to_string(),
                })
                .collect(),
        }
    }
}
