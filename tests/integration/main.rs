//! Integration tests using WireMock
//!
//! These tests drive the full request/response cycle through the reqwest
//! transport against a local mock server: header merging, JSON and multipart
//! encoding, response decoding and error normalization.

mod errors;
mod generate;
mod multipart;

use std::sync::Arc;
use std::time::Duration;

use integrations_ideogram::transport::HttpTransportImpl;
use integrations_ideogram::IdeogramClient;
use serde_json::{json, Value};
use wiremock::{MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

/// Starts a mock server.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Builds a client whose transport points at the mock server.
pub fn client_for(server: &MockServer) -> IdeogramClient {
    client_with_timeout(server, Duration::from_secs(10))
}

/// Builds a client with a custom transport timeout.
pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> IdeogramClient {
    let transport = HttpTransportImpl::new(server.uri(), timeout).expect("transport");
    IdeogramClient::builder()
        .api_key(TEST_API_KEY)
        .transport(Arc::new(transport))
        .build()
        .expect("Failed to build client")
}

/// A successful image response body.
pub fn image_response_body() -> Value {
    json!({
        "data": [{
            "url": "https://ideogram.ai/api/images/ephemeral/abc.png",
            "prompt": "a lighthouse at dusk",
            "resolution": "1024x1024",
            "is_image_safe": true,
            "seed": 7
        }],
        "created": 1000
    })
}

/// Helper to create success response templates.
pub fn success_response(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Stand-in image bytes.
pub fn png_bytes() -> Vec<u8> {
    vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3, 4]
}
