//! Integration tests for error normalization

use super::*;
use integrations_ideogram::{DescribeImageRequest, GenerateImageRequest, IdeogramError};
use std::error::Error as _;
use wiremock::matchers::{method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_authentication_error() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/generate"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Invalid API key",
            "code": "INVALID_API_KEY"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .images()
        .generate(GenerateImageRequest::new("a cat"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.error_code(), Some("INVALID_API_KEY"));
    assert_eq!(err.message(), "Invalid API key");
}

#[tokio::test]
async fn test_error_envelope_message_fallback() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/generate"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Prompt failed safety check"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .images()
        .generate(GenerateImageRequest::new("a cat"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(422));
    assert_eq!(err.message(), "Prompt failed safety check");
    assert_eq!(err.error_code(), None);
}

#[tokio::test]
async fn test_server_error_with_html_body() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/describe"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Internal</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .images()
        .describe(DescribeImageRequest::new(png_bytes()))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(500));
    assert_eq!(err.message(), "HTTP 500: Internal Server Error");
    assert_eq!(err.error_code(), None);
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": [oops"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .images()
        .generate(GenerateImageRequest::new("a cat"))
        .await
        .unwrap_err();

    assert!(matches!(err, IdeogramError::Decode { .. }));
    assert_eq!(err.message(), "Failed to deserialize response");
    assert_eq!(err.status_code(), None);
    assert!(err.source().is_some());
}

#[tokio::test]
async fn test_transport_timeout() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/generate"))
        .respond_with(success_response(image_response_body()).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let client = client_with_timeout(&mock_server, Duration::from_millis(100));
    let err = client
        .images()
        .generate(GenerateImageRequest::new("a cat"))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(err.message(), "Request timed out");
    assert_eq!(err.status_code(), None);
    assert!(err.source().is_some());
}

#[tokio::test]
async fn test_connection_refused() {
    let transport = integrations_ideogram::transport::HttpTransportImpl::new(
        "http://127.0.0.1:1",
        Duration::from_secs(2),
    )
    .unwrap();
    let client = integrations_ideogram::IdeogramClient::builder()
        .api_key(TEST_API_KEY)
        .transport(Arc::new(transport))
        .build()
        .unwrap();

    let err = client
        .images()
        .generate(GenerateImageRequest::new("a cat"))
        .await
        .unwrap_err();

    assert!(matches!(err, IdeogramError::Network { .. }));
    assert_eq!(
        err.message(),
        "Network error occurred while communicating with Ideogram API"
    );
    assert_eq!(err.status_code(), None);
}
