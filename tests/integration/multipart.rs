//! Integration tests for the multipart operations: edit, remix and describe

use super::*;
use integrations_ideogram::{
    DescribeImageRequest, EditImageRequest, ImageFile, RemixImageRequest, StyleType,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::Mock;

async fn received_body(server: &MockServer) -> String {
    let requests = server.received_requests().await.expect("recording enabled");
    let last = requests.last().expect("one request");
    String::from_utf8_lossy(&last.body).into_owned()
}

#[tokio::test]
async fn test_edit_integration_with_mask() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/edit"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(body_string_contains("name=\"image_file\""))
        .and(body_string_contains("name=\"mask\""))
        .and(body_string_contains("name=\"image_request\""))
        .respond_with(success_response(image_response_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = EditImageRequest::new(png_bytes(), "add a red hat")
        .with_mask(png_bytes())
        .with_style_type(StyleType::Design);

    let response = client.images().edit(request).await.unwrap();
    assert_eq!(response.data.len(), 1);

    let body = received_body(&mock_server).await;
    assert!(body.contains("filename=\"image.png\""));
    assert!(body.contains("filename=\"mask.png\""));
    assert!(body.contains("image/png"));
    assert!(body.contains(r#"{"image_request":{"prompt":"add a red hat","style_type":"DESIGN"}}"#));
}

#[tokio::test]
async fn test_edit_integration_without_mask() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/edit"))
        .respond_with(success_response(image_response_body()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .images()
        .edit(EditImageRequest::new(png_bytes(), "add a red hat"))
        .await
        .unwrap();

    let body = received_body(&mock_server).await;
    assert!(body.contains("name=\"image_file\""));
    assert!(!body.contains("name=\"mask\""));
}

#[tokio::test]
async fn test_remix_integration() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/remix"))
        .and(body_string_contains(r#""image_weight":{"weight":0.25}"#))
        .respond_with(success_response(image_response_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = RemixImageRequest::new(
        ImageFile::from_bytes(png_bytes()).with_filename("source.png"),
        "in the style of a woodcut",
    )
    .with_image_weight(0.25);

    client.images().remix(request).await.unwrap();

    let body = received_body(&mock_server).await;
    assert!(body.contains("filename=\"source.png\""));
}

#[tokio::test]
async fn test_describe_integration() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/describe"))
        .and(body_string_contains("name=\"image_file\""))
        .respond_with(success_response(json!({
            "data": [{"description": "A lighthouse on a rocky shore at dusk."}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .images()
        .describe(DescribeImageRequest::new(png_bytes()))
        .await
        .unwrap();

    assert_eq!(
        response.descriptions().collect::<Vec<_>>(),
        vec!["A lighthouse on a rocky shore at dusk."]
    );

    let body = received_body(&mock_server).await;
    assert!(!body.contains("image_request"));
}
