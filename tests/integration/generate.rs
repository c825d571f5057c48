//! Integration tests for image generation

use super::*;
use integrations_ideogram::{
    AspectRatio, CancellationToken, ColorPalettePreset, GenerateImageRequest, MagicPromptOption,
    Model,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::Mock;

#[tokio::test]
async fn test_generate_integration_success() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/generate"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "image_request": {
                "prompt": "a lighthouse at dusk",
                "aspect_ratio": "ASPECT_16_9",
                "model": "V_2",
                "magic_prompt_option": "AUTO",
                "num_images": 1,
                "color_palette": {"name": "EMBER"}
            }
        })))
        .respond_with(success_response(image_response_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = GenerateImageRequest::new("a lighthouse at dusk")
        .with_aspect_ratio(AspectRatio::Aspect16x9)
        .with_model(Model::V2)
        .with_magic_prompt(MagicPromptOption::Auto)
        .with_num_images(1)
        .with_color_palette(ColorPalettePreset::Ember);

    let response = client.images().generate(request).await.unwrap();

    assert_eq!(response.created, 1000);
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.data[0].seed, Some(7));
    assert_eq!(response.data[0].resolution, "1024x1024");
    assert!(response.data[0].is_image_safe);
}

#[tokio::test]
async fn test_generate_integration_empty_data() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/generate"))
        .respond_with(success_response(json!({"data": [], "created": 1000})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .images()
        .generate(GenerateImageRequest::new("anything"))
        .await
        .unwrap();

    assert!(response.data.is_empty());
}

#[tokio::test]
async fn test_generate_integration_validation_sends_nothing() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .respond_with(success_response(image_response_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .images()
        .generate(GenerateImageRequest::new("x".repeat(10_001)))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_generate_integration_cancellation() {
    let mock_server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/v3/generate"))
        .respond_with(success_response(image_response_body()).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let started = std::time::Instant::now();
    let err = client
        .images()
        .generate_with_cancellation(GenerateImageRequest::new("a cat"), &token)
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(err.message(), "Request was cancelled");
    assert!(started.elapsed() < Duration::from_secs(4));
}
