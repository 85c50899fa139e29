#![allow(unused_crate_dependencies)]
#![allow(clippy::expect_used)]

use base64::{engine::general_purpose, Engine as _};
use genrelay_client::{synthesize_speech, ClientConfig, ClientError, ClientMode, GenRelayClient};
use genrelay_types::GenerationRequest;
use serde_json::json;
use std::io::Cursor;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn relay_client(server: &MockServer, token: &str) -> GenRelayClient {
    GenRelayClient::new(ClientConfig::new(ClientMode::relay(
        format!("{}/callGemini", server.uri()),
        token,
    )))
    .expect("client should build")
}

#[tokio::test]
async fn test_relay_mode_posts_request_with_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/callGemini"))
        .and(header("authorization", "Bearer id-token-1"))
        .and(body_json(json!({"model": "gemini-2.5-flash", "contents": "Hi"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "text": "Hello!",
            "usageMetadata": {"totalTokenCount": 5}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = relay_client(&server, "id-token-1")
        .generate(&GenerationRequest::new("gemini-2.5-flash", json!("Hi")))
        .await
        .expect("relay call should succeed");

    assert_eq!(result.text.as_deref(), Some("Hello!"));
    assert!(result.candidates.is_none());
    assert_eq!(result.usage_metadata.expect("usage")["totalTokenCount"], 5);
}

#[tokio::test]
async fn test_relay_mode_surfaces_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Failed to call Gemini API",
            "message": "Resource exhausted"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = relay_client(&server, "id-token-1")
        .generate(&GenerationRequest::new("m", json!("Hi")))
        .await
        .expect_err("500 should surface");

    match err {
        ClientError::Relay { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to call Gemini API: Resource exhausted");
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_relay_mode_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})))
        .mount(&server)
        .await;

    let err = relay_client(&server, "stale")
        .generate(&GenerationRequest::new("m", json!("Hi")))
        .await
        .expect_err("401 should surface");

    assert!(matches!(err, ClientError::Relay { status: 401, ref message } if message == "Unauthorized"));
}

#[tokio::test]
async fn test_direct_mode_calls_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "direct-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "direct"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GenRelayClient::new(ClientConfig::new(ClientMode::Direct {
        api_key: "direct-key".to_string(),
        base_url: format!("{}/v1beta", server.uri()),
    }))
    .expect("client should build");

    let result = client
        .generate(&GenerationRequest::new("gemini-2.5-flash", json!("Hi")))
        .await
        .expect("direct call should succeed");
    assert_eq!(result.text.as_deref(), Some("direct"));
}

#[tokio::test]
async fn test_relayed_speech_to_wave() {
    let samples: [i16; 6] = [0, 1000, -1000, 8000, -8000, 0];
    let pcm: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"inlineData": {
                "mimeType": "audio/L16;codec=pcm;rate=24000",
                "data": general_purpose::STANDARD.encode(&pcm)
            }}]}}]
        })))
        .mount(&server)
        .await;

    let request = GenerationRequest::new("gemini-2.5-flash-preview-tts", json!("Say hi"))
        .with_config(json!({"responseModalities": ["AUDIO"]}));
    let result = relay_client(&server, "id-token-1").generate(&request).await.expect("speech");
    let wave = synthesize_speech(&result).expect("wave");

    let reader = hound::WavReader::new(Cursor::new(wave.into_bytes())).expect("valid WAVE");
    let spec = reader.spec();
    assert_eq!(spec.sample_rate, 24_000);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);

    let decoded: Vec<i16> = reader.into_samples::<i16>().map(|s| s.expect("sample")).collect();
    assert_eq!(decoded.len(), samples.len());
    for (got, want) in decoded.iter().zip(samples.iter()) {
        assert!((i32::from(*got) - i32::from(*want)).abs() <= 1, "{got} vs {want}");
    }
}
