#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test; panics are the assertion mechanism")]

use genrelay_core::proxy::identity::{IdentityVerifier, TokenInfoVerifier};
use genrelay_core::proxy::upstream::{GeminiUpstream, GenerationUpstream};
use genrelay_types::{GenerationRequest, IdentityError, UpstreamCredential, UpstreamError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gemini_success_body() -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{"text": "Hello from mock!"}],
                "role": "model"
            },
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 4, "totalTokenCount": 7}
    })
}

fn credential() -> UpstreamCredential {
    UpstreamCredential::new("test-api-key").expect("non-blank")
}

fn upstream_for(server: &MockServer) -> GeminiUpstream {
    GeminiUpstream::new(reqwest::Client::new(), format!("{}/v1beta", server.uri()))
}

#[tokio::test]
async fn test_generate_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-api-key"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Hi"}]}],
            "generationConfig": {"temperature": 0.5}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success_body()))
        .expect(1)
        .mount(&server)
        .await;

    let request = GenerationRequest::new("gemini-2.5-flash", json!("Hi"))
        .with_config(json!({"temperature": 0.5}));
    let result = upstream_for(&server)
        .generate(&credential(), &request)
        .await
        .expect("200 scenario should succeed");

    assert_eq!(result.text.as_deref(), Some("Hello from mock!"));
    assert_eq!(result.candidates.expect("candidates")[0]["finishReason"], "STOP");
    assert_eq!(result.usage_metadata.expect("usage")["totalTokenCount"], 7);
}

#[tokio::test]
async fn test_generate_error_status_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = upstream_for(&server)
        .generate(&credential(), &GenerationRequest::new("m", json!("Hi")))
        .await
        .expect_err("429 should surface as an error");

    assert_eq!(
        err,
        UpstreamError::Http { status: 429, message: "Resource exhausted".to_string() }
    );
}

#[tokio::test]
async fn test_generate_plain_text_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = upstream_for(&server)
        .generate(&credential(), &GenerationRequest::new("m", json!("Hi")))
        .await
        .expect_err("500 should surface as an error");

    assert_eq!(err.message(), "Internal Server Error");
}

#[tokio::test]
async fn test_generate_non_json_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"))
        .mount(&server)
        .await;

    let err = upstream_for(&server)
        .generate(&credential(), &GenerationRequest::new("m", json!("Hi")))
        .await
        .expect_err("non-JSON body should fail");

    assert!(matches!(err, UpstreamError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_generate_transport_failure() {
    let upstream = GeminiUpstream::new(reqwest::Client::new(), "http://127.0.0.1:9/v1beta");
    let err = upstream
        .generate(&credential(), &GenerationRequest::new("m", json!("Hi")))
        .await
        .expect_err("closed port should fail");

    assert!(matches!(err, UpstreamError::Transport { .. }));
    assert!(!err.message().contains("test-api-key"));
}

#[tokio::test]
async fn test_tokeninfo_accepts_valid_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tokeninfo"))
        .and(query_param("id_token", "good-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sub": "1234567890",
            "email": "someone@example.com",
            "aud": "my-project",
            "exp": "99999999999"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let verifier = TokenInfoVerifier::new(
        reqwest::Client::new(),
        format!("{}/tokeninfo", server.uri()),
        Some("my-project".to_string()),
    );
    let identity = verifier.verify("good-token").await.expect("token should verify");

    assert_eq!(identity.subject, "1234567890");
    assert_eq!(identity.email.as_deref(), Some("someone@example.com"));
}

#[tokio::test]
async fn test_tokeninfo_rejects_on_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tokeninfo"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_token",
            "error_description": "Invalid Value"
        })))
        .mount(&server)
        .await;

    let verifier =
        TokenInfoVerifier::new(reqwest::Client::new(), format!("{}/tokeninfo", server.uri()), None);
    let err = verifier.verify("bad-token").await.expect_err("400 should reject");

    assert!(matches!(err, IdentityError::Invalid { .. }));
    assert!(!err.to_string().contains("bad-token"));
}

#[tokio::test]
async fn test_tokeninfo_rejects_expired_and_wrong_audience() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("id_token", "expired"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"sub": "u", "exp": 1_000_000})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("id_token", "foreign"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"sub": "u", "aud": "other-project"})),
        )
        .mount(&server)
        .await;

    let url = format!("{}/tokeninfo", server.uri());
    let without_audience = TokenInfoVerifier::new(reqwest::Client::new(), url.clone(), None);
    let with_audience =
        TokenInfoVerifier::new(reqwest::Client::new(), url, Some("my-project".to_string()));

    assert_eq!(
        without_audience.verify("expired").await.expect_err("expired"),
        IdentityError::Expired { expired_at: 1_000_000 }
    );
    assert_eq!(
        with_audience.verify("foreign").await.expect_err("foreign"),
        IdentityError::AudienceMismatch { audience: "other-project".to_string() }
    );
}

#[tokio::test]
async fn test_tokeninfo_transport_failure_rejects() {
    let verifier = TokenInfoVerifier::new(
        reqwest::Client::new(),
        "http://127.0.0.1:9/tokeninfo".to_string(),
        None,
    );
    let err = verifier.verify("secret-token").await.expect_err("closed port should reject");

    assert!(matches!(err, IdentityError::Transport { .. }));
    assert!(!err.to_string().contains("secret-token"));
}
