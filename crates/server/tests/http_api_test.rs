mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::{stub_dispatcher, StubProvider, FROM_NUMBER};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use twilio_sms_server::http;

fn setup(provider: StubProvider) -> (Arc<StubProvider>, Router) {
    let (provider, dispatcher) = stub_dispatcher(provider);
    (provider, http::router(dispatcher))
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (_provider, app) = setup(StubProvider::default());

    let (status, body) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "service": "Twilio SMS API" }));
}

#[tokio::test]
async fn test_index_lists_endpoints() {
    let (_provider, app) = setup(StubProvider::default());

    let (status, body) = get_json(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "Twilio SMS API");
    assert!(body["endpoints"]["GET /health"].is_string());
    assert!(body["endpoints"]["POST /send-sms"].is_string());
    assert!(body["endpoints"]["POST /send-greeting"].is_string());
    assert_eq!(body["example"]["sendSms"]["url"], "/send-sms");
}

#[tokio::test]
async fn test_send_sms_success() {
    let (provider, app) = setup(StubProvider::default());

    let (status, body) = post_json(
        app,
        "/send-sms",
        r#"{"to":"+11234567890","message":"hi"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Message sent successfully");
    assert_eq!(body["messageSid"], "SM123");
    assert_eq!(body["to"], "+11234567890");
    assert_eq!(body["from"], FROM_NUMBER);

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].body, "hi");
}

#[tokio::test]
async fn test_send_sms_rejects_number_without_plus() {
    let (provider, app) = setup(StubProvider::default());

    let (status, body) =
        post_json(app, "/send-sms", r#"{"to":"1234567890","message":"hi"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("E.164 format"));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_send_sms_schema_failures() {
    for payload in [
        r#"{"to":"+11234567890"}"#,
        r#"{"to":12345,"message":"hi"}"#,
        r#"not json"#,
    ] {
        let (provider, app) = setup(StubProvider::default());
        let (status, body) = post_json(app, "/send-sms", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body["error"], "Invalid request data");
        assert!(body["details"].is_string());
        assert!(provider.calls().is_empty());
    }
}

#[tokio::test]
async fn test_send_sms_provider_failure() {
    let (_provider, app) = setup(StubProvider::failing("Authenticate"));

    let (status, body) = post_json(
        app,
        "/send-sms",
        r#"{"to":"+11234567890","message":"hi"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "Failed to send message", "details": "Authenticate" })
    );
}

/// Empty bodies pass straight through to the provider
#[tokio::test]
async fn test_send_sms_empty_message_forwarded() {
    let (provider, app) = setup(StubProvider::default());

    let (status, _body) =
        post_json(app, "/send-sms", r#"{"to":"+11234567890","message":""}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.calls()[0].body, "");
}

#[tokio::test]
async fn test_send_greeting_default_template() {
    let (provider, app) = setup(StubProvider::default());

    let (status, body) = post_json(
        app,
        "/send-greeting",
        r#"{"to":"+11234567890","occasion":"birthday"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Greeting sent successfully");
    assert_eq!(body["messageSid"], "SM123");
    assert_eq!(body["occasion"], "birthday");
    assert_eq!(body["to"], "+11234567890");

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].body,
        "Wishing you a wonderful birthday! Hope your day is filled with joy and happiness."
    );
}

#[tokio::test]
async fn test_send_greeting_custom_message() {
    let (provider, app) = setup(StubProvider::default());

    let (status, _body) = post_json(
        app,
        "/send-greeting",
        r#"{"to":"+11234567890","occasion":"anniversary","customMessage":"Ten years!"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.calls()[0].body, "Ten years!");
}

#[tokio::test]
async fn test_send_greeting_missing_fields() {
    for payload in [
        r#"{"to":"+11234567890"}"#,
        r#"{"occasion":"birthday"}"#,
        r#"{"to":"","occasion":"birthday"}"#,
    ] {
        let (provider, app) = setup(StubProvider::default());
        let (status, body) = post_json(app, "/send-greeting", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
        assert_eq!(body["error"], "Missing required fields: 'to' and 'occasion'");
        assert!(provider.calls().is_empty());
    }
}

#[tokio::test]
async fn test_send_greeting_invalid_number() {
    let (provider, app) = setup(StubProvider::default());

    let (status, body) = post_json(
        app,
        "/send-greeting",
        r#"{"to":"5551234","occasion":"birthday"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Phone number must be in E.164 format (e.g., +11234567890)"
    );
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_send_greeting_provider_failure() {
    let (_provider, app) = setup(StubProvider::failing("Queue overflow"));

    let (status, body) = post_json(
        app,
        "/send-greeting",
        r#"{"to":"+11234567890","occasion":"holiday"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to send greeting");
    assert_eq!(body["details"], "Queue overflow");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (_provider, app) = setup(StubProvider::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://example.org")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
