use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use folio_api::{build_app, ApiConfig, RateLimitConfig};
use folio_core::{
    fallback_response, response_for, unavailable_message, welcome_message, Intent, Locale,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_app(&ApiConfig::default())
}

async fn post_chat(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_lists_locales() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["locales"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn meeting_request_gets_meeting_response() {
    let (status, body) = post_chat(
        app(),
        json!({ "message": "what's your availability for a meeting", "locale": "en" }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], response_for(Intent::Meeting, Locale::En));
    assert_eq!(body["intent"], "meeting");
    assert_eq!(body["locale"], "en");
}

#[tokio::test]
async fn hindi_greeting_is_localized() {
    let (status, body) =
        post_chat(app(), json!({ "message": "नमस्कार", "locale": "hi" }).to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], response_for(Intent::Greeting, Locale::Hi));
}

#[tokio::test]
async fn unknown_locale_answers_in_english() {
    let (_, body) = post_chat(
        app(),
        json!({ "message": "How do I contact you?", "locale": "tlh" }).to_string(),
    )
    .await;

    assert_eq!(body["response"], response_for(Intent::Contact, Locale::En));
    assert_eq!(body["locale"], "en");
}

#[tokio::test]
async fn malformed_payloads_fall_back_without_error() {
    let payloads = [
        "".to_string(),
        "{not json".to_string(),
        json!({ "locale": "od" }).to_string(),
        json!({ "message": 12, "locale": "sa" }).to_string(),
    ];
    let expected = [
        fallback_response(Locale::En),
        fallback_response(Locale::En),
        fallback_response(Locale::Od),
        fallback_response(Locale::Sa),
    ];

    for (payload, expected) in payloads.into_iter().zip(expected) {
        let (status, body) = post_chat(app(), payload.clone()).await;
        assert_eq!(status, StatusCode::OK, "payload {payload:?}");
        assert_eq!(body["response"], expected, "payload {payload:?}");
        assert!(body["intent"].is_null());
    }
}

#[tokio::test]
async fn welcome_endpoint_uses_requested_locale() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/chat/welcome?locale=od")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["message"], welcome_message(Locale::Od));
    assert_eq!(parsed["locale"], "od");
}

#[tokio::test]
async fn rate_limit_is_opt_in() {
    let app = build_app(&ApiConfig {
        rate_limit: Some(RateLimitConfig {
            window: Duration::from_secs(60),
            max_requests: 2,
        }),
        ..ApiConfig::default()
    });

    for _ in 0..2 {
        let (status, _) = post_chat(app.clone(), json!({ "message": "thanks" }).to_string()).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = post_chat(app.clone(), json!({ "message": "thanks" }).to_string()).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], "rate_limited");
    assert!(body["response"].is_string());

    let unlimited = self::app();
    for _ in 0..5 {
        let (status, _) =
            post_chat(unlimited.clone(), json!({ "message": "thanks" }).to_string()).await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn rate_limited_reply_is_readable_cross_origin_and_localized() {
    let app = build_app(&ApiConfig {
        rate_limit: Some(RateLimitConfig {
            window: Duration::from_secs(60),
            max_requests: 1,
        }),
        ..ApiConfig::default()
    });

    let request = || {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .header("origin", "http://localhost:3000")
            .header("accept-language", "hi-IN,hi;q=0.9")
            .body(Body::from(json!({ "message": "thanks" }).to_string()))
            .unwrap()
    };

    let first = app.clone().oneshot(request()).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let limited = app.oneshot(request()).await.unwrap();
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        limited
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert!(limited.headers().contains_key("retry-after"));

    let body = to_bytes(limited.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["response"], unavailable_message(Locale::Hi));
    assert_eq!(parsed["locale"], "hi");
}

#[tokio::test]
async fn health_reports_served_intents() {
    let app = app();
    post_chat(app.clone(), json!({ "message": "Can we schedule a call?" }).to_string()).await;
    post_chat(app.clone(), json!({ "message": "asdkjasd" }).to_string()).await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let parsed: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(parsed["metrics"]["requests_total"], 2);
    assert_eq!(parsed["metrics"]["fallback_total"], 1);
    assert_eq!(parsed["metrics"]["intent_hits"]["meeting"], 1);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = build_app(&ApiConfig {
        max_body_bytes: 64,
        ..ApiConfig::default()
    });
    let message = "a".repeat(256);

    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "message": message }).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
