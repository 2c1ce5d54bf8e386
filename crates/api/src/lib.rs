mod config;
mod rate_limit;

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::{Json, Query, State};
use axum::http::{header, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use folio_agents::ChatAssistant;
use folio_core::{unavailable_message, ChatInput, Intent, Locale};
use folio_observability::{AppMetrics, MetricsSnapshot};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub use crate::config::{ApiConfig, RateLimitConfig};
use crate::rate_limit::IpRateLimiter;

#[derive(Clone)]
pub struct ApiState {
    pub assistant: Arc<ChatAssistant>,
    pub metrics: Arc<AppMetrics>,
    limiter: Option<IpRateLimiter>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: MetricsSnapshot,
    locales: Vec<LocaleInfo>,
}

#[derive(Debug, Serialize)]
struct LocaleInfo {
    code: &'static str,
    name: &'static str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub intent: Option<Intent>,
    pub locale: Locale,
}

#[derive(Debug, Clone, Deserialize)]
struct WelcomeQuery {
    locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub locale: Locale,
}

impl ApiState {
    pub fn new(assistant: Arc<ChatAssistant>, rate_limit: Option<RateLimitConfig>) -> Self {
        Self {
            metrics: assistant.metrics().clone(),
            assistant,
            limiter: rate_limit.map(IpRateLimiter::new),
        }
    }
}

pub fn build_app(config: &ApiConfig) -> Router {
    let assistant = Arc::new(ChatAssistant::keyword(AppMetrics::shared()));
    build_router(ApiState::new(assistant, config.rate_limit), config)
}

pub fn build_router(state: ApiState, config: &ApiConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat))
        .route("/api/chat/welcome", get(welcome))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .layer(build_cors_layer(&config.allowed_origins))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(RequestBodyLimitLayer::new(config.max_body_bytes)),
        )
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
        locales: Locale::ALL
            .iter()
            .map(|locale| LocaleInfo {
                code: locale.as_code(),
                name: locale.display_name(),
            })
            .collect(),
    };
    (StatusCode::OK, Json(payload))
}

/// Takes the raw body so that malformed payloads degrade to an empty
/// message instead of an extractor rejection.
async fn chat(State(state): State<ApiState>, body: Bytes) -> impl IntoResponse {
    let input = chat_input_from_body(&body);
    let reply = state.assistant.handle_chat(&input);

    Json(ChatResponse {
        response: reply.response,
        intent: reply.intent,
        locale: reply.locale,
    })
}

async fn welcome(
    State(state): State<ApiState>,
    Query(query): Query<WelcomeQuery>,
) -> impl IntoResponse {
    let locale = Locale::from_optional_str(query.locale.as_deref());
    Json(WelcomeResponse {
        message: state.assistant.welcome(locale).to_string(),
        locale,
    })
}

fn chat_input_from_body(body: &[u8]) -> ChatInput {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        if !body.is_empty() {
            warn!(bytes = body.len(), "chat body is not valid json; treating as empty message");
        }
        return ChatInput::default();
    };

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let locale = value.get("locale").and_then(Value::as_str);

    ChatInput::new(message, locale)
}

fn build_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();
    let origins = if origins.is_empty() {
        vec![HeaderValue::from_static("http://localhost:3000")]
    } else {
        origins
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(limiter) = state.limiter.as_ref() else {
        return next.run(request).await;
    };
    if request.method() == Method::OPTIONS || request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let ip = request_ip(&request);
    if let Err(retry_after) = limiter.check(&ip) {
        state.metrics.inc_rate_limited();
        let locale = request_locale(&request);
        warn!(ip = %ip, retry_after_secs = retry_after.as_secs(), "rate limit exceeded");

        let mut response = (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({
                "error": "rate_limited",
                "response": unavailable_message(locale),
                "locale": locale,
            })),
        )
            .into_response();
        response.headers_mut().insert(
            header::RETRY_AFTER,
            HeaderValue::from(retry_after.as_secs().max(1)),
        );
        return response;
    }

    next.run(request).await
}

fn request_ip(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(',')
                .next()
                .unwrap_or("unknown")
                .trim()
                .to_string()
        })
        .unwrap_or_else(|| "local".to_string())
}

/// First language tag of `Accept-Language`; the body is not read here.
fn request_locale(request: &Request<Body>) -> Locale {
    let first_tag = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|tag| tag.split(';').next().unwrap_or_default());
    Locale::from_optional_str(first_tag)
}

async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;

    response.headers_mut().insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    response.headers_mut().insert(
        header::HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );
    response.headers_mut().insert(
        header::HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    response.headers_mut().insert(
        header::HeaderName::from_static("content-security-policy"),
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
    );

    response
}
