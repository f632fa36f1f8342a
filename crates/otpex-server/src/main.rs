//! SMS webhook service exposing OTP extraction over HTTP.
//!
//! Routes:
//! - `POST /webhook`: Twilio-style form-encoded SMS webhook
//! - `POST /test`: ad-hoc extraction for a JSON message body
//! - `GET /api/messages`: recent processed messages
//! - `GET /healthz`: liveness probe

mod history;

use std::env;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use otpex_core::{ExtractionResult, OtpExtractor};

use history::{MessageHistory, MessageRecord};

/// Messages returned by `GET /api/messages`.
const RECENT_MESSAGES: usize = 20;

#[derive(Clone)]
struct AppState {
    extractor: Arc<OtpExtractor>,
    history: Arc<Mutex<MessageHistory>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let bind = env::var("OTPEX_HTTP_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let addr: SocketAddr = bind.parse()?;
    let history_cap = history_cap_from_env();

    let state = AppState {
        extractor: Arc::new(OtpExtractor::new()),
        history: Arc::new(Mutex::new(MessageHistory::new(history_cap))),
    };

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/webhook", post(sms_webhook))
        .route("/test", post(test_extraction))
        .route("/api/messages", get(api_messages))
        .with_state(state);

    info!("otpex-server listening on http://{addr} (history_cap={history_cap})");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn history_cap_from_env() -> usize {
    env::var("OTPEX_HISTORY_CAP")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| (1..=10_000).contains(v))
        .unwrap_or(100)
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Twilio SMS webhook payload.
#[derive(Debug, Deserialize)]
struct WebhookForm {
    #[serde(rename = "From")]
    from: Option<String>,
    #[serde(rename = "Body")]
    body: Option<String>,
}

async fn sms_webhook(
    State(state): State<AppState>,
    Form(form): Form<WebhookForm>,
) -> (StatusCode, &'static str) {
    let Some(body) = form.body.map(|b| b.trim().to_string()) else {
        warn!("webhook request without a Body field");
        return (StatusCode::BAD_REQUEST, "missing Body");
    };

    let extracted = state.extractor.extract(&body);
    info!(
        from = form.from.as_deref().unwrap_or("unknown"),
        otp = extracted.otp.as_deref().unwrap_or("-"),
        confidence = extracted.confidence,
        "webhook message processed"
    );

    let record = MessageRecord {
        timestamp: Utc::now(),
        from_number: form.from,
        body,
        extracted,
    };

    match state.history.lock() {
        Ok(mut history) => history.push(record),
        Err(_) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, "history lock poisoned");
        }
    }

    (StatusCode::OK, "OK")
}

#[derive(Debug, Deserialize)]
struct TestRequest {
    #[serde(default)]
    sms: String,
}

async fn test_extraction(
    State(state): State<AppState>,
    Json(request): Json<TestRequest>,
) -> Json<ExtractionResult> {
    Json(state.extractor.extract_detailed(&request.sms))
}

async fn api_messages(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.history.lock() {
        Ok(history) => {
            let messages = history.recent(RECENT_MESSAGES);
            (StatusCode::OK, Json(json!({ "messages": messages })))
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "history lock poisoned" })),
        ),
    }
}
