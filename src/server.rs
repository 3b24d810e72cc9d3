//! HTTP transport: receives platform envelopes and answers with the skill's
//! response envelope.

use crate::config::Config;
use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::security::verify_secret;
use crate::skill::Skill;
use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Duration, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Header carrying the shared secret when one is configured.
pub const SECRET_HEADER: &str = "x-skill-secret";

pub struct AppState {
    pub skill: Skill,
    pub secret: Option<String>,
    pub tolerance: Duration,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            skill: config.build_skill()?,
            secret: config.skill_secret.clone(),
            tolerance: Duration::try_seconds(i64::from(config.request_tolerance_secs))
                .context("REQUEST_TOLERANCE_SECS is out of range")?,
        })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/skill", post(handle_skill))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

/// True if `timestamp` is within `tolerance` of `now` (either direction).
/// Requests without a timestamp are accepted.
pub fn timestamp_is_fresh(
    timestamp: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    tolerance: Duration,
) -> bool {
    match timestamp {
        Some(ts) => (now - ts).abs() <= tolerance,
        None => true,
    }
}

async fn handle_skill(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(envelope): Json<RequestEnvelope>,
) -> Result<Json<ResponseEnvelope>, (StatusCode, &'static str)> {
    let provided = headers
        .get(SECRET_HEADER)
        .and_then(|value| value.to_str().ok());
    if !verify_secret(state.secret.as_deref(), provided) {
        warn!("Rejected skill request with missing or invalid secret");
        return Err((StatusCode::UNAUTHORIZED, "Unauthorized"));
    }

    let request = envelope.request;
    if !timestamp_is_fresh(request.timestamp, Utc::now(), state.tolerance) {
        warn!(
            "Rejected stale request {:?} (timestamp {:?})",
            request.request_id, request.timestamp
        );
        return Err((StatusCode::BAD_REQUEST, "Request timestamp out of tolerance"));
    }

    info!(
        "Received {} (session: {:?}, locale: '{}')",
        request.request_type,
        envelope.session.as_ref().and_then(|s| s.session_id.as_deref()),
        request.locale
    );

    let response = state.skill.dispatch(&request);
    Ok(Json(ResponseEnvelope::from(&response)))
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}

/// Bind the configured port and serve until Ctrl-C.
pub async fn run(config: &Config) -> Result<()> {
    let state = Arc::new(AppState::from_config(config)?);
    info!("Skill ready: {:?}", state.skill);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}/skill", addr);

    serve(listener, state, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutting down");
    })
    .await
}
