use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use lovematch::compatibility::{CompatibilityBreakdown, CompatibilityScorer, CompatibilityTier};
use lovematch::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

const MISSING_NAMES: &str = "please provide both names";

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CompatibilityRequest {
    #[serde(default)]
    pub(crate) name1: Option<String>,
    #[serde(default)]
    pub(crate) name2: Option<String>,
    #[serde(default)]
    pub(crate) include_breakdown: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompatibilityResponse {
    pub(crate) compatibility: u8,
    pub(crate) tier: CompatibilityTier,
    pub(crate) message: &'static str,
    pub(crate) checked_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) breakdown: Option<CompatibilityBreakdown>,
}

pub(crate) fn compatibility_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/compatibility", post(compatibility_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.is_ready();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn compatibility_endpoint(
    Json(payload): Json<CompatibilityRequest>,
) -> Result<Json<CompatibilityResponse>, AppError> {
    let CompatibilityRequest {
        name1,
        name2,
        include_breakdown,
    } = payload;

    let name1 = required_name(name1)?;
    let name2 = required_name(name2)?;
    debug!(%name1, %name2, "scoring name pair");

    let breakdown = CompatibilityScorer::new().evaluate(&name1, &name2);
    let tier = breakdown.tier;
    info!(
        compatibility = breakdown.compatibility,
        tier = tier.label(),
        "compatibility calculated"
    );

    Ok(Json(CompatibilityResponse {
        compatibility: breakdown.compatibility,
        tier,
        message: tier.message(),
        checked_at: Utc::now(),
        breakdown: include_breakdown.then_some(breakdown),
    }))
}

/// Blank or absent names are rejected here; the scorer itself accepts them.
fn required_name(value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(AppError::InvalidRequest(MISSING_NAMES.to_string())),
    }
}
