use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use health_risk::workflows::assessment::{assessment_router, RiskProfilerService, TextRecognizer};
use health_risk::workflows::intake::REQUIRED_FIELDS;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_assessment_routes<T>(service: Arc<RiskProfilerService<T>>) -> axum::Router
where
    T: TextRecognizer + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/fields", axum::routing::get(required_fields_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
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

/// Lets form builders and the guardrail client agree on the canonical fields.
pub(crate) async fn required_fields_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "required_fields": REQUIRED_FIELDS }))
}
