use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::Deserialize;
use tracing::error;

use super::recognition::TextRecognizer;
use super::service::{ProfileReport, RiskProfilerService};
use crate::error::AppError;
use crate::workflows::intake::SubmittedAnswers;

/// Pre-structured survey answers as posted by form front-ends. Keys keep
/// their submitted order so a repeated key resolves to its last value.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswersRequest {
    pub answers: SubmittedAnswers,
}

/// Router builder exposing the structured and document endpoints.
pub fn assessment_router<T>(service: Arc<RiskProfilerService<T>>) -> Router
where
    T: TextRecognizer + 'static,
{
    Router::new()
        .route("/analyze-text", post(analyze_text_handler::<T>))
        .route("/analyze-image", post(analyze_image_handler::<T>))
        .with_state(service)
}

pub(crate) async fn analyze_text_handler<T>(
    State(service): State<Arc<RiskProfilerService<T>>>,
    Json(request): Json<AnswersRequest>,
) -> Result<Json<ProfileReport>, AppError>
where
    T: TextRecognizer + 'static,
{
    let report = service.analyze_answers(request.answers)?;
    Ok(Json(report))
}

/// Recognition may block, so it runs on the blocking pool.
pub(crate) async fn analyze_image_handler<T>(
    State(service): State<Arc<RiskProfilerService<T>>>,
    body: Bytes,
) -> Result<Json<ProfileReport>, AppError>
where
    T: TextRecognizer + 'static,
{
    let report = tokio::task::spawn_blocking(move || service.analyze_document(&body))
        .await
        .map_err(|error| {
            error!(%error, "document analysis task failed");
            AppError::Server(axum::Error::new(error))
        })??;
    Ok(Json(report))
}
