use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::assessment::{GuardrailViolation, ProfilerServiceError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Input(serde_json::Error),
    Profiler(ProfilerServiceError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Input(err) => write!(f, "invalid survey input: {}", err),
            AppError::Profiler(err) => write!(f, "profiler error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Profiler(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Profiler(ProfilerServiceError::IncompleteProfile {
                violation,
                answers,
                raw_text,
            }) => {
                let mut payload = json!({
                    "status": "incomplete_profile",
                    "reason": violation.to_string(),
                });
                match raw_text {
                    Some(text) => payload["raw_text"] = json!(text),
                    None => payload["answers"] = json!(answers),
                }
                let GuardrailViolation::IncompleteProfile { missing_fields, .. } = violation;
                payload["missing_fields"] = json!(missing_fields);
                (StatusCode::BAD_REQUEST, Json(payload)).into_response()
            }
            AppError::Profiler(ProfilerServiceError::ExtractionFailed(error)) => {
                let payload = json!({
                    "status": "extraction_failed",
                    "reason": error.to_string(),
                });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
            }
            AppError::Input(_) => {
                let body = Json(json!({ "error": self.to_string() }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => {
                let body = Json(json!({ "error": self.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value)
    }
}

impl From<ProfilerServiceError> for AppError {
    fn from(value: ProfilerServiceError) -> Self {
        Self::Profiler(value)
    }
}
