use std::sync::{Arc, Mutex};
use std::thread::ThreadId;

use axum::response::Response;
use serde_json::Value;

use crate::config::ProfilerConfig;
use crate::workflows::assessment::guardrail::{CompletenessGuard, GuardrailPolicy};
use crate::workflows::assessment::recognition::{
    PlainTextRecognizer, Recognition, RecognitionError, TextRecognizer,
};
use crate::workflows::assessment::{assessment_router, RiskProfilerService};
use crate::workflows::intake::{AnswerSet, AnswerValue, BooleanParsing};

pub(super) const SCANNED_FORM: &str = "Age: 65\nSmoker: no\nExercise: daily jogging\nDiet: balanced\nAlcohol: none\nMedical History: none";

pub(super) fn high_risk_answers() -> Vec<(&'static str, AnswerValue)> {
    vec![
        ("AGE", AnswerValue::Integer(45)),
        ("SMOKER", AnswerValue::Boolean(true)),
        ("EXERCISE", AnswerValue::from("rarely")),
        ("DIET", AnswerValue::from("fast food daily")),
        ("ALCOHOL", AnswerValue::from("often")),
        ("MEDICAL_HISTORY", AnswerValue::from("none")),
    ]
}

pub(super) fn healthy_answers() -> Vec<(&'static str, AnswerValue)> {
    vec![
        ("age", AnswerValue::Integer(25)),
        ("smoker", AnswerValue::Boolean(false)),
        ("exercise", AnswerValue::from("daily")),
        ("diet", AnswerValue::from("balanced")),
        ("alcohol", AnswerValue::from("none")),
        ("medical_history", AnswerValue::from("none")),
    ]
}

pub(super) fn answer_set(pairs: Vec<(&'static str, AnswerValue)>) -> AnswerSet {
    pairs.into_iter().collect()
}

pub(super) fn profiler_config() -> ProfilerConfig {
    ProfilerConfig::default()
}

pub(super) fn guard() -> CompletenessGuard {
    CompletenessGuard::with_policy(GuardrailPolicy::default())
}

pub(super) fn build_service() -> RiskProfilerService<PlainTextRecognizer> {
    RiskProfilerService::new(Arc::new(PlainTextRecognizer), &profiler_config())
}

pub(super) fn strict_service() -> RiskProfilerService<PlainTextRecognizer> {
    let config = ProfilerConfig {
        boolean_parsing: BooleanParsing::Strict,
        ..profiler_config()
    };
    RiskProfilerService::new(Arc::new(PlainTextRecognizer), &config)
}

/// Recognizer returning a fixed transcription regardless of the upload.
pub(super) struct FixedRecognizer {
    pub(super) text: &'static str,
    pub(super) confidence: f64,
}

impl TextRecognizer for FixedRecognizer {
    fn recognize(&self, _document: &[u8]) -> Result<Recognition, RecognitionError> {
        Ok(Recognition {
            text: self.text.to_string(),
            confidence: self.confidence,
        })
    }
}

pub(super) struct OfflineRecognizer;

impl TextRecognizer for OfflineRecognizer {
    fn recognize(&self, _document: &[u8]) -> Result<Recognition, RecognitionError> {
        Err(RecognitionError::Unavailable("engine not loaded".to_string()))
    }
}

/// Transcribes a complete form and remembers which thread it ran on.
#[derive(Default)]
pub(super) struct ThreadRecordingRecognizer {
    thread: Mutex<Option<ThreadId>>,
}

impl ThreadRecordingRecognizer {
    pub(super) fn recognized_on(&self) -> Option<ThreadId> {
        *self.thread.lock().expect("thread slot poisoned")
    }
}

impl TextRecognizer for ThreadRecordingRecognizer {
    fn recognize(&self, _document: &[u8]) -> Result<Recognition, RecognitionError> {
        *self.thread.lock().expect("thread slot poisoned") = Some(std::thread::current().id());
        Ok(Recognition {
            text: SCANNED_FORM.to_string(),
            confidence: 0.9,
        })
    }
}

pub(super) fn router_with_service<T>(service: RiskProfilerService<T>) -> axum::Router
where
    T: TextRecognizer + 'static,
{
    assessment_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
