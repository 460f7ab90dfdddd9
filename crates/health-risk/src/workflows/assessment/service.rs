use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::domain::{round_confidence, FactorTag, RiskLevel};
use super::guardrail::{CompletenessGuard, GuardrailPolicy, GuardrailViolation};
use super::recognition::{RecognitionError, TextRecognizer};
use super::{assess, Assessment};
use crate::config::ProfilerConfig;
use crate::workflows::intake::{
    extract_structured, extract_text, AnswerSet, AnswerValue, BooleanParsing, CaptureScope,
    SurveyExtraction,
};

/// Combined result handed back to callers for a scored survey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    pub answers: AnswerSet,
    pub missing_fields: Vec<String>,
    pub confidence: f64,
    pub factors: Vec<FactorTag>,
    pub factors_confidence: f64,
    pub risk_level: RiskLevel,
    pub score: u8,
    pub rationale: Vec<String>,
    pub recommendations: Vec<String>,
    pub status: &'static str,
}

impl ProfileReport {
    fn new(
        extraction: SurveyExtraction,
        confidence: f64,
        raw_text: Option<String>,
        assessment: Assessment,
    ) -> Self {
        let Assessment {
            factors,
            score,
            recommendations,
        } = assessment;

        Self {
            raw_text,
            answers: extraction.answers,
            missing_fields: extraction.missing_fields,
            confidence: round_confidence(confidence),
            factors: factors.factors,
            factors_confidence: round_confidence(factors.confidence),
            risk_level: score.risk_level,
            score: score.score,
            rationale: score.rationale,
            recommendations,
            status: "ok",
        }
    }
}

/// Service composing extraction, the completeness guardrail, and scoring.
pub struct RiskProfilerService<T> {
    guard: CompletenessGuard,
    recognizer: Arc<T>,
    parsing: BooleanParsing,
    capture_scope: CaptureScope,
}

impl<T> RiskProfilerService<T>
where
    T: TextRecognizer + 'static,
{
    pub fn new(recognizer: Arc<T>, config: &ProfilerConfig) -> Self {
        let guard =
            CompletenessGuard::with_policy(GuardrailPolicy::new(config.max_missing_ratio));
        Self {
            guard,
            recognizer,
            parsing: config.boolean_parsing,
            capture_scope: config.capture_scope,
        }
    }

    pub fn parsing(&self) -> BooleanParsing {
        self.parsing
    }

    /// Score pre-structured answers (keys in any case).
    pub fn analyze_answers<I, K>(&self, input: I) -> Result<ProfileReport, ProfilerServiceError>
    where
        I: IntoIterator<Item = (K, AnswerValue)>,
        K: AsRef<str>,
    {
        let extraction = extract_structured(input);
        if let Err(violation) = self.guard.check(&extraction.answers) {
            warn!(missing = ?extraction.missing_fields, "structured survey rejected by guardrail");
            return Err(ProfilerServiceError::IncompleteProfile {
                violation,
                answers: extraction.answers,
                raw_text: None,
            });
        }

        let assessment = assess(&extraction.answers, self.parsing);
        let confidence = extraction.confidence;
        let report = ProfileReport::new(extraction, confidence, None, assessment);
        info!(
            score = report.score,
            risk_level = %report.risk_level,
            "structured survey scored"
        );
        Ok(report)
    }

    /// Score text that was already recognized, weighting extraction
    /// confidence by the recognizer's own confidence.
    pub fn analyze_text(
        &self,
        raw_text: String,
        recognition_confidence: f64,
    ) -> Result<ProfileReport, ProfilerServiceError> {
        let extraction = extract_text(&raw_text, self.parsing, self.capture_scope);
        if let Err(violation) = self.guard.check(&extraction.answers) {
            warn!(missing = ?extraction.missing_fields, "free-text survey rejected by guardrail");
            return Err(ProfilerServiceError::IncompleteProfile {
                violation,
                answers: extraction.answers,
                raw_text: Some(raw_text),
            });
        }

        let assessment = assess(&extraction.answers, self.parsing);
        let confidence = recognition_confidence.clamp(0.0, 1.0) * extraction.confidence;
        let report = ProfileReport::new(extraction, confidence, Some(raw_text), assessment);
        info!(
            score = report.score,
            risk_level = %report.risk_level,
            "free-text survey scored"
        );
        Ok(report)
    }

    /// Recognize an uploaded document, then score its text.
    pub fn analyze_document(&self, document: &[u8]) -> Result<ProfileReport, ProfilerServiceError> {
        let recognition = self.recognizer.recognize(document).map_err(|error| {
            warn!(%error, bytes = document.len(), "document recognition failed");
            error
        })?;
        debug!(
            chars = recognition.text.len(),
            confidence = recognition.confidence,
            "document recognized"
        );
        self.analyze_text(recognition.text, recognition.confidence)
    }
}

/// Error raised by the profiler service.
#[derive(Debug, thiserror::Error)]
pub enum ProfilerServiceError {
    #[error("incomplete profile: {violation}")]
    IncompleteProfile {
        violation: GuardrailViolation,
        answers: AnswerSet,
        raw_text: Option<String>,
    },
    #[error("extraction failed: {0}")]
    ExtractionFailed(#[from] RecognitionError),
}
