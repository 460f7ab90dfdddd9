//! Factor derivation, rule-based scoring, and recommendations over a
//! normalized answer set, plus the service and HTTP surface around them.

pub mod domain;
pub mod factors;
pub mod guardrail;
pub mod recognition;
pub mod recommendations;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{round_confidence, FactorTag, RiskLevel};
pub use factors::{derive_factors, FactorDerivation};
pub use guardrail::{CompletenessGuard, GuardrailPolicy, GuardrailViolation};
pub use recognition::{PlainTextRecognizer, Recognition, RecognitionError, TextRecognizer};
pub use recommendations::generate_recommendations;
pub use router::assessment_router;
pub use scoring::{score_factors, ScoreComponent, ScoreInfo};
pub use service::{ProfileReport, ProfilerServiceError, RiskProfilerService};

use crate::workflows::intake::{AnswerSet, BooleanParsing};
use serde::Serialize;

/// Everything derived from one answer set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub factors: FactorDerivation,
    pub score: ScoreInfo,
    pub recommendations: Vec<String>,
}

/// Scoring and recommendations both read the same factor list.
pub fn assess(answers: &AnswerSet, parsing: BooleanParsing) -> Assessment {
    let factors = derive_factors(answers, parsing);
    let score = score_factors(&factors.factors);
    let recommendations = generate_recommendations(&factors.factors);

    Assessment {
        factors,
        score,
        recommendations,
    }
}
