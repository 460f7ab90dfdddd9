use crate::workflows::intake::{missing_fields, AnswerSet, REQUIRED_FIELDS};

/// Raised when too few canonical fields survived extraction to score.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GuardrailViolation {
    #[error(">{:.0}% fields missing", .max_missing_ratio * 100.0)]
    IncompleteProfile {
        missing_fields: Vec<String>,
        missing_ratio: f64,
        max_missing_ratio: f64,
    },
}

/// Completeness threshold applied before scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardrailPolicy {
    max_missing_ratio: f64,
}

impl GuardrailPolicy {
    pub const DEFAULT_MAX_MISSING_RATIO: f64 = 0.5;

    pub fn new(max_missing_ratio: f64) -> Self {
        let sanitized = if max_missing_ratio.is_finite() && (0.0..=1.0).contains(&max_missing_ratio)
        {
            max_missing_ratio
        } else {
            Self::DEFAULT_MAX_MISSING_RATIO
        };

        Self {
            max_missing_ratio: sanitized,
        }
    }

    pub fn max_missing_ratio(&self) -> f64 {
        self.max_missing_ratio
    }
}

impl Default for GuardrailPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_MISSING_RATIO)
    }
}

/// Rejects answer sets missing more than the allowed share of fields.
#[derive(Debug, Clone, Default)]
pub struct CompletenessGuard {
    policy: GuardrailPolicy,
}

impl CompletenessGuard {
    pub fn with_policy(policy: GuardrailPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GuardrailPolicy {
        &self.policy
    }

    pub fn check(&self, answers: &AnswerSet) -> Result<(), GuardrailViolation> {
        let missing = missing_fields(answers);
        let missing_ratio = missing.len() as f64 / REQUIRED_FIELDS.len() as f64;

        if missing_ratio > self.policy.max_missing_ratio {
            return Err(GuardrailViolation::IncompleteProfile {
                missing_fields: missing,
                missing_ratio,
                max_missing_ratio: self.policy.max_missing_ratio,
            });
        }

        Ok(())
    }
}
