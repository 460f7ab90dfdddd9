mod policy;
mod rules;

use super::domain::{FactorTag, RiskLevel};
use serde::{Deserialize, Serialize};

/// Discrete contribution to a score, kept for audit trails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: FactorTag,
    pub points: u8,
    pub reason: String,
}

/// Clamped score, its bucket, and the reasons behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInfo {
    pub score: u8,
    pub risk_level: RiskLevel,
    pub rationale: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

/// Apply the weighted rule table to a factor list. The order of `factors`
/// does not matter; rationale always follows the rule table.
pub fn score_factors(factors: &[FactorTag]) -> ScoreInfo {
    let components = rules::score_components(factors);
    let raw: u32 = components
        .iter()
        .map(|component| u32::from(component.points))
        .sum();
    let score = policy::clamp_score(raw);

    ScoreInfo {
        score,
        risk_level: policy::risk_level_for(score),
        rationale: components
            .iter()
            .map(|component| component.reason.clone())
            .collect(),
        components,
    }
}
