use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete risk indicator derived from survey answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FactorTag {
    #[serde(rename = "smoking")]
    Smoking,
    #[serde(rename = "poor diet")]
    PoorDiet,
    #[serde(rename = "low exercise")]
    LowExercise,
    #[serde(rename = "high alcohol")]
    HighAlcohol,
    #[serde(rename = "age>40")]
    AgeOver40,
    #[serde(rename = "age>60")]
    AgeOver60,
}

impl FactorTag {
    pub const ALL: [FactorTag; 6] = [
        FactorTag::Smoking,
        FactorTag::PoorDiet,
        FactorTag::LowExercise,
        FactorTag::HighAlcohol,
        FactorTag::AgeOver40,
        FactorTag::AgeOver60,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FactorTag::Smoking => "smoking",
            FactorTag::PoorDiet => "poor diet",
            FactorTag::LowExercise => "low exercise",
            FactorTag::HighAlcohol => "high alcohol",
            FactorTag::AgeOver40 => "age>40",
            FactorTag::AgeOver60 => "age>60",
        }
    }

    pub fn is_age_bracket(self) -> bool {
        matches!(self, FactorTag::AgeOver40 | FactorTag::AgeOver60)
    }
}

impl fmt::Display for FactorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Categorical bucket for a clamped 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Confidences are reported with two decimals.
pub fn round_confidence(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
