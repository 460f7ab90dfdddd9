use super::super::domain::FactorTag;
use super::ScoreComponent;

/// Points and audit wording for a factor that contributes to the score.
pub(crate) struct ScoreRule {
    pub factor: FactorTag,
    pub points: u8,
    pub reason: &'static str,
}

/// Independent contributions, listed in rationale order.
pub(crate) const ADDITIVE_RULES: &[ScoreRule] = &[
    ScoreRule {
        factor: FactorTag::Smoking,
        points: 30,
        reason: "smoking",
    },
    ScoreRule {
        factor: FactorTag::PoorDiet,
        points: 20,
        reason: "poor diet",
    },
    ScoreRule {
        factor: FactorTag::LowExercise,
        points: 20,
        reason: "low activity",
    },
    ScoreRule {
        factor: FactorTag::HighAlcohol,
        points: 15,
        reason: "high alcohol use",
    },
];

/// Age brackets; only the first matching rule applies.
pub(crate) const AGE_RULES: &[ScoreRule] = &[
    ScoreRule {
        factor: FactorTag::AgeOver60,
        points: 20,
        reason: "age > 60",
    },
    ScoreRule {
        factor: FactorTag::AgeOver40,
        points: 10,
        reason: "age > 40",
    },
];

pub(crate) fn score_components(factors: &[FactorTag]) -> Vec<ScoreComponent> {
    let additive = ADDITIVE_RULES
        .iter()
        .filter(|rule| factors.contains(&rule.factor));
    let age = AGE_RULES
        .iter()
        .find(|rule| factors.contains(&rule.factor));

    additive
        .chain(age)
        .map(|rule| ScoreComponent {
            factor: rule.factor,
            points: rule.points,
            reason: rule.reason.to_string(),
        })
        .collect()
}
