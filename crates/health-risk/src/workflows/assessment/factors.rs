use super::domain::{round_confidence, FactorTag};
use crate::workflows::intake::fields::{AGE, ALCOHOL, DIET, EXERCISE, SMOKER};
use crate::workflows::intake::{AnswerSet, BooleanParsing};
use serde::{Deserialize, Serialize};

const POOR_DIET_KEYWORDS: &[&str] = &["high sugar", "sugar", "junk", "fast food", "fried", "fatty"];
const LOW_EXERCISE_KEYWORDS: &[&str] = &["rare", "never", "rarely", "none"];
const HIGH_ALCOHOL_KEYWORDS: &[&str] = &["often", "daily", "frequent"];

const BASE_CONFIDENCE: f64 = 0.7;
const CONFIDENCE_PER_FACTOR: f64 = 0.15;
const MAX_CONFIDENCE: f64 = 0.99;

/// Ordered factor tags and how confident the derivation is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorDerivation {
    pub factors: Vec<FactorTag>,
    pub confidence: f64,
}

impl FactorDerivation {
    pub fn contains(&self, tag: FactorTag) -> bool {
        self.factors.contains(&tag)
    }
}

pub fn derive_factors(answers: &AnswerSet, parsing: BooleanParsing) -> FactorDerivation {
    let mut factors = Vec::new();

    if answers
        .get(SMOKER)
        .map(|value| value.is_truthy(parsing))
        .unwrap_or(false)
    {
        factors.push(FactorTag::Smoking);
    }

    if text_mentions(answers, DIET, POOR_DIET_KEYWORDS) {
        factors.push(FactorTag::PoorDiet);
    }

    if text_mentions(answers, EXERCISE, LOW_EXERCISE_KEYWORDS) {
        factors.push(FactorTag::LowExercise);
    }

    if text_mentions(answers, ALCOHOL, HIGH_ALCOHOL_KEYWORDS) {
        factors.push(FactorTag::HighAlcohol);
    }

    if let Some(age) = answers.get(AGE).and_then(|value| value.as_integer()) {
        if age >= 60 {
            factors.push(FactorTag::AgeOver60);
        } else if age >= 40 {
            factors.push(FactorTag::AgeOver40);
        }
    }

    let counted = factors.len().min(2) as f64;
    let confidence = round_confidence(
        (BASE_CONFIDENCE + CONFIDENCE_PER_FACTOR * counted).min(MAX_CONFIDENCE),
    );

    FactorDerivation {
        factors,
        confidence,
    }
}

fn text_mentions(answers: &AnswerSet, field: &str, keywords: &[&str]) -> bool {
    answers
        .get(field)
        .and_then(|value| value.as_text())
        .map(|text| {
            let text = text.to_lowercase();
            keywords.iter().any(|keyword| text.contains(keyword))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::intake::AnswerValue;

    fn answers(pairs: &[(&str, AnswerValue)]) -> AnswerSet {
        pairs.iter().cloned().collect()
    }

    #[test]
    fn derives_every_factor_in_fixed_order() {
        let answers = answers(&[
            ("age", AnswerValue::Integer(45)),
            ("smoker", AnswerValue::Boolean(true)),
            ("exercise", AnswerValue::from("rarely")),
            ("diet", AnswerValue::from("Fast Food daily")),
            ("alcohol", AnswerValue::from("often")),
        ]);

        let derivation = derive_factors(&answers, BooleanParsing::Containment);
        assert_eq!(
            derivation.factors,
            vec![
                FactorTag::Smoking,
                FactorTag::PoorDiet,
                FactorTag::LowExercise,
                FactorTag::HighAlcohol,
                FactorTag::AgeOver40,
            ]
        );
        assert_eq!(derivation.confidence, 0.99);
    }

    #[test]
    fn confidence_steps_with_factor_count() {
        let none = derive_factors(&AnswerSet::new(), BooleanParsing::Containment);
        assert!(none.factors.is_empty());
        assert_eq!(none.confidence, 0.7);

        let one = derive_factors(
            &answers(&[("diet", AnswerValue::from("junk"))]),
            BooleanParsing::Containment,
        );
        assert_eq!(one.factors, vec![FactorTag::PoorDiet]);
        assert_eq!(one.confidence, 0.85);
    }

    #[test]
    fn older_bracket_suppresses_younger() {
        for (age, expected) in [
            (39, None),
            (40, Some(FactorTag::AgeOver40)),
            (59, Some(FactorTag::AgeOver40)),
            (60, Some(FactorTag::AgeOver60)),
            (88, Some(FactorTag::AgeOver60)),
        ] {
            let derivation = derive_factors(
                &answers(&[("age", AnswerValue::Integer(age))]),
                BooleanParsing::Containment,
            );
            let brackets: Vec<_> = derivation
                .factors
                .iter()
                .copied()
                .filter(|tag| tag.is_age_bracket())
                .collect();
            assert_eq!(brackets, expected.into_iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn rules_ignore_values_of_the_wrong_kind() {
        let answers = answers(&[
            ("age", AnswerValue::from("sixty-five")),
            ("diet", AnswerValue::Integer(1)),
            ("exercise", AnswerValue::Boolean(false)),
            ("alcohol", AnswerValue::Integer(7)),
        ]);
        let derivation = derive_factors(&answers, BooleanParsing::Containment);
        assert!(derivation.factors.is_empty());
    }

    #[test]
    fn smoker_text_truthiness_follows_parsing_mode() {
        let answers = answers(&[("smoker", AnswerValue::from("no"))]);
        assert!(derive_factors(&answers, BooleanParsing::Containment).contains(FactorTag::Smoking));
        assert!(!derive_factors(&answers, BooleanParsing::Strict).contains(FactorTag::Smoking));
    }

    #[test]
    fn derivation_is_idempotent() {
        let answers = answers(&[
            ("smoker", AnswerValue::Integer(1)),
            ("exercise", AnswerValue::from("never")),
            ("age", AnswerValue::Integer(61)),
        ]);
        let first = derive_factors(&answers, BooleanParsing::Containment);
        let second = derive_factors(&answers, BooleanParsing::Containment);
        assert_eq!(first, second);
    }
}
