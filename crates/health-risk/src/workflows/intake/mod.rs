//! Survey intake: turns structured answers or recognized free text into a
//! normalized [`AnswerSet`] with a coverage-based confidence.

mod answers;
pub mod fields;
mod normalizer;
mod parser;

pub use answers::{AnswerSet, AnswerValue, BooleanParsing, SubmittedAnswers};
pub use fields::{missing_fields, REQUIRED_FIELDS};
pub use parser::CaptureScope;

use serde::Serialize;
use tracing::debug;

const STRUCTURED_BASE_CONFIDENCE: f64 = 0.7;
const FREE_TEXT_BASE_CONFIDENCE: f64 = 0.6;

/// Normalized answers plus what is still missing and how much to trust them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyExtraction {
    pub answers: AnswerSet,
    pub missing_fields: Vec<String>,
    pub confidence: f64,
}

impl SurveyExtraction {
    fn from_answers(answers: AnswerSet, base_confidence: f64) -> Self {
        let missing_fields = fields::missing_fields(&answers);
        let confidence = fields::coverage_confidence(base_confidence, missing_fields.len());
        Self {
            answers,
            missing_fields,
            confidence,
        }
    }

    pub fn present_count(&self) -> usize {
        REQUIRED_FIELDS.len() - self.missing_fields.len()
    }
}

/// Lowercase keys of pre-structured answers. Values are kept as supplied.
pub fn extract_structured<I, K>(input: I) -> SurveyExtraction
where
    I: IntoIterator<Item = (K, AnswerValue)>,
    K: AsRef<str>,
{
    let answers: AnswerSet = input.into_iter().collect();
    let extraction = SurveyExtraction::from_answers(answers, STRUCTURED_BASE_CONFIDENCE);
    debug!(
        present = extraction.present_count(),
        confidence = extraction.confidence,
        "structured answers normalized"
    );
    extraction
}

/// Heuristically pull survey fields out of recognized text.
pub fn extract_text(
    raw_text: &str,
    parsing: BooleanParsing,
    scope: CaptureScope,
) -> SurveyExtraction {
    let text = normalizer::normalize_text(raw_text);
    let answers = parser::parse_fields(&text, parsing, scope);
    let extraction = SurveyExtraction::from_answers(answers, FREE_TEXT_BASE_CONFIDENCE);
    debug!(
        present = extraction.present_count(),
        confidence = extraction.confidence,
        "free-text answers extracted"
    );
    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn structured_lowercases_keys_and_keeps_values() {
        let extraction = extract_structured([
            ("AGE", AnswerValue::from("forty")),
            ("Smoker", AnswerValue::from(true)),
        ]);

        assert_eq!(extraction.answers.get("age"), Some(&AnswerValue::from("forty")));
        assert_eq!(extraction.answers.get("smoker"), Some(&AnswerValue::from(true)));
        assert_eq!(
            extraction.missing_fields,
            vec!["exercise", "diet", "alcohol", "medical_history"]
        );
        assert!(close(extraction.confidence, 0.8));
    }

    #[test]
    fn structured_single_field_confidence() {
        let extraction = extract_structured([("age", AnswerValue::Integer(30))]);
        assert_eq!(extraction.missing_fields.len(), 5);
        assert!(close(extraction.confidence, 0.75));
    }

    #[test]
    fn structured_keeps_extra_fields_without_counting_them() {
        let extraction = extract_structured([
            ("age", AnswerValue::Integer(30)),
            ("blood_type", AnswerValue::from("o+")),
        ]);
        assert!(extraction.answers.contains("blood_type"));
        assert_eq!(extraction.present_count(), 1);
    }

    #[test]
    fn free_text_confidence_starts_lower() {
        let empty = extract_text("", BooleanParsing::Containment, CaptureScope::Spanning);
        assert!(empty.answers.is_empty());
        assert_eq!(empty.missing_fields.len(), 6);
        assert!(close(empty.confidence, 0.6));

        let full = extract_text(
            "Age: 65\r\nSmoker: no\r\nExercise: daily jogging\r\nDiet: balanced\r\nAlcohol: none\r\nMedical History: none",
            BooleanParsing::Containment,
            CaptureScope::Spanning,
        );
        assert!(full.missing_fields.is_empty());
        assert!(close(full.confidence, 1.0));
    }

    #[test]
    fn confidence_never_decreases_with_coverage() {
        let lines = [
            "Age: 50",
            "Smoker: no",
            "Exercise: weekly",
            "Diet: mixed",
            "Alcohol: rarely",
            "Medical History: none",
        ];

        let mut previous_text = 0.0;
        let mut previous_structured = 0.0;
        for count in 0..=lines.len() {
            let text = lines[..count].join("\n");
            let from_text =
                extract_text(&text, BooleanParsing::Containment, CaptureScope::default());
            assert_eq!(from_text.present_count(), count);
            assert!(from_text.confidence >= previous_text);
            previous_text = from_text.confidence;

            let structured = extract_structured(
                REQUIRED_FIELDS[..count]
                    .iter()
                    .map(|field| (*field, AnswerValue::from("x"))),
            );
            assert_eq!(
                structured.missing_fields.len() + structured.present_count(),
                REQUIRED_FIELDS.len()
            );
            assert!(structured.confidence >= previous_structured);
            previous_structured = structured.confidence;
        }
    }
}
