use super::answers::{AnswerSet, AnswerValue, BooleanParsing};
use super::fields::{AGE, ALCOHOL, DIET, EXERCISE, MEDICAL_HISTORY, SMOKER};
use super::normalizer::normalize_capture;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// How far a free-form answer (exercise, diet, medical history) may run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureScope {
    /// Whitespace, newlines included, continues the value until the next
    /// punctuation, so `"Diet: balanced\nSugar intake: high"` reads as
    /// `"balanced\nsugar intake"`. Matches legacy forms.
    #[default]
    Spanning,
    /// The value ends at the end of its line.
    LineBounded,
}

struct FreeFormPatterns {
    exercise: Regex,
    diet: Regex,
    medical_history: Regex,
}

struct FieldPatterns {
    age: Regex,
    smoker: Regex,
    alcohol: Regex,
    spanning: FreeFormPatterns,
    line_bounded: FreeFormPatterns,
    standalone_number: Regex,
}

impl FieldPatterns {
    fn free_form(&self, scope: CaptureScope) -> &FreeFormPatterns {
        match scope {
            CaptureScope::Spanning => &self.spanning,
            CaptureScope::LineBounded => &self.line_bounded,
        }
    }
}

static PATTERNS: OnceLock<FieldPatterns> = OnceLock::new();

fn patterns() -> &'static FieldPatterns {
    PATTERNS.get_or_init(|| {
        let compile = |pattern: &str| Regex::new(pattern).expect("field pattern compiles");
        FieldPatterns {
            age: compile(r"(?i)age[:\s]*([0-9]{1,3})"),
            smoker: compile(r"(?i)smok(?:er|ing)[:\s]*(yes|no|y|n|true|false)"),
            alcohol: compile(r"(?i)alcohol[:\s]*(yes|no|rarely|often|sometimes|none)"),
            spanning: FreeFormPatterns {
                exercise: compile(r"(?i)exercise[:\s]*([a-z0-9\s\-]+)"),
                diet: compile(r"(?i)diet[:\s]*([a-z0-9\s\-]+)"),
                medical_history: compile(r"(?i)medical history[:\s]*([a-z0-9,\-\s]+)"),
            },
            line_bounded: FreeFormPatterns {
                exercise: compile(r"(?i)exercise[:\s]*([a-z0-9 \t\-]+)"),
                diet: compile(r"(?i)diet[:\s]*([a-z0-9 \t\-]+)"),
                medical_history: compile(r"(?i)medical history[:\s]*([a-z0-9,\- \t]+)"),
            },
            standalone_number: compile(r"\b([0-9]{1,3})\b"),
        }
    })
}

fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str())
}

/// Run every field matcher over `text`; each field keeps its first match.
pub(crate) fn parse_fields(
    text: &str,
    parsing: BooleanParsing,
    scope: CaptureScope,
) -> AnswerSet {
    let patterns = patterns();
    let free_form = patterns.free_form(scope);
    let mut answers = AnswerSet::new();

    if let Some(age) = first_capture(&patterns.age, text).and_then(|raw| raw.parse::<i64>().ok())
    {
        answers.insert(AGE, AnswerValue::Integer(age));
    }

    if let Some(raw) = first_capture(&patterns.smoker, text) {
        answers.insert(SMOKER, AnswerValue::Boolean(parsing.is_affirmative(raw)));
    }

    for (field, pattern) in [
        (EXERCISE, &free_form.exercise),
        (DIET, &free_form.diet),
        (ALCOHOL, &patterns.alcohol),
        (MEDICAL_HISTORY, &free_form.medical_history),
    ] {
        if let Some(raw) = first_capture(pattern, text) {
            answers.insert(field, AnswerValue::Text(normalize_capture(raw)));
        }
    }

    if !answers.contains(AGE) {
        if let Some(age) = age_from_lines(text) {
            answers.insert(AGE, AnswerValue::Integer(age));
        }
    }

    answers
}

/// Fallback for layouts like "Patient age (years) ... 52" where the number
/// does not follow the label directly.
fn age_from_lines(text: &str) -> Option<i64> {
    let number = &patterns().standalone_number;
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| line.to_lowercase().contains("age"))
        .find_map(|line| first_capture(number, line))
        .and_then(|raw| raw.parse::<i64>().ok())
}
