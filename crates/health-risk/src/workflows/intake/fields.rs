use super::answers::AnswerSet;

pub const AGE: &str = "age";
pub const SMOKER: &str = "smoker";
pub const EXERCISE: &str = "exercise";
pub const DIET: &str = "diet";
pub const ALCOHOL: &str = "alcohol";
pub const MEDICAL_HISTORY: &str = "medical_history";

/// Canonical survey fields in reporting order.
pub const REQUIRED_FIELDS: [&str; 6] = [AGE, SMOKER, EXERCISE, DIET, ALCOHOL, MEDICAL_HISTORY];

pub fn missing_fields(answers: &AnswerSet) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| !answers.contains(field))
        .map(|field| field.to_string())
        .collect()
}

pub fn present_ratio(missing: usize) -> f64 {
    let total = REQUIRED_FIELDS.len();
    (total - missing.min(total)) as f64 / total as f64
}

/// Base confidence plus a coverage bonus, reaching 1.0 at full coverage.
pub(crate) fn coverage_confidence(base: f64, missing: usize) -> f64 {
    base + (1.0 - base) * present_ratio(missing)
}
