use super::domain::FactorTag;

pub const SMOKING_ADVICE: &str = "Consider smoking cessation resources and counseling.";
pub const DIET_ADVICE: &str =
    "Reduce high-sugar foods; increase fruits, vegetables, and whole grains.";
pub const ACTIVITY_ADVICE: &str =
    "Aim for at least 30 minutes of moderate activity (walking) daily.";
pub const ALCOHOL_ADVICE: &str =
    "Reduce alcohol intake; consult healthcare provider for safe reduction.";
pub const CHECKUP_ADVICE: &str =
    "Schedule regular health check-ups and lipid/blood pressure monitoring.";
pub const MAINTAIN_ADVICE: &str = "Maintain current healthy habits; re-evaluate annually.";

/// Advice per matched category in fixed order; never empty.
pub fn generate_recommendations(factors: &[FactorTag]) -> Vec<String> {
    let has = |tag: FactorTag| factors.contains(&tag);
    let advice = [
        (has(FactorTag::Smoking), SMOKING_ADVICE),
        (has(FactorTag::PoorDiet), DIET_ADVICE),
        (has(FactorTag::LowExercise), ACTIVITY_ADVICE),
        (has(FactorTag::HighAlcohol), ALCOHOL_ADVICE),
        (factors.iter().any(|tag| tag.is_age_bracket()), CHECKUP_ADVICE),
    ];

    let mut recommendations: Vec<String> = advice
        .into_iter()
        .filter(|(matched, _)| *matched)
        .map(|(_, text)| text.to_string())
        .collect();

    if recommendations.is_empty() {
        recommendations.push(MAINTAIN_ADVICE.to_string());
    }

    recommendations
}
