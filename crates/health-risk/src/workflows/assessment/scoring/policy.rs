use super::super::domain::RiskLevel;

pub(crate) const MAX_SCORE: u32 = 100;
const LOW_CEILING: u8 = 30;
const MEDIUM_CEILING: u8 = 60;

pub(crate) fn clamp_score(raw: u32) -> u8 {
    raw.min(MAX_SCORE) as u8
}

pub(crate) fn risk_level_for(score: u8) -> RiskLevel {
    if score <= LOW_CEILING {
        RiskLevel::Low
    } else if score <= MEDIUM_CEILING {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}
