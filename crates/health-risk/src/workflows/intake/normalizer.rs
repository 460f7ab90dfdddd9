pub(crate) fn normalize_key(value: &str) -> String {
    value.to_lowercase()
}

/// Recognized text arrives with mixed line endings and stray markers.
pub(crate) fn normalize_text(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").replace('\r', "\n")
}

pub(crate) fn normalize_capture(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_normalization_unifies_line_endings() {
        let normalized = normalize_text("\u{feff}Age: 42\r\nSmoker: no\rDiet: fried");
        assert_eq!(normalized, "Age: 42\n\nSmoker: no\nDiet: fried");
    }

    #[test]
    fn keys_and_captures_are_lowercased() {
        assert_eq!(normalize_key("Medical_History"), "medical_history");
        assert_eq!(normalize_capture("  Daily Jogging "), "daily jogging");
    }
}
