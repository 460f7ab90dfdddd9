use super::normalizer::normalize_key;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const AFFIRMATIVE_TOKENS: &[&str] = &["yes", "y", "true", "1"];

/// How yes/no style answers are read when they arrive as text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanParsing {
    /// Affirmative when any token appears anywhere in the value, so `"no"`
    /// stays negative but `"not yet"` reads as yes. Matches legacy forms.
    #[default]
    Containment,
    /// Affirmative only when the whole value equals a token.
    Strict,
}

impl BooleanParsing {
    pub fn is_affirmative(self, raw: &str) -> bool {
        let value = raw.trim().to_lowercase();
        match self {
            BooleanParsing::Containment => AFFIRMATIVE_TOKENS
                .iter()
                .any(|token| value.contains(token)),
            BooleanParsing::Strict => AFFIRMATIVE_TOKENS.iter().any(|token| value == *token),
        }
    }
}

/// A single survey answer. Rules branch on the variant before applying
/// numeric or substring checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Integer(i64),
    Boolean(bool),
    Text(String),
}

impl AnswerValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AnswerValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Truthiness used for flag-like answers such as `smoker`.
    pub fn is_truthy(&self, parsing: BooleanParsing) -> bool {
        match self {
            AnswerValue::Boolean(flag) => *flag,
            AnswerValue::Integer(value) => *value != 0,
            AnswerValue::Text(value) => match parsing {
                BooleanParsing::Containment => !value.is_empty(),
                BooleanParsing::Strict => parsing.is_affirmative(value),
            },
        }
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        AnswerValue::Integer(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Boolean(value)
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

/// Normalized field -> value map. Keys are always lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&AnswerValue> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub(crate) fn insert(&mut self, field: &str, value: AnswerValue) {
        self.0.insert(normalize_key(field), value);
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: AsRef<str>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (key, value) in iter {
            answers.insert(key.as_ref(), value.into());
        }
        answers
    }
}

/// Answers exactly as submitted: document order, duplicate keys kept.
/// Collecting into an [`AnswerSet`] lets the last spelling of a key win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedAnswers(Vec<(String, AnswerValue)>);

impl SubmittedAnswers {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for SubmittedAnswers {
    type Item = (String, AnswerValue);
    type IntoIter = std::vec::IntoIter<(String, AnswerValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for SubmittedAnswers
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for SubmittedAnswers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SubmittedAnswers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of survey answers")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, AnswerValue>()? {
                    entries.push(entry);
                }
                Ok(SubmittedAnswers(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_reads_embedded_tokens_as_affirmative() {
        let parsing = BooleanParsing::Containment;
        assert!(parsing.is_affirmative(" YES "));
        assert!(parsing.is_affirmative("y"));
        assert!(parsing.is_affirmative("not yet"));
        assert!(!parsing.is_affirmative("no"));
        assert!(!parsing.is_affirmative("false"));
    }

    #[test]
    fn strict_requires_exact_token() {
        let parsing = BooleanParsing::Strict;
        assert!(parsing.is_affirmative("True"));
        assert!(parsing.is_affirmative("1"));
        assert!(!parsing.is_affirmative("not yet"));
        assert!(!parsing.is_affirmative("yes please"));
    }

    #[test]
    fn text_truthiness_depends_on_parsing_mode() {
        let value = AnswerValue::from("no");
        assert!(value.is_truthy(BooleanParsing::Containment));
        assert!(!value.is_truthy(BooleanParsing::Strict));
        assert!(!AnswerValue::from("").is_truthy(BooleanParsing::Containment));
        assert!(!AnswerValue::Integer(0).is_truthy(BooleanParsing::Containment));
        assert!(AnswerValue::Integer(2).is_truthy(BooleanParsing::Strict));
    }

    #[test]
    fn deserializes_untagged_values() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"age": 45, "smoker": true, "diet": "fried"}"#)
                .expect("valid answers");
        assert_eq!(answers.get("age"), Some(&AnswerValue::Integer(45)));
        assert_eq!(answers.get("smoker"), Some(&AnswerValue::Boolean(true)));
        assert_eq!(answers.get("diet").and_then(AnswerValue::as_text), Some("fried"));
    }

    #[test]
    fn collecting_lowercases_keys() {
        let answers: AnswerSet = [("AGE", AnswerValue::Integer(30))].into_iter().collect();
        assert!(answers.contains("age"));
        assert!(!answers.contains("AGE"));
    }

    #[test]
    fn later_spelling_of_a_key_wins() {
        let submitted: SubmittedAnswers =
            serde_json::from_str(r#"{"age": 30, "AGE": 70}"#).expect("valid answers");
        assert_eq!(submitted.len(), 2);
        let answers: AnswerSet = submitted.into_iter().collect();
        assert_eq!(answers.get("age"), Some(&AnswerValue::Integer(70)));

        let submitted: SubmittedAnswers =
            serde_json::from_str(r#"{"AGE": 70, "age": 30}"#).expect("valid answers");
        let answers: AnswerSet = submitted.into_iter().collect();
        assert_eq!(answers.get("age"), Some(&AnswerValue::Integer(30)));
    }

    #[test]
    fn submitted_answers_reject_non_objects() {
        assert!(serde_json::from_str::<SubmittedAnswers>("[1, 2]").is_err());
        assert!(serde_json::from_str::<SubmittedAnswers>(r#"{"age": 4.5}"#).is_err());
    }
}
