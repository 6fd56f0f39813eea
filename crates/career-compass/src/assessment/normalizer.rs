use super::domain::QuestionType;
use super::tables;

/// Canonical form of option labels and category keys.
pub fn normalize_label(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Integer score of an option label for a text-scored instrument. Labels missing from the
/// instrument's table score 0.
pub fn option_score(question_type: QuestionType, text: &str) -> u32 {
    tables::option_value(question_type, &normalize_label(text)).unwrap_or(0)
}
