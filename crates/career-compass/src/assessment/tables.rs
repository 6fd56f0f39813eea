//! Lookup, alias and threshold tables shared by every scoring path.
//!
//! Any change to a value here changes persisted results, so bump
//! [`SCORING_TABLES_VERSION`] alongside it.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::domain::{AqLevel, QuestionType};

pub const SCORING_TABLES_VERSION: u32 = 1;

/// Aptitude and interest percentage bands (also applied to adversity).
pub const PERCENT_HIGH: f64 = 77.0;
pub const PERCENT_MODERATE: f64 = 24.0;

/// Psychometric levels are read off the raw sum rather than the percentage.
pub const PSYCHOMETRIC_RAW_HIGH: f64 = 17.5;
pub const PSYCHOMETRIC_RAW_MODERATE: f64 = 12.5;

pub const SEI_BAND_HIGH: u8 = 8;
pub const SEI_BAND_MODERATE: u8 = 5;

/// 5 questions x option value 5.
pub const LIKERT_CATEGORY_MAX: f64 = 25.0;
/// 5 questions, one point per "agree".
pub const INTEREST_CATEGORY_MAX: f64 = 5.0;

const APTITUDE_QUESTIONS_PER_CODE: u32 = 5;

/// Inclusive doubled-raw ranges to SEI band, first match wins.
const SEI_BANDS: &[(u32, u32, u8)] = &[
    (47, 50, 10),
    (44, 46, 9),
    (41, 43, 8),
    (39, 40, 7),
    (37, 38, 6),
    (34, 36, 5),
    (31, 33, 4),
    (26, 30, 3),
    (21, 25, 2),
    (10, 20, 1),
];

/// Inclusive AQ total ranges, first match wins; anything unmatched is `Low`.
const AQ_BANDS: &[(u32, u32, AqLevel)] = &[
    (178, 200, AqLevel::High),
    (161, 177, AqLevel::ModeratelyHigh),
    (135, 160, AqLevel::Moderate),
    (118, 134, AqLevel::ModeratelyLow),
];

static PSYCHOMETRIC_OPTIONS: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();
static ADVERSITY_OPTIONS: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();
static SEI_OPTIONS: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();
static OCEAN_ALIASES: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
static DAT_ALIASES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

const AGREEMENT_SCALE: &[(&str, u32)] = &[
    ("strongly disagree", 1),
    ("disagree", 2),
    ("neutral", 3),
    ("agree", 4),
    ("strongly agree", 5),
];

const FREQUENCY_SCALE: &[(&str, u32)] = &[
    ("never", 1),
    ("rarely", 2),
    ("sometimes", 3),
    ("often", 4),
    ("always", 5),
];

const INTEREST_AGREE: &str = "agree";

fn build(entries: &[(&'static str, u32)]) -> HashMap<&'static str, u32> {
    entries.iter().copied().collect()
}

/// Score for an already-normalized option label. `None` means the label is not in the
/// table for that instrument. Aptitude answers are scored by correctness, never by text.
pub(crate) fn option_value(question_type: QuestionType, normalized: &str) -> Option<u32> {
    match question_type {
        QuestionType::Psychometric => PSYCHOMETRIC_OPTIONS
            .get_or_init(|| build(AGREEMENT_SCALE))
            .get(normalized)
            .copied(),
        QuestionType::Adversity => ADVERSITY_OPTIONS
            .get_or_init(|| build(FREQUENCY_SCALE))
            .get(normalized)
            .copied(),
        QuestionType::Sei => SEI_OPTIONS
            .get_or_init(|| build(AGREEMENT_SCALE))
            .get(normalized)
            .copied(),
        QuestionType::Interest => (normalized == INTEREST_AGREE).then_some(1),
        QuestionType::Aptitude => None,
    }
}

fn ocean_aliases() -> &'static HashMap<&'static str, char> {
    OCEAN_ALIASES.get_or_init(|| {
        HashMap::from([
            ("openness", 'O'),
            ("conscientiousness", 'C'),
            ("extraversion", 'E'),
            ("agreeableness", 'A'),
            ("neuroticism", 'N'),
        ])
    })
}

fn dat_aliases() -> &'static HashMap<&'static str, &'static str> {
    DAT_ALIASES.get_or_init(|| {
        HashMap::from([
            ("vr", "VR"),
            ("verbal", "VR"),
            ("na", "NA"),
            ("numerical", "NA"),
            ("ar", "AR"),
            ("abstract", "AR"),
            ("psa", "PSA"),
            ("speed & accuracy", "PSA"),
            ("mr", "MR"),
            ("mechanical", "MR"),
            ("sr", "SR"),
            ("spatial", "SR"),
            ("lu", "LU"),
            ("language usage", "LU"),
        ])
    })
}

/// Trait letter for a psychometric category key. Keys outside the alias table fall back to
/// their first character upper-cased; an empty key has no letter.
pub fn ocean_letter(category_key: &str) -> Option<char> {
    if let Some(letter) = ocean_aliases().get(category_key) {
        return Some(*letter);
    }
    first_letter_upper(category_key)
}

/// DAT short code for an aptitude category key. Unknown keys map to themselves upper-cased.
pub fn dat_short_code(category_key: &str) -> String {
    match dat_aliases().get(category_key) {
        Some(code) => (*code).to_string(),
        None => category_key.to_uppercase(),
    }
}

/// Configured question count for an aptitude category, if the key resolves to a DAT code.
pub fn aptitude_category_max(category_key: &str) -> Option<u32> {
    dat_aliases()
        .get(category_key)
        .map(|_| APTITUDE_QUESTIONS_PER_CODE)
}

/// Band 0-10 for a doubled SEI raw score. Values outside every row, including anything
/// above 50, land in band 0.
pub fn sei_band(doubled_raw: u32) -> u8 {
    SEI_BANDS
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&doubled_raw))
        .map(|(_, _, band)| *band)
        .unwrap_or(0)
}

pub fn aq_level(aq_total: u32) -> AqLevel {
    AQ_BANDS
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&aq_total))
        .map(|(_, _, level)| *level)
        .unwrap_or(AqLevel::Low)
}

pub(crate) fn first_letter_upper(value: &str) -> Option<char> {
    value.chars().next().and_then(|c| c.to_uppercase().next())
}
