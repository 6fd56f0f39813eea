use tracing::debug;

use super::domain::{CategoryScore, QuestionType, ScoreLevel};
use super::tables::{
    self, INTEREST_CATEGORY_MAX, LIKERT_CATEGORY_MAX, PERCENT_HIGH, PERCENT_MODERATE,
    PSYCHOMETRIC_RAW_HIGH, PSYCHOMETRIC_RAW_MODERATE, SEI_BAND_HIGH, SEI_BAND_MODERATE,
};

/// Half-away-from-zero rounding to two decimals. Persisted results depend on this exact rule.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage band used by aptitude, adversity and interest.
pub fn percent_level(percentage: f64) -> ScoreLevel {
    if percentage >= PERCENT_HIGH {
        ScoreLevel::High
    } else if percentage >= PERCENT_MODERATE {
        ScoreLevel::Moderate
    } else {
        ScoreLevel::Low
    }
}

pub fn psychometric_level(raw: f64) -> ScoreLevel {
    if raw >= PSYCHOMETRIC_RAW_HIGH {
        ScoreLevel::High
    } else if raw >= PSYCHOMETRIC_RAW_MODERATE {
        ScoreLevel::Moderate
    } else {
        ScoreLevel::Low
    }
}

pub fn sei_level(band: u8) -> ScoreLevel {
    if band >= SEI_BAND_HIGH {
        ScoreLevel::High
    } else if band >= SEI_BAND_MODERATE {
        ScoreLevel::Moderate
    } else {
        ScoreLevel::Low
    }
}

/// `raw / max * 100`, held inside [0, 100]. A zero max yields 0.
fn bounded_percentage(raw: u32, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (f64::from(raw) / max * 100.0).clamp(0.0, 100.0)
}

fn category_score(raw: u32, percentage: f64, level: ScoreLevel) -> CategoryScore {
    CategoryScore {
        category_score: raw,
        category_percentage: round2(percentage),
        category_score_level: level,
    }
}

/// Aptitude categories without a configured question count use the raw total as their max.
pub fn classify_aptitude(category_key: &str, raw: u32) -> CategoryScore {
    let max = match tables::aptitude_category_max(category_key) {
        Some(max) => max,
        None => {
            debug!(category = category_key, raw, "no configured max for aptitude category");
            raw
        }
    };
    let percentage = bounded_percentage(raw, f64::from(max));
    category_score(raw, percentage, percent_level(percentage))
}

pub fn classify_psychometric(raw: u32) -> CategoryScore {
    let percentage = bounded_percentage(raw, LIKERT_CATEGORY_MAX);
    category_score(raw, percentage, psychometric_level(f64::from(raw)))
}

pub fn classify_adversity(raw: u32) -> CategoryScore {
    let percentage = bounded_percentage(raw, LIKERT_CATEGORY_MAX);
    category_score(raw, percentage, percent_level(percentage))
}

pub fn classify_sei(raw: u32) -> CategoryScore {
    let band = tables::sei_band(raw.saturating_mul(2));
    let percentage = f64::from(band) / 10.0 * 100.0;
    category_score(raw, percentage, sei_level(band))
}

pub fn classify_interest(raw: u32) -> CategoryScore {
    let percentage = bounded_percentage(raw, INTEREST_CATEGORY_MAX);
    category_score(raw, percentage, percent_level(percentage))
}

pub fn classify(question_type: QuestionType, category_key: &str, raw: u32) -> CategoryScore {
    match question_type {
        QuestionType::Aptitude => classify_aptitude(category_key, raw),
        QuestionType::Psychometric => classify_psychometric(raw),
        QuestionType::Adversity => classify_adversity(raw),
        QuestionType::Sei => classify_sei(raw),
        QuestionType::Interest => classify_interest(raw),
    }
}
