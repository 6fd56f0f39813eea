use std::collections::BTreeMap;

use super::aggregation::DomainTotals;
use super::bands::classify;
use super::domain::{
    AdversityScores, AptitudeScores, AssessmentBreakdown, CategoryScores, InterestScores,
    PsychometricScores, QuestionType, SeiScores,
};
use super::tables::{self, first_letter_upper};

pub fn assemble(totals: &DomainTotals) -> AssessmentBreakdown {
    let aq_total = aq_total(&totals.adversity);

    AssessmentBreakdown {
        aptitude: AptitudeScores {
            categories: classify_all(QuestionType::Aptitude, totals),
        },
        psychometric: PsychometricScores {
            categories: classify_all(QuestionType::Psychometric, totals),
        },
        adversity: AdversityScores {
            categories: classify_all(QuestionType::Adversity, totals),
            aq_total,
            aq_level: tables::aq_level(aq_total),
        },
        sei: SeiScores {
            categories: classify_all(QuestionType::Sei, totals),
        },
        interest: InterestScores {
            categories: classify_all(QuestionType::Interest, totals),
            top3: interest_top3(&totals.interest),
        },
    }
}

fn classify_all(question_type: QuestionType, totals: &DomainTotals) -> CategoryScores {
    totals
        .for_type(question_type)
        .iter()
        .map(|(key, raw)| (key.clone(), classify(question_type, key, *raw)))
        .collect()
}

/// Twice the sum of every adversity category's raw score.
pub fn aq_total(adversity: &BTreeMap<String, u32>) -> u32 {
    adversity
        .values()
        .fold(0u32, |sum, raw| sum.saturating_add(*raw))
        .saturating_mul(2)
}

/// Letters of the three highest interest categories. Ties go to the alphabetically
/// smaller key; blank keys are skipped, and fewer than three usable categories yield
/// fewer letters.
pub fn interest_top3(interest: &BTreeMap<String, u32>) -> Vec<char> {
    let mut ranked: Vec<(&String, &u32)> = interest.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .filter_map(|(key, _)| first_letter_upper(key))
        .take(3)
        .collect()
}
