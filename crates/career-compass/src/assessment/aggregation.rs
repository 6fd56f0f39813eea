use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::domain::{Question, QuestionType, SubmissionItem};
use super::normalizer::{normalize_label, option_score};

/// Raw per-category totals for each instrument, keyed by normalized category label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainTotals {
    pub aptitude: BTreeMap<String, u32>,
    pub psychometric: BTreeMap<String, u32>,
    pub adversity: BTreeMap<String, u32>,
    pub sei: BTreeMap<String, u32>,
    pub interest: BTreeMap<String, u32>,
}

impl DomainTotals {
    pub fn for_type(&self, question_type: QuestionType) -> &BTreeMap<String, u32> {
        match question_type {
            QuestionType::Aptitude => &self.aptitude,
            QuestionType::Psychometric => &self.psychometric,
            QuestionType::Adversity => &self.adversity,
            QuestionType::Sei => &self.sei,
            QuestionType::Interest => &self.interest,
        }
    }

    fn for_type_mut(&mut self, question_type: QuestionType) -> &mut BTreeMap<String, u32> {
        match question_type {
            QuestionType::Aptitude => &mut self.aptitude,
            QuestionType::Psychometric => &mut self.psychometric,
            QuestionType::Adversity => &mut self.adversity,
            QuestionType::Sei => &mut self.sei,
            QuestionType::Interest => &mut self.interest,
        }
    }
}

/// Groups answers by instrument and category.
///
/// Aptitude counts correct answers; psychometric, adversity and SEI sum the mapped option
/// values; interest counts "agree" answers. Submissions whose question is not in `questions`
/// are skipped. When a question id repeats, the first definition is used.
pub fn aggregate(questions: &[Question], submissions: &[SubmissionItem]) -> DomainTotals {
    let mut by_id: HashMap<&str, &Question> = HashMap::with_capacity(questions.len());
    for question in questions {
        by_id.entry(question.id.as_str()).or_insert(question);
    }

    let mut totals = DomainTotals::default();
    for item in submissions {
        let Some(question) = by_id.get(item.question_id.as_str()) else {
            debug!(question_id = %item.question_id, "skipping answer to unknown question");
            continue;
        };

        let points = answer_points(question, &item.selected_option_id);
        *totals
            .for_type_mut(question.question_type)
            .entry(normalize_label(&question.category))
            .or_insert(0) += points;
    }

    totals
}

fn answer_points(question: &Question, selected_option_id: &str) -> u32 {
    match question.question_type {
        QuestionType::Aptitude => {
            let correct = question.correct_option_id.as_deref() == Some(selected_option_id);
            u32::from(correct)
        }
        QuestionType::Psychometric
        | QuestionType::Adversity
        | QuestionType::Sei
        | QuestionType::Interest => match question.option_text(selected_option_id) {
            Some(text) => option_score(question.question_type, text),
            None => {
                debug!(
                    question_id = %question.id,
                    instrument = question.question_type.label(),
                    option_id = %selected_option_id,
                    "selected option not offered by question; scoring 0"
                );
                0
            }
        },
    }
}
