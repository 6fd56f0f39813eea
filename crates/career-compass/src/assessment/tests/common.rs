use std::collections::BTreeMap;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{
    PayloadVersion, Question, QuestionOption, QuestionType, ScoreLevel, StudentProfileForRules,
    SubmissionItem, SubmissionPayload,
};
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::rules::{CareerMapping, CareerRule, DatScoreRule};

const AGREEMENT: &[&str] = &[
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];
const FREQUENCY: &[&str] = &["Never", "Rarely", "Sometimes", "Often", "Always"];
const INTEREST: &[&str] = &["Agree", "Disagree"];

/// Builds questions and matching answers one category at a time.
#[derive(Default)]
pub(super) struct PayloadBuilder {
    questions: Vec<Question>,
    submissions: Vec<SubmissionItem>,
}

impl PayloadBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> String {
        format!("q{}", self.questions.len() + 1)
    }

    /// `total` multiple-choice questions of which the first `correct` are answered correctly.
    pub(super) fn aptitude(mut self, category: &str, correct: usize, total: usize) -> Self {
        for index in 0..total {
            let id = self.next_id();
            let options = ["a", "b", "c", "d"]
                .iter()
                .map(|suffix| QuestionOption {
                    id: format!("{id}-{suffix}"),
                    text: format!("choice {suffix}"),
                })
                .collect();
            let selected = if index < correct { "a" } else { "c" };
            self.submissions.push(SubmissionItem {
                question_id: id.clone(),
                selected_option_id: format!("{id}-{selected}"),
            });
            self.questions.push(Question {
                correct_option_id: Some(format!("{id}-a")),
                id,
                question_type: QuestionType::Aptitude,
                category: category.to_string(),
                options,
            });
        }
        self
    }

    /// One question per answer text. The offered options are the instrument's scale, plus the
    /// answer itself when it is not part of that scale.
    pub(super) fn scaled(
        mut self,
        question_type: QuestionType,
        category: &str,
        answers: &[&str],
    ) -> Self {
        let scale = match question_type {
            QuestionType::Adversity => FREQUENCY,
            QuestionType::Interest => INTEREST,
            _ => AGREEMENT,
        };

        for answer in answers {
            let id = self.next_id();
            let mut options: Vec<QuestionOption> = scale
                .iter()
                .enumerate()
                .map(|(index, text)| QuestionOption {
                    id: format!("{id}-{index}"),
                    text: (*text).to_string(),
                })
                .collect();
            let selected = match options.iter().find(|option| option.text == *answer) {
                Some(option) => option.id.clone(),
                None => {
                    let extra = QuestionOption {
                        id: format!("{id}-extra"),
                        text: (*answer).to_string(),
                    };
                    let extra_id = extra.id.clone();
                    options.push(extra);
                    extra_id
                }
            };
            self.submissions.push(SubmissionItem {
                question_id: id.clone(),
                selected_option_id: selected,
            });
            self.questions.push(Question {
                id,
                question_type,
                category: category.to_string(),
                options,
                correct_option_id: None,
            });
        }
        self
    }

    pub(super) fn repeated(
        self,
        question_type: QuestionType,
        category: &str,
        answer: &str,
        count: usize,
    ) -> Self {
        let answers = vec![answer; count];
        self.scaled(question_type, category, &answers)
    }

    pub(super) fn answer(mut self, question_id: &str, option_id: &str) -> Self {
        self.submissions.push(SubmissionItem {
            question_id: question_id.to_string(),
            selected_option_id: option_id.to_string(),
        });
        self
    }

    pub(super) fn build(self) -> SubmissionPayload {
        SubmissionPayload {
            version: PayloadVersion::V2,
            submissions: self.submissions,
            questions: self.questions,
        }
    }
}

/// A hands-on design learner: a full architecture match and a near-full engineering one.
pub(super) fn design_payload() -> SubmissionPayload {
    PayloadBuilder::new()
        .aptitude("Abstract", 5, 5)
        .aptitude("Spatial", 4, 5)
        .aptitude("Numerical", 3, 5)
        .aptitude("Mechanical", 3, 5)
        .aptitude("Verbal", 2, 5)
        .repeated(QuestionType::Interest, "Realistic", "Agree", 5)
        .scaled(
            QuestionType::Interest,
            "Investigative",
            &["Agree", "Agree", "Agree", "Agree", "Disagree"],
        )
        .scaled(
            QuestionType::Interest,
            "Artistic",
            &["Agree", "Agree", "Agree", "Agree", "Disagree"],
        )
        .scaled(
            QuestionType::Interest,
            "Social",
            &["Agree", "Disagree", "Disagree", "Disagree", "Disagree"],
        )
        .scaled(
            QuestionType::Interest,
            "Enterprising",
            &["Agree", "Agree", "Disagree", "Disagree", "Disagree"],
        )
        .scaled(
            QuestionType::Interest,
            "Conventional",
            &["Agree", "Agree", "Disagree", "Disagree", "Disagree"],
        )
        .repeated(QuestionType::Psychometric, "Openness", "Agree", 5)
        .scaled(
            QuestionType::Psychometric,
            "Conscientiousness",
            &["Strongly Agree", "Agree", "Agree", "Agree", "Disagree"],
        )
        .repeated(QuestionType::Psychometric, "Extraversion", "Disagree", 5)
        .scaled(
            QuestionType::Psychometric,
            "Agreeableness",
            &["Disagree", "Disagree", "Disagree", "Disagree", "Neutral"],
        )
        .scaled(
            QuestionType::Psychometric,
            "Neuroticism",
            &["Neutral", "Neutral", "Neutral", "Disagree", "Disagree"],
        )
        .repeated(QuestionType::Adversity, "Control", "Often", 5)
        .repeated(QuestionType::Adversity, "Ownership", "Often", 5)
        .repeated(QuestionType::Adversity, "Reach", "Often", 5)
        .repeated(QuestionType::Adversity, "Endurance", "Often", 5)
        .repeated(QuestionType::Sei, "Self Awareness", "Agree", 5)
        .build()
}

pub(super) fn profile(
    riasec: &str,
    high: &str,
    low: &str,
    dat: &[(&str, ScoreLevel)],
) -> StudentProfileForRules {
    StudentProfileForRules {
        riasec_top3: riasec.chars().collect(),
        ocean_high: high.chars().collect(),
        ocean_low: low.chars().collect(),
        dat_levels: dat
            .iter()
            .map(|(code, level)| ((*code).to_string(), *level))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub(super) fn rule(
    name: &str,
    riasec: Option<&str>,
    high: Option<&str>,
    low: Option<&str>,
    dat: &[(&str, u8)],
    rule_score: f64,
) -> CareerRule {
    CareerRule {
        rule_name: name.to_string(),
        riasec_combination: riasec.map(str::to_string),
        high_ocean_traits: high.map(str::to_string),
        low_ocean_traits: low.map(str::to_string),
        dat_score_rules: dat
            .iter()
            .map(|(code, score)| DatScoreRule {
                short_code: (*code).to_string(),
                score: *score,
            })
            .collect(),
        rule_score,
    }
}

pub(super) fn mapping(name: &str) -> CareerMapping {
    CareerMapping {
        rule_name: name.to_string(),
        ideal_career: format!("{name} career"),
        club_to_join: format!("{name} club"),
        ideal_for: format!("Learners suited to {name}"),
        tag_line: format!("{name}!"),
    }
}

pub(super) fn engineering_rule() -> CareerRule {
    rule(
        "Engineering & Design",
        Some("RIA"),
        Some("OC"),
        Some("EA"),
        &[("AR", 5), ("SR", 5), ("NA", 3), ("MR", 3)],
        56.0,
    )
}

pub(super) fn standard_engine() -> AssessmentEngine {
    AssessmentEngine::standard().expect("built-in catalog is valid")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
