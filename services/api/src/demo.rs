use crate::infra::load_engine;
use career_compass::assessment::{
    AssessmentResult, CategoryScores, PayloadVersion, Question, QuestionOption, QuestionType,
    RuleMatchResult, SubmissionItem, SubmissionPayload,
};
use career_compass::error::AppError;
use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ComputeArgs {
    /// Submission payload (JSON with version, submissions and questions)
    #[arg(long)]
    pub(crate) payload: PathBuf,
    /// Rule catalog JSON to score against instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Pretty-print the result
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Rule catalog JSON to score against instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_compute(args: ComputeArgs) -> Result<(), AppError> {
    let engine = load_engine(args.catalog.as_deref())?;
    let reader = BufReader::new(File::open(&args.payload)?);
    let payload: SubmissionPayload = serde_json::from_reader(reader)?;

    let result = engine.compute(&payload)?;
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = load_engine(args.catalog.as_deref())?;
    let result = engine.compute(&sample_payload())?;
    let ranked = engine.rank(&result.profile);
    render_result(&result, &ranked);
    Ok(())
}

fn render_result(result: &AssessmentResult, ranked: &[RuleMatchResult]) {
    let breakdown = &result.breakdown;
    let recommendation = &result.recommendation;

    println!("Career compass demo");
    render_categories("Aptitude", &breakdown.aptitude.categories);
    render_categories("Personality", &breakdown.psychometric.categories);
    render_categories("Adversity", &breakdown.adversity.categories);
    println!(
        "  Adversity quotient: {} ({})",
        breakdown.adversity.aq_total, breakdown.adversity.aq_level
    );
    render_categories("Emotional intelligence", &breakdown.sei.categories);
    render_categories("Interests", &breakdown.interest.categories);

    let profile = &result.profile;
    println!("\nProfile");
    println!("  Top interests: {}", letters(&profile.riasec_top3));
    println!("  High traits: {}", letters(&profile.ocean_high));
    println!("  Low traits: {}", letters(&profile.ocean_low));

    println!("\nTop matches");
    for (position, candidate) in ranked.iter().take(3).enumerate() {
        println!(
            "  {}. {:<36} {:>3} pts  {:>5.1}%",
            position + 1,
            candidate.rule_name,
            candidate.score,
            candidate.match_percent * 100.0
        );
    }

    println!(
        "\nRecommended path: {} ({} points, {:.0}% match)",
        recommendation.best_rule.rule_name,
        recommendation.best_rule.score,
        recommendation.best_rule.match_percent * 100.0
    );
    println!("  Ideal career: {}", recommendation.mapping.ideal_career);
    println!("  Club to join: {}", recommendation.mapping.club_to_join);
    println!("  \"{}\"", recommendation.mapping.tag_line);

    println!("\nWhy this path");
    let reasoning = &recommendation.reasoning;
    for line in reasoning
        .riasec
        .iter()
        .chain(&reasoning.ocean)
        .chain(&reasoning.dat)
    {
        println!("  - {line}");
    }
}

fn render_categories(title: &str, categories: &CategoryScores) {
    println!("\n{title}");
    if categories.is_empty() {
        println!("  (not assessed)");
        return;
    }
    for (category, score) in categories {
        println!(
            "  {:<24} {:>3} {:>7.2}%  {}",
            category, score.category_score, score.category_percentage, score.category_score_level
        );
    }
}

fn letters(values: &[char]) -> String {
    if values.is_empty() {
        return "none".to_string();
    }
    values
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

const AGREEMENT: &[&str] = &[
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];
const FREQUENCY: &[&str] = &["Never", "Rarely", "Sometimes", "Often", "Always"];
const INTEREST: &[&str] = &["Agree", "Disagree"];

#[derive(Default)]
struct SampleBuilder {
    questions: Vec<Question>,
    submissions: Vec<SubmissionItem>,
}

impl SampleBuilder {
    fn next_id(&self) -> String {
        format!("demo-{}", self.questions.len() + 1)
    }

    fn aptitude(mut self, category: &str, correct: usize) -> Self {
        for index in 0..5 {
            let id = self.next_id();
            let options = ["a", "b", "c", "d"]
                .iter()
                .map(|suffix| QuestionOption {
                    id: format!("{id}-{suffix}"),
                    text: format!("Option {}", suffix.to_uppercase()),
                })
                .collect();
            let selected = if index < correct { "a" } else { "b" };
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

    fn scaled(mut self, question_type: QuestionType, category: &str, answers: &[usize]) -> Self {
        let scale = match question_type {
            QuestionType::Adversity => FREQUENCY,
            QuestionType::Interest => INTEREST,
            QuestionType::Aptitude | QuestionType::Psychometric | QuestionType::Sei => AGREEMENT,
        };
        for answer in answers {
            let id = self.next_id();
            let options = scale
                .iter()
                .enumerate()
                .map(|(index, text)| QuestionOption {
                    id: format!("{id}-{index}"),
                    text: (*text).to_string(),
                })
                .collect();
            self.submissions.push(SubmissionItem {
                question_id: id.clone(),
                selected_option_id: format!("{id}-{answer}"),
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
}

/// A learner with investigative, data-minded answers across all five instruments.
pub(crate) fn sample_payload() -> SubmissionPayload {
    // Interest answers index the [Agree, Disagree] scale; the rest index their 5-point scale.
    let builder = SampleBuilder::default()
        .aptitude("Numerical", 5)
        .aptitude("Abstract", 4)
        .aptitude("Verbal", 3)
        .scaled(QuestionType::Interest, "Investigative", &[0, 0, 0, 0, 0])
        .scaled(QuestionType::Interest, "Conventional", &[0, 0, 0, 0, 1])
        .scaled(QuestionType::Interest, "Realistic", &[0, 0, 0, 1, 1])
        .scaled(QuestionType::Interest, "Artistic", &[0, 1, 1, 1, 1])
        .scaled(QuestionType::Interest, "Social", &[1, 1, 1, 1, 1])
        .scaled(QuestionType::Interest, "Enterprising", &[0, 1, 1, 1, 1])
        .scaled(QuestionType::Psychometric, "Openness", &[4, 3, 3, 3, 4])
        .scaled(QuestionType::Psychometric, "Conscientiousness", &[3, 3, 3, 4, 3])
        .scaled(QuestionType::Psychometric, "Extraversion", &[2, 2, 2, 3, 2])
        .scaled(QuestionType::Psychometric, "Agreeableness", &[2, 3, 2, 2, 2])
        .scaled(QuestionType::Psychometric, "Neuroticism", &[1, 1, 0, 1, 1])
        .scaled(QuestionType::Adversity, "Control", &[3, 3, 4, 3, 3])
        .scaled(QuestionType::Adversity, "Ownership", &[3, 4, 4, 3, 3])
        .scaled(QuestionType::Adversity, "Reach", &[2, 3, 3, 3, 2])
        .scaled(QuestionType::Adversity, "Endurance", &[3, 3, 3, 4, 4])
        .scaled(QuestionType::Sei, "Self Awareness", &[3, 3, 4, 3, 3])
        .scaled(QuestionType::Sei, "Self Management", &[3, 2, 3, 3, 2]);

    SubmissionPayload {
        version: PayloadVersion::V2,
        submissions: builder.submissions,
        questions: builder.questions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_compass::assessment::{AqLevel, ScoreLevel};

    #[test]
    fn sample_learner_is_steered_to_data_science() {
        let engine = load_engine(None).expect("standard catalog");

        let result = engine.compute(&sample_payload()).expect("sample computes");

        assert_eq!(result.profile.riasec_top3, vec!['I', 'C', 'R']);
        assert_eq!(result.profile.ocean_high, vec!['C', 'O']);
        assert_eq!(result.profile.ocean_low, vec!['N']);
        assert_eq!(result.profile.dat_levels.get("NA"), Some(&ScoreLevel::High));
        assert_eq!(
            result.recommendation.best_rule.rule_name,
            "Software & Data Science"
        );
        assert_eq!(result.recommendation.best_rule.score, 43);
        assert_eq!(result.breakdown.adversity.aq_level, AqLevel::ModeratelyHigh);
    }

    #[test]
    fn compute_command_reads_payload_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "career-compass-payload-{}.json",
            std::process::id()
        ));
        let body = serde_json::to_vec(&sample_payload()).expect("serialize sample");
        std::fs::write(&path, body).expect("write payload");

        let outcome = run_compute(ComputeArgs {
            payload: path.clone(),
            catalog: None,
            pretty: false,
        });
        let _ = std::fs::remove_file(&path);

        assert!(outcome.is_ok());
    }

    #[test]
    fn compute_command_rejects_malformed_payload() {
        let path = std::env::temp_dir().join(format!(
            "career-compass-malformed-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, b"{\"version\": 7}").expect("write payload");

        let outcome = run_compute(ComputeArgs {
            payload: path.clone(),
            catalog: None,
            pretty: true,
        });
        let _ = std::fs::remove_file(&path);

        assert!(matches!(outcome, Err(AppError::Payload(_))));
    }
}
