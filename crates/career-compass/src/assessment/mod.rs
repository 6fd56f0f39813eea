//! Questionnaire scoring and career recommendation.
//!
//! Every stage takes the previous stage's value by reference and returns a new one:
//! answers → [`aggregation::DomainTotals`] → [`AssessmentBreakdown`] →
//! [`StudentProfileForRules`] → [`RuleMatchResult`]s → [`Recommendation`].

pub mod aggregation;
pub mod bands;
pub mod breakdown;
pub mod domain;
mod engine;
pub mod normalizer;
pub mod profile;
pub mod router;
pub mod rules;
pub mod tables;

#[cfg(test)]
mod tests;

pub use domain::{
    AdversityScores, AptitudeScores, AqLevel, AssessmentBreakdown, AssessmentResult,
    CategoryScore, CategoryScores, InterestScores, PayloadVersion, PsychometricScores, Question,
    QuestionOption, QuestionType, Reasoning, Recommendation, RuleMatchResult, ScoreLevel,
    SeiScores, StudentProfileForRules, SubmissionItem, SubmissionPayload,
};
pub use engine::{compute_result, AssessmentEngine, AssessmentError};
pub use router::{assessment_router, CatalogView};
pub use rules::{CareerMapping, CareerRule, CatalogError, DatScoreRule, RuleCatalog};
