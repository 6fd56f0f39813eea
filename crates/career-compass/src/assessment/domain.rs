use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules::CareerMapping;

/// The five instruments a question can belong to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Aptitude,
    Psychometric,
    Adversity,
    Sei,
    Interest,
}

impl QuestionType {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionType::Aptitude => "aptitude",
            QuestionType::Psychometric => "psychometric",
            QuestionType::Adversity => "adversity",
            QuestionType::Sei => "sei",
            QuestionType::Interest => "interest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
}

/// A fully materialized questionnaire item supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub category: String,
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_option_id: Option<String>,
}

impl Question {
    pub fn option_text(&self, option_id: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|option| option.id == option_id)
            .map(|option| option.text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionItem {
    pub question_id: String,
    pub selected_option_id: String,
}

/// Payload schema revision. Both revisions share the same scoring semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PayloadVersion {
    V1,
    V2,
}

impl TryFrom<u8> for PayloadVersion {
    type Error = UnsupportedPayloadVersion;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(UnsupportedPayloadVersion(other)),
        }
    }
}

impl From<PayloadVersion> for u8 {
    fn from(value: PayloadVersion) -> Self {
        match value {
            PayloadVersion::V1 => 1,
            PayloadVersion::V2 => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedPayloadVersion(pub u8);

impl fmt::Display for UnsupportedPayloadVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported payload version {} (expected 1 or 2)", self.0)
    }
}

/// Everything one computation needs: the answers and the questions they reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub version: PayloadVersion,
    pub submissions: Vec<SubmissionItem>,
    pub questions: Vec<Question>,
}

/// Three-way band shared by every per-category score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreLevel {
    High,
    Moderate,
    Low,
}

impl ScoreLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreLevel::High => "High",
            ScoreLevel::Moderate => "Moderate",
            ScoreLevel::Low => "Low",
        }
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Five-way adversity quotient band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AqLevel {
    High,
    #[serde(rename = "Moderately High")]
    ModeratelyHigh,
    Moderate,
    #[serde(rename = "Moderately Low")]
    ModeratelyLow,
    Low,
}

impl AqLevel {
    pub const fn label(self) -> &'static str {
        match self {
            AqLevel::High => "High",
            AqLevel::ModeratelyHigh => "Moderately High",
            AqLevel::Moderate => "Moderate",
            AqLevel::ModeratelyLow => "Moderately Low",
            AqLevel::Low => "Low",
        }
    }
}

impl fmt::Display for AqLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classified score of one category. The level is always derived, never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category_score: u32,
    pub category_percentage: f64,
    pub category_score_level: ScoreLevel,
}

/// Category key (trimmed, lower-cased label) to its classified score.
pub type CategoryScores = BTreeMap<String, CategoryScore>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AptitudeScores {
    pub categories: CategoryScores,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PsychometricScores {
    pub categories: CategoryScores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdversityScores {
    pub categories: CategoryScores,
    pub aq_total: u32,
    pub aq_level: AqLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeiScores {
    pub categories: CategoryScores,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestScores {
    pub categories: CategoryScores,
    pub top3: Vec<char>,
}

/// The five classified domain blocks of one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentBreakdown {
    pub aptitude: AptitudeScores,
    pub psychometric: PsychometricScores,
    pub adversity: AdversityScores,
    pub sei: SeiScores,
    pub interest: InterestScores,
}

/// Compact projection of the breakdown consumed by the rule scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfileForRules {
    pub riasec_top3: Vec<char>,
    pub ocean_high: Vec<char>,
    pub ocean_low: Vec<char>,
    pub dat_levels: BTreeMap<String, ScoreLevel>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMatchResult {
    pub rule_name: String,
    pub score: u32,
    pub match_percent: f64,
}

/// Human-readable trace of why the winning rule fits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reasoning {
    pub riasec: Vec<String>,
    pub ocean: Vec<String>,
    pub dat: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub best_rule: RuleMatchResult,
    pub mapping: CareerMapping,
    pub reasoning: Reasoning,
}

/// The sole output of a computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub breakdown: AssessmentBreakdown,
    pub profile: StudentProfileForRules,
    pub recommendation: Recommendation,
}
