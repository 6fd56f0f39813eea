use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::aggregation::aggregate;
use super::breakdown::assemble;
use super::domain::{
    AssessmentBreakdown, AssessmentResult, RuleMatchResult, StudentProfileForRules,
    SubmissionPayload,
};
use super::profile::build_profile;
use super::rules::{rank_rules, recommend, CatalogError, RuleCatalog};

static STANDARD_ENGINE: OnceLock<AssessmentEngine> = OnceLock::new();

/// Stateless pipeline: aggregate, classify, profile, score rules, recommend.
///
/// Holds only the immutable rule catalog, so one engine can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    catalog: Arc<RuleCatalog>,
}

impl AssessmentEngine {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn standard() -> Result<Self, CatalogError> {
        RuleCatalog::standard().map(Self::new)
    }

    /// Process-wide engine over the built-in catalog, validated on first use.
    pub fn shared() -> Result<&'static Self, CatalogError> {
        if let Some(engine) = STANDARD_ENGINE.get() {
            return Ok(engine);
        }
        let engine = Self::standard()?;
        Ok(STANDARD_ENGINE.get_or_init(|| engine))
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn breakdown(&self, payload: &SubmissionPayload) -> AssessmentBreakdown {
        let totals = aggregate(&payload.questions, &payload.submissions);
        assemble(&totals)
    }

    pub fn rank(&self, profile: &StudentProfileForRules) -> Vec<RuleMatchResult> {
        rank_rules(&self.catalog, profile)
    }

    pub fn compute(&self, payload: &SubmissionPayload) -> Result<AssessmentResult, AssessmentError> {
        let breakdown = self.breakdown(payload);
        let profile = build_profile(&breakdown);
        let recommendation = recommend(&self.catalog, &profile)?;

        debug!(
            rule = %recommendation.best_rule.rule_name,
            score = recommendation.best_rule.score,
            match_percent = recommendation.best_rule.match_percent,
            "assessment recommendation selected"
        );

        Ok(AssessmentResult {
            breakdown,
            profile,
            recommendation,
        })
    }
}

/// Runs the full pipeline against the built-in catalog.
pub fn compute_result(payload: &SubmissionPayload) -> Result<AssessmentResult, AssessmentError> {
    AssessmentEngine::shared()?.compute(payload)
}

/// Failures of the scoring pipeline. All of them indicate catalog misconfiguration; the
/// pipeline never fails on learner input.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("no career mapping configured for rule '{rule_name}'")]
    MissingCareerMapping { rule_name: String },
    #[error("rule catalog contains no rules")]
    EmptyCatalog,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
