use super::catalog::RuleCatalog;
use super::reasoning::build_reasoning;
use super::scorer::score_rule;
use crate::assessment::domain::{Recommendation, RuleMatchResult, StudentProfileForRules};
use crate::assessment::engine::AssessmentError;

/// Scores every rule and orders the results by match percent, highest first. The sort is
/// stable, so equal percentages keep catalog order.
pub fn rank_rules(catalog: &RuleCatalog, profile: &StudentProfileForRules) -> Vec<RuleMatchResult> {
    let mut results: Vec<RuleMatchResult> = catalog
        .rules()
        .iter()
        .map(|rule| score_rule(rule, profile))
        .collect();
    results.sort_by(|a, b| b.match_percent.total_cmp(&a.match_percent));
    results
}

pub fn recommend(
    catalog: &RuleCatalog,
    profile: &StudentProfileForRules,
) -> Result<Recommendation, AssessmentError> {
    let best_rule = rank_rules(catalog, profile)
        .into_iter()
        .next()
        .ok_or(AssessmentError::EmptyCatalog)?;

    let missing_mapping = || AssessmentError::MissingCareerMapping {
        rule_name: best_rule.rule_name.clone(),
    };
    let mapping = catalog
        .mapping_for(&best_rule.rule_name)
        .ok_or_else(missing_mapping)?
        .clone();
    let rule = catalog
        .rule(&best_rule.rule_name)
        .ok_or_else(missing_mapping)?;
    let reasoning = build_reasoning(rule, profile);

    Ok(Recommendation {
        best_rule,
        mapping,
        reasoning,
    })
}
