use tracing::debug;

use super::catalog::CareerRule;
use crate::assessment::domain::{RuleMatchResult, ScoreLevel, StudentProfileForRules};

/// Points for each rule letter found in the matching profile list.
pub const LETTER_POINTS: u32 = 5;

/// Contribution of one DAT requirement given the learner's level in that domain.
pub fn dat_points(required: u8, level: ScoreLevel) -> u32 {
    match (required, level) {
        (5, ScoreLevel::High) => 5,
        (5, ScoreLevel::Moderate) => 3,
        (5, ScoreLevel::Low) => 1,
        (3, ScoreLevel::High | ScoreLevel::Moderate) => 3,
        (3, ScoreLevel::Low) => 1,
        _ => 1,
    }
}

/// Additive score of `rule` against `profile`, normalized by the rule's `ruleScore`.
pub fn score_rule(rule: &CareerRule, profile: &StudentProfileForRules) -> RuleMatchResult {
    let letter_hits = rule
        .riasec_letters()
        .filter(|letter| profile.riasec_top3.contains(letter))
        .count()
        + rule
            .high_ocean_letters()
            .filter(|letter| profile.ocean_high.contains(letter))
            .count()
        + rule
            .low_ocean_letters()
            .filter(|letter| profile.ocean_low.contains(letter))
            .count();

    let dat_score: u32 = rule
        .dat_score_rules
        .iter()
        .filter_map(|requirement| {
            profile
                .dat_levels
                .get(&requirement.short_code)
                .map(|level| dat_points(requirement.score, *level))
        })
        .sum();

    let score = LETTER_POINTS * letter_hits as u32 + dat_score;

    let match_percent = if rule.rule_score > 0.0 {
        f64::from(score) / rule.rule_score
    } else {
        debug!(rule = %rule.rule_name, rule_score = rule.rule_score, "degenerate rule score");
        0.0
    };

    RuleMatchResult {
        rule_name: rule.rule_name.clone(),
        score,
        match_percent,
    }
}
