use super::domain::{AssessmentBreakdown, ScoreLevel, StudentProfileForRules};
use super::tables::{dat_short_code, ocean_letter};

/// Projects a breakdown into the letters and levels the rule scorer matches against.
///
/// Moderate psychometric categories land in neither OCEAN list. When two aptitude
/// categories resolve to the same short code, the later key (in key order) wins.
pub fn build_profile(breakdown: &AssessmentBreakdown) -> StudentProfileForRules {
    let mut profile = StudentProfileForRules {
        riasec_top3: breakdown.interest.top3.clone(),
        ..StudentProfileForRules::default()
    };

    for (key, score) in &breakdown.psychometric.categories {
        let Some(letter) = ocean_letter(key) else {
            continue;
        };
        match score.category_score_level {
            ScoreLevel::High => profile.ocean_high.push(letter),
            ScoreLevel::Low => profile.ocean_low.push(letter),
            ScoreLevel::Moderate => {}
        }
    }

    for (key, score) in &breakdown.aptitude.categories {
        profile
            .dat_levels
            .insert(dat_short_code(key), score.category_score_level);
    }

    profile
}
