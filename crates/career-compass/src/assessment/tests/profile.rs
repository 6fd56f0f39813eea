use std::collections::BTreeMap;

use super::common::*;
use crate::assessment::aggregation::DomainTotals;
use crate::assessment::breakdown::assemble;
use crate::assessment::domain::{AssessmentBreakdown, ScoreLevel};
use crate::assessment::profile::build_profile;

fn raw(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
    entries
        .iter()
        .map(|(key, raw)| ((*key).to_string(), *raw))
        .collect()
}

fn breakdown_with(
    psychometric: &[(&str, u32)],
    aptitude: &[(&str, u32)],
    interest: &[(&str, u32)],
) -> AssessmentBreakdown {
    assemble(&DomainTotals {
        psychometric: raw(psychometric),
        aptitude: raw(aptitude),
        interest: raw(interest),
        ..DomainTotals::default()
    })
}

#[test]
fn riasec_letters_are_copied_from_interest_top3() {
    let breakdown = breakdown_with(&[], &[], &[("social", 5), ("enterprising", 4), ("artistic", 3)]);
    let profile = build_profile(&breakdown);
    assert_eq!(profile.riasec_top3, vec!['S', 'E', 'A']);
}

#[test]
fn ocean_lists_skip_moderate_traits() {
    let breakdown = breakdown_with(
        &[
            ("openness", 20),
            ("conscientiousness", 15),
            ("extraversion", 8),
            ("agreeableness", 18),
            ("neuroticism", 12),
        ],
        &[],
        &[],
    );

    let profile = build_profile(&breakdown);

    assert_eq!(profile.ocean_high, vec!['A', 'O']);
    assert_eq!(profile.ocean_low, vec!['E', 'N']);
    assert!(!profile.ocean_high.contains(&'C'));
    assert!(!profile.ocean_low.contains(&'C'));
}

#[test]
fn unaliased_psychometric_keys_use_first_letter() {
    let breakdown = breakdown_with(&[("grit", 22), ("humility", 3)], &[], &[]);
    let profile = build_profile(&breakdown);

    assert_eq!(profile.ocean_high, vec!['G']);
    assert_eq!(profile.ocean_low, vec!['H']);
}

#[test]
fn dat_levels_resolve_aliases_and_fall_back_to_uppercase() {
    let breakdown = breakdown_with(
        &[],
        &[("verbal", 5), ("speed & accuracy", 1), ("clerical", 2)],
        &[],
    );

    let profile = build_profile(&breakdown);

    let expected = BTreeMap::from([
        ("CLERICAL".to_string(), ScoreLevel::High),
        ("PSA".to_string(), ScoreLevel::Low),
        ("VR".to_string(), ScoreLevel::High),
    ]);
    assert_eq!(profile.dat_levels, expected);
}

#[test]
fn colliding_dat_codes_keep_the_later_key() {
    // "numerical" sorts after "na", so its level wins.
    let breakdown = breakdown_with(&[], &[("na", 5), ("numerical", 1)], &[]);
    let profile = build_profile(&breakdown);

    assert_eq!(profile.dat_levels.len(), 1);
    assert_eq!(profile.dat_levels.get("NA"), Some(&ScoreLevel::Low));
}

#[test]
fn design_learner_profile() {
    let engine = standard_engine();
    let breakdown = engine.breakdown(&design_payload());

    let actual = build_profile(&breakdown);

    let expected = profile(
        "RAI",
        "CO",
        "AE",
        &[
            ("AR", ScoreLevel::High),
            ("MR", ScoreLevel::Moderate),
            ("NA", ScoreLevel::Moderate),
            ("SR", ScoreLevel::High),
            ("VR", ScoreLevel::Moderate),
        ],
    );
    assert_eq!(actual, expected);
}
