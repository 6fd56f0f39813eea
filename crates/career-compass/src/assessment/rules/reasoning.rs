use super::catalog::{CareerRule, DatScoreRule};
use crate::assessment::domain::{Reasoning, ScoreLevel, StudentProfileForRules};

/// Re-walks the winning rule and explains each criterion the learner satisfies, plus every
/// aptitude requirement whether satisfied or not.
pub fn build_reasoning(rule: &CareerRule, profile: &StudentProfileForRules) -> Reasoning {
    let riasec = rule
        .riasec_letters()
        .filter(|letter| profile.riasec_top3.contains(letter))
        .map(riasec_sentence)
        .collect();

    let ocean = rule
        .high_ocean_letters()
        .filter(|letter| profile.ocean_high.contains(letter))
        .map(|letter| ocean_sentence(letter, true))
        .chain(
            rule.low_ocean_letters()
                .filter(|letter| profile.ocean_low.contains(letter))
                .map(|letter| ocean_sentence(letter, false)),
        )
        .collect();

    let dat = rule
        .dat_score_rules
        .iter()
        .map(|requirement| {
            dat_sentence(
                requirement,
                profile.dat_levels.get(&requirement.short_code).copied(),
            )
        })
        .collect();

    Reasoning { riasec, ocean, dat }
}

fn riasec_sentence(letter: char) -> String {
    let template = match letter {
        'R' => Some((
            "Realistic",
            "you enjoy hands-on, practical work with tools, machines and the physical world",
        )),
        'I' => Some((
            "Investigative",
            "you like to observe, analyse and solve problems through reasoning",
        )),
        'A' => Some((
            "Artistic",
            "you value self-expression, imagination and original ideas",
        )),
        'S' => Some((
            "Social",
            "you are motivated by helping, teaching and working with people",
        )),
        'E' => Some((
            "Enterprising",
            "you enjoy leading, persuading and taking initiative",
        )),
        'C' => Some((
            "Conventional",
            "you prefer structure, accuracy and well-organised tasks",
        )),
        _ => None,
    };

    match template {
        Some((name, detail)) => {
            format!("{name} ({letter}) is one of your top interests: {detail}.")
        }
        None => format!("Interest code {letter} is one of your top interests."),
    }
}

fn ocean_sentence(letter: char, high: bool) -> String {
    let template = match (letter, high) {
        ('O', true) => Some(("Openness", "you are curious and open to new ideas")),
        ('O', false) => Some(("Openness", "you prefer familiar, proven approaches")),
        ('C', true) => Some((
            "Conscientiousness",
            "you are organised, dependable and goal-directed",
        )),
        ('C', false) => Some((
            "Conscientiousness",
            "you are flexible and spontaneous rather than rule-bound",
        )),
        ('E', true) => Some(("Extraversion", "you draw energy from people and activity")),
        ('E', false) => Some((
            "Extraversion",
            "you work well independently and think before you speak",
        )),
        ('A', true) => Some((
            "Agreeableness",
            "you are cooperative and considerate of others",
        )),
        ('A', false) => Some((
            "Agreeableness",
            "you are comfortable challenging others and holding your ground",
        )),
        ('N', true) => Some((
            "Neuroticism",
            "you feel emotions intensely and stay alert to risk",
        )),
        ('N', false) => Some(("Neuroticism", "you stay calm and steady under pressure")),
        _ => None,
    };

    let direction = if high { "High" } else { "Low" };
    match template {
        Some((name, detail)) => format!("{direction} {name} ({letter}): {detail}."),
        None => format!("{direction} trait {letter} matches this path."),
    }
}

fn dat_name(short_code: &str) -> &str {
    match short_code {
        "VR" => "Verbal Reasoning",
        "NA" => "Numerical Ability",
        "AR" => "Abstract Reasoning",
        "PSA" => "Perceptual Speed & Accuracy",
        "MR" => "Mechanical Reasoning",
        "SR" => "Space Relations",
        "LU" => "Language Usage",
        other => other,
    }
}

fn required_label(weight: u8) -> &'static str {
    match weight {
        5 => "High",
        3 => "at least Moderate",
        _ => "some",
    }
}

fn dat_sentence(requirement: &DatScoreRule, actual: Option<ScoreLevel>) -> String {
    let code = requirement.short_code.as_str();
    let actual = actual.map(ScoreLevel::label).unwrap_or("not assessed");
    format!(
        "{} ({code}): this path needs {} aptitude; your level is {actual}.",
        dat_name(code),
        required_label(requirement.score),
    )
}
