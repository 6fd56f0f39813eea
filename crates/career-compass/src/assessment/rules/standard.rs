use super::catalog::{CareerMapping, CareerRule, CatalogError, DatScoreRule, RuleCatalog};

struct RuleSpec {
    name: &'static str,
    riasec: Option<&'static str>,
    high: Option<&'static str>,
    low: Option<&'static str>,
    dat: &'static [(&'static str, u8)],
    rule_score: f64,
    career: &'static str,
    club: &'static str,
    ideal_for: &'static str,
    tag_line: &'static str,
}

// Declaration order is the tie-break order. Each `rule_score` is the rule's attainable
// maximum, except Engineering & Design whose published normalizer of 56 sits above its 51.
const STANDARD_RULES: &[RuleSpec] = &[
    RuleSpec {
        name: "Engineering & Design",
        riasec: Some("RIA"),
        high: Some("OC"),
        low: Some("EA"),
        dat: &[("AR", 5), ("SR", 5), ("NA", 3), ("MR", 3)],
        rule_score: 56.0,
        career: "Mechanical, Civil or Product Design Engineer",
        club: "Robotics & Makers Club",
        ideal_for: "Learners who like to build, test and improve physical systems",
        tag_line: "Design it, build it, make it work.",
    },
    RuleSpec {
        name: "Medicine & Health Sciences",
        riasec: Some("ISC"),
        high: Some("CA"),
        low: Some("N"),
        dat: &[("VR", 5), ("NA", 3), ("AR", 3)],
        rule_score: 41.0,
        career: "Doctor, Pharmacist or Biomedical Researcher",
        club: "Science & Health Club",
        ideal_for: "Learners curious about the human body who want to care for others",
        tag_line: "Science in service of people.",
    },
    RuleSpec {
        name: "Software & Data Science",
        riasec: Some("ICR"),
        high: Some("OC"),
        low: Some("N"),
        dat: &[("NA", 5), ("AR", 5), ("VR", 3)],
        rule_score: 43.0,
        career: "Software Engineer or Data Scientist",
        club: "Coding Club",
        ideal_for: "Learners who enjoy logic puzzles, patterns and systematic problem solving",
        tag_line: "Turn patterns into products.",
    },
    RuleSpec {
        name: "Law & Public Policy",
        riasec: Some("EIS"),
        high: Some("EC"),
        low: Some("N"),
        dat: &[("VR", 5), ("LU", 5), ("AR", 3)],
        rule_score: 43.0,
        career: "Lawyer, Policy Analyst or Civil Servant",
        club: "Debate & Model UN Club",
        ideal_for: "Learners who argue persuasively and care about rules and fairness",
        tag_line: "Make the case, shape the rules.",
    },
    RuleSpec {
        name: "Business & Entrepreneurship",
        riasec: Some("ECS"),
        high: Some("EO"),
        low: Some("N"),
        dat: &[("NA", 5), ("VR", 3), ("PSA", 3)],
        rule_score: 41.0,
        career: "Entrepreneur, Product Manager or Management Consultant",
        club: "Entrepreneurship Cell",
        ideal_for: "Learners who like to lead, pitch ideas and organise people",
        tag_line: "Spot the opportunity, lead the venture.",
    },
    RuleSpec {
        name: "Finance & Accounting",
        riasec: Some("CEI"),
        high: Some("C"),
        low: Some("N"),
        dat: &[("NA", 5), ("PSA", 5), ("VR", 3)],
        rule_score: 38.0,
        career: "Chartered Accountant, Financial Analyst or Actuary",
        club: "Finance & Investment Club",
        ideal_for: "Learners who are precise with numbers and enjoy order",
        tag_line: "Numbers you can trust.",
    },
    RuleSpec {
        name: "Creative Arts & Media",
        riasec: Some("AES"),
        high: Some("OE"),
        low: None,
        dat: &[("SR", 3), ("VR", 3), ("LU", 3)],
        rule_score: 34.0,
        career: "Graphic Designer, Animator or Filmmaker",
        club: "Art & Design Club",
        ideal_for: "Learners who express ideas visually and value originality",
        tag_line: "Imagine boldly, create freely.",
    },
    RuleSpec {
        name: "Education & Social Work",
        riasec: Some("SAE"),
        high: Some("AE"),
        low: Some("N"),
        dat: &[("VR", 5), ("LU", 3)],
        rule_score: 38.0,
        career: "Teacher, Special Educator or Social Worker",
        club: "Peer Mentoring Club",
        ideal_for: "Learners energised by helping others learn and grow",
        tag_line: "Lift others as you rise.",
    },
    RuleSpec {
        name: "Psychology & Counselling",
        riasec: Some("SIA"),
        high: Some("AO"),
        low: Some("N"),
        dat: &[("VR", 5), ("AR", 3)],
        rule_score: 38.0,
        career: "Psychologist, Counsellor or Behavioural Researcher",
        club: "Psychology Circle",
        ideal_for: "Learners curious about why people think and act as they do",
        tag_line: "Understand minds, support lives.",
    },
    RuleSpec {
        name: "Architecture & Built Environment",
        riasec: Some("ARI"),
        high: Some("OC"),
        low: None,
        dat: &[("SR", 5), ("AR", 5), ("MR", 3), ("NA", 3)],
        rule_score: 41.0,
        career: "Architect or Urban Planner",
        club: "Architecture & Model Making Club",
        ideal_for: "Learners who think in three dimensions and care about form and function",
        tag_line: "Shape the spaces we live in.",
    },
    RuleSpec {
        name: "Skilled Trades & Technical",
        riasec: Some("RCE"),
        high: Some("C"),
        low: None,
        dat: &[("MR", 5), ("SR", 3), ("PSA", 3)],
        rule_score: 31.0,
        career: "Electrician, Automotive Technician or CNC Machinist",
        club: "Technical Workshop Club",
        ideal_for: "Learners who prefer hands-on work with clear, practical results",
        tag_line: "Skilled hands keep the world running.",
    },
    RuleSpec {
        name: "Hospitality & Tourism",
        riasec: Some("ESC"),
        high: Some("EA"),
        low: Some("N"),
        dat: &[("LU", 3), ("VR", 3), ("PSA", 1)],
        rule_score: 37.0,
        career: "Hotel Manager, Event Planner or Travel Consultant",
        club: "Events & Hospitality Club",
        ideal_for: "Learners who enjoy hosting, organising and meeting new people",
        tag_line: "Create experiences people remember.",
    },
    RuleSpec {
        name: "Journalism & Communication",
        riasec: Some("AIE"),
        high: Some("OE"),
        low: None,
        dat: &[("VR", 5), ("LU", 5)],
        rule_score: 35.0,
        career: "Journalist, Content Strategist or Public Relations Specialist",
        club: "School Newspaper & Media Club",
        ideal_for: "Learners who love stories, language and asking questions",
        tag_line: "Find the story, tell it well.",
    },
    RuleSpec {
        name: "Agriculture & Environmental Science",
        riasec: Some("RIC"),
        high: Some("CO"),
        low: None,
        dat: &[("AR", 3), ("NA", 3), ("MR", 3)],
        rule_score: 34.0,
        career: "Environmental Scientist, Agronomist or Forestry Officer",
        club: "Eco & Green Club",
        ideal_for: "Learners who care about nature and enjoy practical field science",
        tag_line: "Grow a sustainable future.",
    },
    RuleSpec {
        name: "Defence & Public Safety",
        riasec: Some("RSE"),
        high: Some("CE"),
        low: Some("N"),
        dat: &[("MR", 3), ("SR", 3), ("PSA", 5)],
        rule_score: 41.0,
        career: "Armed Forces Officer, Police Officer or Emergency Responder",
        club: "Cadet Corps",
        ideal_for: "Learners who value discipline, teamwork and action under pressure",
        tag_line: "Serve, protect, lead.",
    },
];

impl RuleCatalog {
    /// The built-in catalog shipped with the scoring tables.
    pub fn standard() -> Result<Self, CatalogError> {
        let rules = STANDARD_RULES
            .iter()
            .map(|spec| CareerRule {
                rule_name: spec.name.to_string(),
                riasec_combination: spec.riasec.map(str::to_string),
                high_ocean_traits: spec.high.map(str::to_string),
                low_ocean_traits: spec.low.map(str::to_string),
                dat_score_rules: spec
                    .dat
                    .iter()
                    .map(|(code, score)| DatScoreRule {
                        short_code: (*code).to_string(),
                        score: *score,
                    })
                    .collect(),
                rule_score: spec.rule_score,
            })
            .collect();

        let mappings = STANDARD_RULES
            .iter()
            .map(|spec| CareerMapping {
                rule_name: spec.name.to_string(),
                ideal_career: spec.career.to_string(),
                club_to_join: spec.club.to_string(),
                ideal_for: spec.ideal_for.to_string(),
                tag_line: spec.tag_line.to_string(),
            })
            .collect();

        Self::new(rules, mappings)
    }
}
