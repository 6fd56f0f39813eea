use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Aptitude requirement of a rule: the DAT short code and its weight (1, 3 or 5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatScoreRule {
    pub short_code: String,
    pub score: u8,
}

/// One weighted career-matching rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRule {
    #[serde(rename = "ruleName")]
    pub rule_name: String,
    #[serde(
        rename = "riasecCombination",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub riasec_combination: Option<String>,
    #[serde(
        rename = "highOCEANTraits",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub high_ocean_traits: Option<String>,
    #[serde(
        rename = "lowOCEANTraits",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub low_ocean_traits: Option<String>,
    #[serde(rename = "datScoreRules", default, skip_serializing_if = "Vec::is_empty")]
    pub dat_score_rules: Vec<DatScoreRule>,
    /// Normalizer for the match percentage.
    #[serde(rename = "ruleScore")]
    pub rule_score: f64,
}

impl CareerRule {
    pub fn riasec_letters(&self) -> impl Iterator<Item = char> + '_ {
        letters(self.riasec_combination.as_deref())
    }

    pub fn high_ocean_letters(&self) -> impl Iterator<Item = char> + '_ {
        letters(self.high_ocean_traits.as_deref())
    }

    pub fn low_ocean_letters(&self) -> impl Iterator<Item = char> + '_ {
        letters(self.low_ocean_traits.as_deref())
    }
}

fn letters(value: Option<&str>) -> impl Iterator<Item = char> + '_ {
    value
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
}

/// Descriptive text shown for a recommended rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerMapping {
    pub rule_name: String,
    pub ideal_career: String,
    pub club_to_join: String,
    pub ideal_for: String,
    pub tag_line: String,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    rules: Vec<CareerRule>,
    mappings: Vec<CareerMapping>,
}

/// Validated rule catalog. Every rule has exactly one mapping and vice versa; rule order is
/// significant because earlier rules win score ties.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCatalog {
    rules: Vec<CareerRule>,
    mappings: Vec<CareerMapping>,
}

impl RuleCatalog {
    pub fn new(
        rules: Vec<CareerRule>,
        mappings: Vec<CareerMapping>,
    ) -> Result<Self, CatalogError> {
        if rules.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut rule_names = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !rule_names.insert(rule.rule_name.as_str()) {
                return Err(CatalogError::DuplicateRule {
                    rule_name: rule.rule_name.clone(),
                });
            }
        }

        let mut mapped = HashSet::with_capacity(mappings.len());
        for mapping in &mappings {
            if !mapped.insert(mapping.rule_name.as_str()) {
                return Err(CatalogError::DuplicateMapping {
                    rule_name: mapping.rule_name.clone(),
                });
            }
            if !rule_names.contains(mapping.rule_name.as_str()) {
                return Err(CatalogError::OrphanMapping {
                    rule_name: mapping.rule_name.clone(),
                });
            }
        }

        if let Some(rule) = rules
            .iter()
            .find(|rule| !mapped.contains(rule.rule_name.as_str()))
        {
            return Err(CatalogError::MissingMapping {
                rule_name: rule.rule_name.clone(),
            });
        }

        Ok(Self { rules, mappings })
    }

    /// Reads a `{ "rules": [...], "mappings": [...] }` JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::new(document.rules, document.mappings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn rules(&self) -> &[CareerRule] {
        &self.rules
    }

    pub fn mappings(&self) -> &[CareerMapping] {
        &self.mappings
    }

    pub fn rule(&self, rule_name: &str) -> Option<&CareerRule> {
        self.rules.iter().find(|rule| rule.rule_name == rule_name)
    }

    pub fn mapping_for(&self, rule_name: &str) -> Option<&CareerMapping> {
        self.mappings
            .iter()
            .find(|mapping| mapping.rule_name == rule_name)
    }
}

/// Raised when a catalog cannot be loaded or violates the 1:1 rule/mapping contract.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("rule catalog contains no rules")]
    Empty,
    #[error("rule '{rule_name}' is declared more than once")]
    DuplicateRule { rule_name: String },
    #[error("career mapping for '{rule_name}' is declared more than once")]
    DuplicateMapping { rule_name: String },
    #[error("rule '{rule_name}' has no career mapping")]
    MissingMapping { rule_name: String },
    #[error("career mapping '{rule_name}' does not match any rule")]
    OrphanMapping { rule_name: String },
    #[error("unable to read rule catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse rule catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
