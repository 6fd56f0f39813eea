//! Career rule catalog, weighted rule scoring and recommendation selection.

mod catalog;
mod reasoning;
mod scorer;
mod selector;
mod standard;

pub use catalog::{CareerMapping, CareerRule, CatalogError, DatScoreRule, RuleCatalog};
pub use reasoning::build_reasoning;
pub use scorer::{dat_points, score_rule, LETTER_POINTS};
pub use selector::{rank_rules, recommend};
