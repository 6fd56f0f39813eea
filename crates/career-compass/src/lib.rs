//! Scoring core for the multi-instrument learner questionnaire.
//!
//! Answers flow one way: submissions and questions are aggregated per category, classified
//! into bands, projected into a rule-matching profile and finally matched against the career
//! rule catalog. The same engine backs in-process callers and the HTTP recomputation route.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

pub use assessment::{compute_result, AssessmentEngine, AssessmentError, AssessmentResult};
