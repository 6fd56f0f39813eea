use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::domain::SubmissionPayload;
use super::engine::AssessmentEngine;
use super::tables::SCORING_TABLES_VERSION;

/// Router exposing the recomputation endpoint and a read-only catalog listing.
pub fn assessment_router(engine: Arc<AssessmentEngine>) -> Router {
    Router::new()
        .route("/api/v1/assessments/result", post(result_handler))
        .route("/api/v1/assessments/catalog", get(catalog_handler))
        .with_state(engine)
}

pub(crate) async fn result_handler(
    State(engine): State<Arc<AssessmentEngine>>,
    Json(payload): Json<SubmissionPayload>,
) -> Response {
    match engine.compute(&payload) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            error!(error = %err, "assessment computation failed");
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRuleView {
    pub rule_name: String,
    pub ideal_career: String,
    pub rule_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub tables_version: u32,
    pub rules: Vec<CatalogRuleView>,
}

impl CatalogView {
    pub fn from_engine(engine: &AssessmentEngine) -> Self {
        let catalog = engine.catalog();
        let rules = catalog
            .rules()
            .iter()
            .map(|rule| CatalogRuleView {
                rule_name: rule.rule_name.clone(),
                ideal_career: catalog
                    .mapping_for(&rule.rule_name)
                    .map(|mapping| mapping.ideal_career.clone())
                    .unwrap_or_default(),
                rule_score: rule.rule_score,
            })
            .collect();

        Self {
            tables_version: SCORING_TABLES_VERSION,
            rules,
        }
    }
}

pub(crate) async fn catalog_handler(State(engine): State<Arc<AssessmentEngine>>) -> Json<CatalogView> {
    Json(CatalogView::from_engine(&engine))
}
