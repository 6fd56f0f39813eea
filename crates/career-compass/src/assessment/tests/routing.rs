use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use super::common::*;
use crate::assessment::router::assessment_router;

fn app() -> Router {
    assessment_router(Arc::new(standard_engine()))
}

fn post_json(body: String) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/assessments/result")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request")
}

#[tokio::test]
async fn computes_result_over_http() {
    let payload = serde_json::to_string(&design_payload()).expect("serialize payload");

    let response = app().oneshot(post_json(payload)).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body["recommendation"]["bestRule"]["ruleName"],
        "Architecture & Built Environment"
    );
    assert_eq!(body["recommendation"]["bestRule"]["score"], 41);
    assert_eq!(body["recommendation"]["bestRule"]["matchPercent"], 1.0);
    assert_eq!(body["profile"]["riasecTop3"], serde_json::json!(["R", "A", "I"]));
    assert_eq!(
        body["breakdown"]["adversity"]["aqLevel"],
        serde_json::json!("Moderate")
    );
    assert_eq!(
        body["breakdown"]["aptitude"]["categories"]["abstract"]["categoryScoreLevel"],
        "High"
    );
}

#[tokio::test]
async fn accepts_version_one_payloads() {
    let body = serde_json::json!({
        "version": 1,
        "submissions": [{ "questionId": "q1", "selectedOptionId": "q1-a" }],
        "questions": [{
            "id": "q1",
            "type": "interest",
            "category": "Social",
            "options": [{ "id": "q1-a", "text": "Agree" }]
        }]
    });

    let response = app()
        .oneshot(post_json(body.to_string()))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["profile"]["riasecTop3"], serde_json::json!(["S"]));
}

#[tokio::test]
async fn rejects_unsupported_payload_version() {
    let body = serde_json::json!({
        "version": 3,
        "submissions": [],
        "questions": []
    });

    let response = app()
        .oneshot(post_json(body.to_string()))
        .await
        .expect("response");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn rejects_malformed_body() {
    let response = app()
        .oneshot(post_json("{ not json".to_string()))
        .await
        .expect("response");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn lists_rule_catalog() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/v1/assessments/catalog")
        .body(Body::empty())
        .expect("request");

    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["tablesVersion"], 1);
    let rules = body["rules"].as_array().expect("rules array");
    assert_eq!(rules.len(), 15);
    assert_eq!(rules[0]["ruleName"], "Engineering & Design");
    assert_eq!(rules[0]["ruleScore"], 56.0);
    assert!(rules[0]["idealCareer"].as_str().is_some_and(|career| !career.is_empty()));
}
