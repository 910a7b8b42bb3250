use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::qualification::router::{prompt_handler, score_handler};
use crate::workflows::qualification::{
    lead_router, AnalysisStatus, ProfileRequest, PromptTemplate, QualificationLevel, ScoreRequest,
};

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("encode body")))
        .expect("request")
}

#[tokio::test]
async fn score_handler_merges_model_response() {
    let request = ScoreRequest {
        profile: founder_profile(),
        llm_response: Some(format!("```json\n{}\n```", founder_ai_response())),
        processed_at: Some(processed_at()),
    };

    let Json(scored) = score_handler(State(Arc::new(engine())), Json(request)).await;

    assert_eq!(scored.total_score, 90);
    assert_eq!(scored.qualification_level, QualificationLevel::Excellent);
    assert_eq!(scored.llm_analysis_status, AnalysisStatus::Success);
    assert_eq!(scored.processed_at, processed_at());
}

#[tokio::test]
async fn prompt_handler_selects_template() {
    let request = ProfileRequest {
        profile: educator_profile(),
        processed_at: None,
    };

    let Json(prompt) = prompt_handler(State(Arc::new(engine())), Json(request)).await;

    assert_eq!(prompt.template, PromptTemplate::LimitedData);
}

#[tokio::test]
async fn score_route_returns_flat_record() {
    let router = lead_router(Arc::new(engine()));
    let body = json!({
        "profile": founder_profile(),
        "processed_at": "2024-12-01T09:00:00Z"
    });

    let response = router
        .oneshot(post_json("/api/v1/leads/score", body))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_score"], 80);
    assert_eq!(payload["qualification_level"], "excellent");
    assert_eq!(payload["outreach_action"], "immediate follow-up");
    assert_eq!(payload["llm_analysis_status"], "fallback");
    assert_eq!(payload["llm_education_reasoning"], "Fallback rule-based analysis used");
    assert_eq!(payload["llm_analysis"], serde_json::Value::Null);
    assert_eq!(payload["processed_at"], "2024-12-01T09:00:00Z");
    assert_eq!(payload["analysis_summary"]["ai_used"], false);
}

#[tokio::test]
async fn baseline_route_returns_notes() {
    let router = lead_router(Arc::new(engine()));
    let body = json!({
        "profile": educator_profile(),
        "processed_at": "2024-12-01T09:00:00Z"
    });

    let response = router
        .oneshot(post_json("/api/v1/leads/baseline", body))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["breakdown"]["total_score"], 25);
    assert_eq!(payload["breakdown"]["qualification_level"], "poor");
    assert_eq!(payload["notes"]["industry"], "healthcare → 20/30 points");
    assert_eq!(payload["features"]["skills"], json!(["education"]));
}

#[tokio::test]
async fn score_route_rejects_payload_without_profile() {
    let router = lead_router(Arc::new(engine()));

    let response = router
        .oneshot(post_json(
            "/api/v1/leads/score",
            json!({ "llm_response": "{}" }),
        ))
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
