use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::AnalysisPrompt;
use super::domain::ProfileRecord;
use super::engine::{BaselineScore, LeadScoringEngine};
use super::scored::ScoredProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub profile: ProfileRecord,
    /// Raw text returned by the model, if the caller made that call.
    #[serde(default)]
    pub llm_response: Option<String>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub profile: ProfileRecord,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}

/// Router builder exposing the scoring pipeline over HTTP.
pub fn lead_router(engine: Arc<LeadScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/leads/score", post(score_handler))
        .route("/api/v1/leads/baseline", post(baseline_handler))
        .route("/api/v1/leads/prompt", post(prompt_handler))
        .with_state(engine)
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<LeadScoringEngine>>,
    Json(request): Json<ScoreRequest>,
) -> Json<ScoredProfile> {
    let processed_at = request.processed_at.unwrap_or_else(Utc::now);
    Json(engine.score(
        &request.profile,
        request.llm_response.as_deref(),
        processed_at,
    ))
}

pub(crate) async fn baseline_handler(
    State(engine): State<Arc<LeadScoringEngine>>,
    Json(request): Json<ProfileRequest>,
) -> Json<BaselineScore> {
    let now = request.processed_at.unwrap_or_else(Utc::now);
    Json(engine.baseline(&request.profile, now))
}

pub(crate) async fn prompt_handler(
    State(engine): State<Arc<LeadScoringEngine>>,
    Json(request): Json<ProfileRequest>,
) -> Json<AnalysisPrompt> {
    Json(engine.prompt(&request.profile))
}
