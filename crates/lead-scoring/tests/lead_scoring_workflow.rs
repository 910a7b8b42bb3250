//! End-to-end scenarios for the lead qualification pipeline.
//!
//! Everything here goes through the public engine, loader, exporter and router
//! so extraction, rubric, model merge and tiering are exercised together.

use std::io::Cursor;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use lead_scoring::workflows::qualification::{
    lead_router, load_profiles, write_outreach_csv, AnalysisStatus, EducationLevel, Industry,
    LeadScoringEngine, ProfileRecord, QualificationLevel, ScoringConfig, FALLBACK_REASONING,
};

const FOUNDER_PROFILE: &str = include_str!("fixtures/founder_profile.json");
const FOUNDER_ANALYSIS: &str = include_str!("fixtures/founder_analysis.txt");

fn processed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn engine() -> LeadScoringEngine {
    LeadScoringEngine::new(ScoringConfig::default())
}

fn founder() -> ProfileRecord {
    serde_json::from_str(FOUNDER_PROFILE).expect("founder fixture")
}

fn profile(value: Value) -> ProfileRecord {
    serde_json::from_value(value).expect("profile fixture")
}

#[test]
fn seasoned_finance_founder_is_excellent_without_model() {
    let scored = engine().score(&founder(), None, processed_at());

    assert_eq!(scored.total_experience_years, 17);
    assert_eq!(scored.education_level, EducationLevel::Bachelor);
    assert_eq!(scored.industry, Industry::Finance);
    assert_eq!(
        (
            scored.experience_score,
            scored.education_score,
            scored.industry_score
        ),
        (40, 15, 25)
    );
    assert_eq!(scored.total_score, 80);
    assert_eq!(scored.qualification_level, QualificationLevel::Excellent);
    assert_eq!(scored.outreach_action, "immediate follow-up");

    assert_eq!(scored.full_name.as_deref(), Some("Camille Laurent"));
    assert_eq!(
        scored.profile_url.as_deref(),
        Some("https://www.linkedin.com/in/camille-laurent")
    );
    assert_eq!(scored.current_company.as_deref(), Some("AYOMI"));
    assert_eq!(scored.location.as_deref(), Some("Paris, Île-de-France, France"));

    assert_eq!(scored.llm_analysis_status, AnalysisStatus::Fallback);
    assert_eq!(scored.llm_education_reasoning, FALLBACK_REASONING);
    assert_eq!(scored.llm_skills_confidence, "unknown");
    assert!(!scored.analysis_summary.ai_used);
    assert_eq!(scored.processing_version, "2.0_ai_enhanced");
}

#[test]
fn model_analysis_upgrades_education_and_merges_skills() {
    let scored = engine().score(&founder(), Some(FOUNDER_ANALYSIS), processed_at());

    assert_eq!(scored.llm_analysis_status, AnalysisStatus::Success);
    assert_eq!(scored.education_level, EducationLevel::Master);
    assert_eq!(scored.education_score, 25);
    assert_eq!(scored.total_score, 90);
    assert_eq!(scored.analysis_summary.score_improvement, 10);
    assert!(scored.analysis_summary.education_enhanced);
    assert!(!scored.analysis_summary.industry_enhanced);
    assert!(scored.analysis_summary.skills_enhanced);
    assert_eq!(
        scored.skills,
        vec![
            "fundraising",
            "equity research",
            "leadership",
            "entrepreneurship",
            "fintech",
            "finance",
        ]
    );
    assert_eq!(scored.llm_industry_confidence, "high");
    assert_eq!(scored.llm_skills_confidence, "medium");
    assert!(scored
        .llm_education_reasoning
        .starts_with("French engineering school"));
    assert_eq!(scored.scoring_breakdown.education, "master → 25/30 points");

    let echoed = scored.llm_analysis.expect("analysis echoed");
    assert_eq!(echoed["industry_analysis"]["industry"], "finance");
}

#[test]
fn sparse_profile_scores_from_about_text_alone() {
    let sparse = profile(json!({
        "basic_info": { "about": "teacher at university" },
        "education": [],
        "experience": []
    }));

    let scored = engine().score(&sparse, None, processed_at());

    assert_eq!(scored.total_experience_years, 0);
    assert_eq!(scored.education_level, EducationLevel::HighSchool);
    assert_eq!(scored.industry, Industry::Healthcare);
    assert_eq!(scored.total_score, 25);
    assert_eq!(scored.qualification_level, QualificationLevel::Poor);
    assert_eq!(scored.outreach_action, "low priority");
}

#[test]
fn confident_industry_override_rescues_unmatched_profile() {
    let unmatched = profile(json!({
        "basic_info": { "headline": "Store manager at a family bakery" },
        "experience": [
            {
                "title": "Store manager",
                "company": "Miller Bakery",
                "is_current": true,
                "start_date": { "year": 2019, "month": 1 }
            }
        ]
    }));
    let response = json!({
        "education_analysis": { "education_level": "high_school", "confidence": "medium" },
        "industry_analysis": {
            "industry": "healthcare",
            "confidence": "high",
            "reasoning": "Bakery supplies the regional hospital network"
        },
        "skills_analysis": { "skills": [], "confidence": "low" }
    })
    .to_string();

    let baseline = engine().score(&unmatched, None, processed_at());
    let scored = engine().score(&unmatched, Some(&response), processed_at());

    assert_eq!(baseline.industry, Industry::Other);
    assert_eq!(baseline.industry_score, 10);
    assert_eq!(scored.industry, Industry::Healthcare);
    assert_eq!(scored.industry_score, 20);
    assert!(scored.analysis_summary.industry_enhanced);
    assert_eq!(scored.analysis_summary.score_improvement, 10);
    assert_eq!(scored.skills, baseline.skills);
    assert_eq!(scored.llm_skills_reasoning, FALLBACK_REASONING);
}

#[test]
fn malformed_model_output_matches_rule_based_run() {
    let engine = engine();
    let founder = founder();

    let fallback = engine.score(
        &founder,
        Some("```json\n{not valid json}\n```"),
        processed_at(),
    );
    let without = engine.score(&founder, None, processed_at());

    assert_eq!(fallback.llm_analysis_status, AnalysisStatus::Fallback);
    assert!(fallback.llm_analysis.is_none());
    assert_eq!(fallback.analysis_summary.score_improvement, 0);
    assert_eq!(fallback, without);
}

#[test]
fn partial_model_output_is_discarded_whole() {
    let missing_skills = json!({
        "education_analysis": { "education_level": "phd", "confidence": "high" },
        "industry_analysis": { "industry": "technology", "confidence": "high" }
    })
    .to_string();

    let scored = engine().score(&founder(), Some(&missing_skills), processed_at());

    assert_eq!(scored.llm_analysis_status, AnalysisStatus::Fallback);
    assert_eq!(scored.education_level, EducationLevel::Bachelor);
    assert_eq!(scored.total_score, 80);
}

#[test]
fn scoring_is_deterministic_for_fixed_inputs() {
    let engine = engine();
    let founder = founder();

    let first = engine.score(&founder, Some(FOUNDER_ANALYSIS), processed_at());
    let second = engine.score(&founder, Some(FOUNDER_ANALYSIS), processed_at());

    assert_eq!(first, second);
    assert_eq!(
        first.total_score,
        first.experience_score + first.education_score + first.industry_score
    );
}

#[test]
fn batch_loads_scores_and_exports() {
    let batch = format!(
        "[{FOUNDER_PROFILE}, {}]",
        json!({ "basic_info": { "fullname": "Sam Doe" } })
    );
    let profiles = load_profiles(Cursor::new(batch)).expect("batch input");
    assert_eq!(profiles.len(), 2);

    let engine = engine();
    let scored: Vec<_> = profiles
        .iter()
        .map(|profile| engine.score(profile, None, processed_at()))
        .collect();

    assert_eq!(scored[1].total_score, 15);
    assert_eq!(scored[1].qualification_level, QualificationLevel::Unqualified);
    assert_eq!(scored[1].outreach_action, "exclusion list");

    let mut buffer = Vec::new();
    write_outreach_csv(&mut buffer, &scored).expect("csv export");
    let csv = String::from_utf8(buffer).expect("utf8");
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.lines().nth(2).is_some_and(|line| line.starts_with("Sam Doe,")));
}

#[tokio::test]
async fn http_score_route_applies_model_response() {
    let router = lead_router(Arc::new(engine()));
    let body = json!({
        "profile": founder(),
        "llm_response": FOUNDER_ANALYSIS,
        "processed_at": "2024-12-01T09:00:00Z"
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/leads/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("router response");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&bytes).expect("json");

    assert_eq!(payload["total_score"], 90);
    assert_eq!(payload["llm_analysis_status"], "success");
    assert_eq!(payload["education_level"], "master");
    assert_eq!(payload["analysis_summary"]["score_improvement"], 10);
}
