use super::domain::{EducationLevel, Industry};
use super::enhancement::AnalysisSummary;
use super::evaluation::{QualificationLevel, ScoringNotes};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FALLBACK_REASONING: &str = "Fallback rule-based analysis used";

/// Whether a usable model analysis took part in the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Success,
    Fallback,
}

impl AnalysisStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AnalysisStatus::Success => "success",
            AnalysisStatus::Fallback => "fallback",
        }
    }
}

/// Flat result record handed to downstream outreach tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProfile {
    pub profile_url: Option<String>,
    pub full_name: Option<String>,
    pub current_position: Option<String>,
    pub current_company: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,

    pub total_experience_years: u32,
    pub education_level: EducationLevel,
    pub industry: Industry,
    pub skills: Vec<String>,

    pub experience_score: u8,
    pub education_score: u8,
    pub industry_score: u8,
    pub total_score: u8,
    pub qualification_level: QualificationLevel,
    pub outreach_action: String,
    pub scoring_breakdown: ScoringNotes,

    pub llm_education_reasoning: String,
    pub llm_industry_reasoning: String,
    pub llm_skills_reasoning: String,
    pub llm_education_confidence: String,
    pub llm_industry_confidence: String,
    pub llm_skills_confidence: String,
    pub llm_analysis_status: AnalysisStatus,
    pub llm_analysis: Option<Value>,

    pub analysis_summary: AnalysisSummary,

    pub processed_at: DateTime<Utc>,
    pub processing_version: String,
}
