use super::analysis::{
    build_analysis_prompt, interpret_response, AiAnalysis, AnalysisPrompt, AnalysisSection,
};
use super::domain::{ExtractedFeatures, ProfileRecord};
use super::enhancement::enhance;
use super::evaluation::{ScoreBreakdown, ScoringConfig, ScoringNotes};
use super::extraction::{
    extract_education_level, extract_education_level_with_school_fallback,
    extract_experience_years, extract_industry,
};
use super::scored::{AnalysisStatus, ScoredProfile, FALLBACK_REASONING};
use super::skills::aggregate_skills;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Rule-based features and their rubric scores, before any model input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineScore {
    pub features: ExtractedFeatures,
    pub breakdown: ScoreBreakdown,
    pub notes: ScoringNotes,
}

/// Stateless scorer; safe to share across threads and reuse for any number of profiles.
#[derive(Debug, Clone, Default)]
pub struct LeadScoringEngine {
    config: ScoringConfig,
}

impl LeadScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// `now` supplies the current year for open-ended experience entries.
    pub fn extract_features(&self, profile: &ProfileRecord, now: DateTime<Utc>) -> ExtractedFeatures {
        let education_level = if self.config.prestigious_school_fallback {
            extract_education_level_with_school_fallback(profile)
        } else {
            extract_education_level(profile)
        };

        ExtractedFeatures {
            experience_years: extract_experience_years(profile, now.year()),
            education_level,
            industry: extract_industry(profile),
            skills: aggregate_skills(profile),
        }
    }

    pub fn baseline(&self, profile: &ProfileRecord, now: DateTime<Utc>) -> BaselineScore {
        let features = self.extract_features(profile, now);
        let breakdown = ScoreBreakdown::for_features(&features);
        let notes = ScoringNotes::describe(&features, &breakdown);
        BaselineScore {
            features,
            breakdown,
            notes,
        }
    }

    pub fn prompt(&self, profile: &ProfileRecord) -> AnalysisPrompt {
        build_analysis_prompt(profile)
    }

    /// Run the full pipeline. A missing or unusable model response degrades to
    /// rule-based scoring and is reported through `llm_analysis_status`.
    pub fn score(
        &self,
        profile: &ProfileRecord,
        llm_response: Option<&str>,
        processed_at: DateTime<Utc>,
    ) -> ScoredProfile {
        let baseline = self.extract_features(profile, processed_at);

        let analysis = match llm_response {
            None => {
                debug!("no model response supplied; scoring with rule-based features");
                None
            }
            Some(text) => match interpret_response(Some(text)) {
                Ok(analysis) => Some(analysis),
                Err(err) => {
                    warn!(reason = %err, "model analysis rejected; falling back to rule-based features");
                    None
                }
            },
        };

        let scored = self.assemble(profile, &baseline, analysis.as_ref(), processed_at);

        info!(
            total_score = scored.total_score,
            qualification = scored.qualification_level.label(),
            status = scored.llm_analysis_status.label(),
            score_improvement = scored.analysis_summary.score_improvement,
            "profile scored"
        );

        scored
    }

    fn assemble(
        &self,
        profile: &ProfileRecord,
        baseline: &ExtractedFeatures,
        analysis: Option<&AiAnalysis>,
        processed_at: DateTime<Utc>,
    ) -> ScoredProfile {
        let enhancement = enhance(baseline, analysis);
        let notes = ScoringNotes::describe(&enhancement.features, &enhancement.breakdown);
        let summary = enhancement.summary;
        let features = enhancement.features;
        let breakdown = enhancement.breakdown;

        ScoredProfile {
            profile_url: profile.basic_info.profile_url.clone(),
            full_name: profile.full_name().map(str::to_string),
            current_position: profile.current_position().map(str::to_string),
            current_company: profile.current_company().map(str::to_string),
            location: profile.location().map(str::to_string),
            summary: profile.about().map(str::to_string),

            total_experience_years: features.experience_years,
            education_level: features.education_level,
            industry: features.industry,
            skills: features.skills,

            experience_score: breakdown.experience_score,
            education_score: breakdown.education_score,
            industry_score: breakdown.industry_score,
            total_score: breakdown.total_score,
            qualification_level: breakdown.qualification_level,
            outreach_action: breakdown.qualification_level.outreach_action().to_string(),
            scoring_breakdown: notes,

            llm_education_reasoning: reasoning_or_fallback(analysis.and_then(AiAnalysis::education)),
            llm_industry_reasoning: reasoning_or_fallback(analysis.and_then(AiAnalysis::industry)),
            llm_skills_reasoning: reasoning_or_fallback(analysis.and_then(AiAnalysis::skills)),
            llm_education_confidence: summary.confidence_levels.education.clone(),
            llm_industry_confidence: summary.confidence_levels.industry.clone(),
            llm_skills_confidence: summary.confidence_levels.skills.clone(),
            llm_analysis_status: if analysis.is_some() {
                AnalysisStatus::Success
            } else {
                AnalysisStatus::Fallback
            },
            llm_analysis: analysis.map(AiAnalysis::to_value),

            analysis_summary: summary,

            processed_at,
            processing_version: self.config.processing_version.clone(),
        }
    }
}

fn reasoning_or_fallback(section: Option<AnalysisSection<'_>>) -> String {
    section
        .and_then(|section| section.reasoning())
        .unwrap_or(FALLBACK_REASONING)
        .to_string()
}
