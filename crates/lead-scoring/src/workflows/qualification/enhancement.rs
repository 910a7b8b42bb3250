//! Confidence-gated merge of model suggestions into rule-based features.
//!
//! The model never contributes points directly. It can only replace feature
//! values, which are then re-scored by the rubric.

use super::analysis::{AiAnalysis, AnalysisSection};
use super::domain::{EducationLevel, ExtractedFeatures, Industry};
use super::evaluation::ScoreBreakdown;
use super::skills::{merge_skill_lists, SKILL_LIMIT};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const UNKNOWN_CONFIDENCE: &str = "unknown";

/// Final features and scores after the merge, with an audit summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enhancement {
    pub features: ExtractedFeatures,
    pub breakdown: ScoreBreakdown,
    pub summary: AnalysisSummary,
}

/// Records where the model changed the outcome relative to the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub ai_used: bool,
    pub education_enhanced: bool,
    pub industry_enhanced: bool,
    pub skills_enhanced: bool,
    /// Enhanced total minus baseline total; negative when the model lowered it.
    pub score_improvement: i16,
    pub confidence_levels: ConfidenceLevels,
}

/// Confidence labels echoed from the model, or `unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceLevels {
    pub education: String,
    pub industry: String,
    pub skills: String,
}

impl ConfidenceLevels {
    pub fn unknown() -> Self {
        Self {
            education: UNKNOWN_CONFIDENCE.to_string(),
            industry: UNKNOWN_CONFIDENCE.to_string(),
            skills: UNKNOWN_CONFIDENCE.to_string(),
        }
    }

    pub fn from_analysis(analysis: Option<&AiAnalysis>) -> Self {
        let Some(analysis) = analysis else {
            return Self::unknown();
        };

        Self {
            education: confidence_label(analysis.education()),
            industry: confidence_label(analysis.industry()),
            skills: confidence_label(analysis.skills()),
        }
    }
}

fn confidence_label(section: Option<AnalysisSection<'_>>) -> String {
    section
        .and_then(|section| section.confidence_label())
        .filter(|label| !label.is_empty())
        .unwrap_or(UNKNOWN_CONFIDENCE)
        .to_string()
}

/// Merge each dimension independently and re-score the result.
pub fn enhance(baseline: &ExtractedFeatures, analysis: Option<&AiAnalysis>) -> Enhancement {
    let features = ExtractedFeatures {
        experience_years: baseline.experience_years,
        education_level: enhanced_education(baseline.education_level, analysis),
        industry: enhanced_industry(baseline.industry, analysis),
        skills: enhanced_skills(&baseline.skills, analysis),
    };

    let baseline_breakdown = ScoreBreakdown::for_features(baseline);
    let breakdown = ScoreBreakdown::for_features(&features);

    let summary = AnalysisSummary {
        ai_used: analysis.is_some(),
        education_enhanced: features.education_level != baseline.education_level,
        industry_enhanced: features.industry != baseline.industry,
        skills_enhanced: features.skills != baseline.skills,
        score_improvement: i16::from(breakdown.total_score)
            - i16::from(baseline_breakdown.total_score),
        confidence_levels: ConfidenceLevels::from_analysis(analysis),
    };

    Enhancement {
        features,
        breakdown,
        summary,
    }
}

/// Model education level, if gated in and one of the known labels.
pub fn enhanced_education(rule_based: EducationLevel, analysis: Option<&AiAnalysis>) -> EducationLevel {
    let suggestion = analysis
        .and_then(AiAnalysis::education)
        .filter(AnalysisSection::passes_confidence_gate)
        .and_then(|section| section.text("education_level"))
        .and_then(EducationLevel::from_label);

    match suggestion {
        Some(level) => level,
        None => {
            if analysis.is_some() {
                debug!(
                    rule_based = rule_based.label(),
                    "education suggestion rejected; keeping rule-based level"
                );
            }
            rule_based
        }
    }
}

/// Model industry, if gated in and one of the known labels.
pub fn enhanced_industry(rule_based: Industry, analysis: Option<&AiAnalysis>) -> Industry {
    let suggestion = analysis
        .and_then(AiAnalysis::industry)
        .filter(AnalysisSection::passes_confidence_gate)
        .and_then(|section| section.text("industry"))
        .and_then(Industry::from_label);

    match suggestion {
        Some(industry) => industry,
        None => {
            if analysis.is_some() {
                debug!(
                    rule_based = rule_based.label(),
                    "industry suggestion rejected; keeping rule-based industry"
                );
            }
            rule_based
        }
    }
}

/// Model skills first, then rule-based skills, deduplicated and capped.
pub fn enhanced_skills(rule_based: &[String], analysis: Option<&AiAnalysis>) -> Vec<String> {
    let suggestion = analysis
        .and_then(AiAnalysis::skills)
        .filter(AnalysisSection::passes_confidence_gate)
        .and_then(|section| section.string_list("skills"));

    match suggestion {
        Some(ai_skills) => merge_skill_lists(&ai_skills, rule_based, SKILL_LIMIT),
        None => rule_based.to_vec(),
    }
}
