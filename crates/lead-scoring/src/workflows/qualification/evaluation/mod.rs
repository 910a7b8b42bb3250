mod config;
mod policy;
mod rules;

pub use config::{ScoringConfig, DEFAULT_PROCESSING_VERSION};
pub use policy::QualificationLevel;
pub use rules::{
    education_points, education_points_for_label, experience_points, industry_points,
    industry_points_for_label, MAX_EDUCATION_SCORE, MAX_EXPERIENCE_SCORE, MAX_INDUSTRY_SCORE,
};

use super::domain::{EducationLevel, ExtractedFeatures, Industry};
use serde::{Deserialize, Serialize};

/// Rubric result. `total_score` is always the sum of the three sub-scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub experience_score: u8,
    pub education_score: u8,
    pub industry_score: u8,
    pub total_score: u8,
    pub qualification_level: QualificationLevel,
}

impl ScoreBreakdown {
    /// Pure function of the three scored features.
    pub fn score(years: u32, level: EducationLevel, industry: Industry) -> Self {
        Self::from_components(
            experience_points(years),
            education_points(level),
            industry_points(industry),
        )
    }

    pub fn for_features(features: &ExtractedFeatures) -> Self {
        Self::score(
            features.experience_years,
            features.education_level,
            features.industry,
        )
    }

    fn from_components(experience_score: u8, education_score: u8, industry_score: u8) -> Self {
        let total_score = experience_score + education_score + industry_score;
        Self {
            experience_score,
            education_score,
            industry_score,
            total_score,
            qualification_level: QualificationLevel::from_total(total_score),
        }
    }
}

/// Human-readable audit lines for each rubric dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringNotes {
    pub experience: String,
    pub education: String,
    pub industry: String,
}

impl ScoringNotes {
    pub fn describe(features: &ExtractedFeatures, breakdown: &ScoreBreakdown) -> Self {
        Self {
            experience: format!(
                "{} years → {}/{} points",
                features.experience_years, breakdown.experience_score, MAX_EXPERIENCE_SCORE
            ),
            education: format!(
                "{} → {}/{} points",
                features.education_level.label(),
                breakdown.education_score,
                MAX_EDUCATION_SCORE
            ),
            industry: format!(
                "{} → {}/{} points",
                features.industry.label(),
                breakdown.industry_score,
                MAX_INDUSTRY_SCORE
            ),
        }
    }
}
