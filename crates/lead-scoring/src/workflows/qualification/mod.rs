//! Lead qualification pipeline.
//!
//! A raw profile is reduced to experience, education, industry and skills by
//! deterministic heuristics, scored against a fixed rubric, optionally merged
//! with a model analysis under a confidence gate, and mapped to an outreach
//! tier. Every stage is a pure function of its inputs; the only clock read is
//! the `processed_at` timestamp supplied by the caller.

pub mod analysis;
pub mod domain;
pub mod engine;
pub mod enhancement;
pub(crate) mod evaluation;
pub mod export;
pub mod extraction;
pub mod input;
pub mod keywords;
pub mod router;
pub mod scored;
pub mod skills;

#[cfg(test)]
mod tests;

pub use analysis::{
    build_analysis_prompt, interpret_response, AiAnalysis, AnalysisPrompt, AnalysisSection,
    InterpretError, PromptTemplate,
};
pub use domain::{
    BasicInfo, Confidence, EducationEntry, EducationLevel, ExperienceEntry, ExtractedFeatures,
    Industry, Location, LocationDetails, MonthValue, PartialDate, ProfileRecord, YearValue,
};
pub use engine::{BaselineScore, LeadScoringEngine};
pub use enhancement::{enhance, AnalysisSummary, ConfidenceLevels, Enhancement};
pub use evaluation::{
    education_points, education_points_for_label, experience_points, industry_points,
    industry_points_for_label, QualificationLevel, ScoreBreakdown, ScoringConfig, ScoringNotes,
    DEFAULT_PROCESSING_VERSION,
};
pub use export::{write_outreach_csv, ExportError};
pub use input::{load_profiles, load_profiles_from_path, ProfileInputError};
pub use router::{lead_router, ProfileRequest, ScoreRequest};
pub use scored::{AnalysisStatus, ScoredProfile, FALLBACK_REASONING};
