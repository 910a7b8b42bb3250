use serde::{Deserialize, Serialize};

pub const DEFAULT_PROCESSING_VERSION: &str = "2.0_ai_enhanced";

/// Options applied to every scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Version tag stamped on each scored profile.
    pub processing_version: String,
    /// Treat a listed prestigious school as a bachelor degree when no degree
    /// marker is found.
    pub prestigious_school_fallback: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            processing_version: DEFAULT_PROCESSING_VERSION.to_string(),
            prestigious_school_fallback: false,
        }
    }
}
