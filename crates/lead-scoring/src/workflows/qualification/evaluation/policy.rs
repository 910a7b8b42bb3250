use serde::{Deserialize, Serialize};

/// Outreach tier derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationLevel {
    Unqualified,
    Poor,
    Average,
    Good,
    Excellent,
}

impl QualificationLevel {
    /// Inclusive lower bounds, highest tier first.
    pub const THRESHOLDS: [(u8, QualificationLevel); 4] = [
        (80, QualificationLevel::Excellent),
        (60, QualificationLevel::Good),
        (40, QualificationLevel::Average),
        (20, QualificationLevel::Poor),
    ];

    pub fn from_total(total_score: u8) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(minimum, _)| total_score >= *minimum)
            .map(|(_, level)| *level)
            .unwrap_or(QualificationLevel::Unqualified)
    }

    pub const fn label(self) -> &'static str {
        match self {
            QualificationLevel::Excellent => "excellent",
            QualificationLevel::Good => "good",
            QualificationLevel::Average => "average",
            QualificationLevel::Poor => "poor",
            QualificationLevel::Unqualified => "unqualified",
        }
    }

    pub const fn outreach_action(self) -> &'static str {
        match self {
            QualificationLevel::Excellent => "immediate follow-up",
            QualificationLevel::Good => "standard outreach sequence",
            QualificationLevel::Average => "nurturing campaign",
            QualificationLevel::Poor => "low priority",
            QualificationLevel::Unqualified => "exclusion list",
        }
    }
}
