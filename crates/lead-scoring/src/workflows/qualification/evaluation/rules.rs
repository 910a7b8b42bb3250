use super::super::domain::{EducationLevel, Industry};

pub const MAX_EXPERIENCE_SCORE: u8 = 40;
pub const MAX_EDUCATION_SCORE: u8 = 30;
pub const MAX_INDUSTRY_SCORE: u8 = 30;

pub fn experience_points(years: u32) -> u8 {
    match years {
        11.. => 40,
        6..=10 => 30,
        3..=5 => 20,
        1..=2 => 10,
        0 => 0,
    }
}

pub fn education_points(level: EducationLevel) -> u8 {
    match level {
        EducationLevel::Phd => 30,
        EducationLevel::Master => 25,
        EducationLevel::Bachelor => 15,
        EducationLevel::HighSchool => 5,
    }
}

pub fn industry_points(industry: Industry) -> u8 {
    match industry {
        Industry::Technology => 30,
        Industry::Finance => 25,
        Industry::Healthcare => 20,
        Industry::Other => 10,
    }
}

/// Rubric lookup for an untyped label; unrecognized labels score zero.
pub fn education_points_for_label(label: &str) -> u8 {
    EducationLevel::from_label(label)
        .map(education_points)
        .unwrap_or(0)
}

/// Rubric lookup for an untyped label; unrecognized labels score zero.
pub fn industry_points_for_label(label: &str) -> u8 {
    Industry::from_label(label).map(industry_points).unwrap_or(0)
}
