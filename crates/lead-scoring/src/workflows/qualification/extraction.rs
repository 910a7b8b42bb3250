//! Deterministic feature extraction from a raw profile record.

use super::domain::{
    non_empty, EducationLevel, ExperienceEntry, Industry, PartialDate, ProfileRecord,
};
use super::keywords::{contains_any, DEGREE_MARKERS, INDUSTRY_KEYWORDS, PRESTIGIOUS_SCHOOLS};

/// Total experience rounded to whole years (half a year rounds up).
///
/// Entries without an end date run until December of `current_year`; spans
/// that end before they start contribute nothing.
pub fn extract_experience_years(profile: &ProfileRecord, current_year: i32) -> u32 {
    let total_months: i64 = profile
        .experience
        .iter()
        .map(|entry| experience_months(entry, current_year))
        .sum();

    u32::try_from((total_months + 6) / 12).unwrap_or(u32::MAX)
}

pub(crate) fn experience_months(entry: &ExperienceEntry, current_year: i32) -> i64 {
    let start = entry.start_date.as_ref();
    let end = entry.end_date.as_ref();

    let start_year = start.and_then(PartialDate::known_year).unwrap_or(current_year);
    let end_year = end.and_then(PartialDate::known_year).unwrap_or(current_year);
    let start_month = start.and_then(PartialDate::known_month).unwrap_or(1);
    let end_month = end.and_then(PartialDate::known_month).unwrap_or(12);

    let months = (i64::from(end_year) * 12 + i64::from(end_month))
        - (i64::from(start_year) * 12 + i64::from(start_month));
    months.max(0)
}

/// Highest degree found across all education entries.
pub fn extract_education_level(profile: &ProfileRecord) -> EducationLevel {
    profile
        .education
        .iter()
        .map(|entry| classify_degree(entry.degree_text()))
        .max()
        .unwrap_or(EducationLevel::HighSchool)
}

/// Degree-marker extraction, lifted to bachelor when only a well-known school
/// is listed. Opt-in through `ScoringConfig::prestigious_school_fallback`.
pub fn extract_education_level_with_school_fallback(profile: &ProfileRecord) -> EducationLevel {
    let level = extract_education_level(profile);
    if level != EducationLevel::HighSchool {
        return level;
    }

    let attended_prestigious_school = profile.education.iter().any(|entry| {
        let school = entry.school.as_deref().unwrap_or("").to_lowercase();
        contains_any(&school, PRESTIGIOUS_SCHOOLS)
    });

    if attended_prestigious_school {
        EducationLevel::Bachelor
    } else {
        level
    }
}

pub fn classify_degree(degree: &str) -> EducationLevel {
    let degree = degree.to_lowercase();
    DEGREE_MARKERS
        .iter()
        .find(|(_, markers)| contains_any(&degree, markers))
        .map(|(level, _)| *level)
        .unwrap_or(EducationLevel::HighSchool)
}

/// Classify the profile by the first keyword set hitting the current company,
/// headline (or current title) and about text.
pub fn extract_industry(profile: &ProfileRecord) -> Industry {
    let text = industry_text(profile);
    INDUSTRY_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&text, keywords))
        .map(|(industry, _)| *industry)
        .unwrap_or(Industry::Other)
}

pub(crate) fn industry_text(profile: &ProfileRecord) -> String {
    let current = profile.current_experience();
    let company = current
        .and_then(|entry| entry.company.as_deref())
        .unwrap_or("");
    let title = profile.headline().unwrap_or_else(|| {
        current
            .and_then(|entry| non_empty(entry.title.as_deref()))
            .unwrap_or("")
    });
    let about = profile.about().unwrap_or("");

    format!("{company} {title} {about}").to_lowercase()
}
