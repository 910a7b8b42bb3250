use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use crate::workflows::qualification::domain::{
    BasicInfo, EducationEntry, ExperienceEntry, PartialDate, ProfileRecord,
};
use crate::workflows::qualification::{LeadScoringEngine, ScoringConfig};

pub(super) fn processed_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn engine() -> LeadScoringEngine {
    LeadScoringEngine::new(ScoringConfig::default())
}

pub(super) fn role(
    title: &str,
    company: &str,
    description: &str,
    start: Option<PartialDate>,
    end: Option<PartialDate>,
    is_current: bool,
) -> ExperienceEntry {
    ExperienceEntry {
        title: Some(title.to_string()),
        company: Some(company.to_string()),
        description: Some(description.to_string()),
        is_current,
        start_date: start,
        end_date: end,
    }
}

pub(super) fn degree(school: &str, degree_name: &str) -> EducationEntry {
    EducationEntry {
        school: Some(school.to_string()),
        degree_name: Some(degree_name.to_string()),
        degree: None,
    }
}

/// Finance founder: 17 years of experience, engineering diploma, finance keywords.
pub(super) fn founder_profile() -> ProfileRecord {
    ProfileRecord {
        basic_info: BasicInfo {
            profile_url: Some("https://www.linkedin.com/in/founder-ayomi".to_string()),
            fullname: Some("Camille Laurent".to_string()),
            headline: Some("Co-founder of AYOMI, investment crowdfunding for SMEs".to_string()),
            about: Some(
                "Helping companies access capital through equity investment.".to_string(),
            ),
            current_company: Some("AYOMI".to_string()),
            location: None,
            creator_hashtags: vec!["entrepreneurship".to_string(), "fintech".to_string()],
        },
        education: vec![degree("École Centrale", "Diplôme d'Ingénieur")],
        experience: vec![
            role(
                "Investment Analyst",
                "BNP Paribas",
                "Equity research on mid-cap companies",
                Some(PartialDate::new(2007, 9)),
                Some(PartialDate::new(2015, 6)),
                false,
            ),
            role(
                "Co-founder & CEO",
                "AYOMI",
                "Building a crowdfunding platform for SMEs",
                Some(PartialDate::new(2015, 7)),
                None,
                true,
            ),
        ],
    }
}

/// No experience, no education, teaching keywords only.
pub(super) fn educator_profile() -> ProfileRecord {
    ProfileRecord {
        basic_info: BasicInfo {
            about: Some("teacher at university".to_string()),
            ..BasicInfo::default()
        },
        ..ProfileRecord::default()
    }
}

/// Matches none of the industry keyword sets.
pub(super) fn bakery_profile() -> ProfileRecord {
    ProfileRecord {
        basic_info: BasicInfo {
            fullname: Some("Jordan Miller".to_string()),
            headline: Some("Store manager at a family bakery".to_string()),
            ..BasicInfo::default()
        },
        education: vec![degree("Lincoln High", "High school diploma")],
        experience: vec![role(
            "Store manager",
            "Miller Bakery",
            "Running the shop floor",
            Some(PartialDate::new(2019, 1)),
            None,
            true,
        )],
    }
}

pub(super) const NO_SKILLS: &[&str] = &[];

pub(super) fn analysis_json(
    education: (&str, &str),
    industry: (&str, &str),
    skills: (&[&str], &str),
) -> Value {
    json!({
        "education_analysis": {
            "education_level": education.0,
            "confidence": education.1,
            "reasoning": "Degree listed in education history"
        },
        "industry_analysis": {
            "industry": industry.0,
            "confidence": industry.1,
            "reasoning": "Current company and headline"
        },
        "skills_analysis": {
            "skills": skills.0,
            "confidence": skills.1,
            "reasoning": "Skills demonstrated across roles"
        }
    })
}

pub(super) fn founder_ai_response() -> String {
    analysis_json(
        ("master", "high"),
        ("finance", "medium"),
        (&["fundraising", "leadership", "equity crowdfunding"], "high"),
    )
    .to_string()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
