use super::scored::ScoredProfile;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write outreach CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush outreach CSV: {0}")]
    Io(#[from] std::io::Error),
}

/// One CSV line per scored lead, shaped for outreach list imports.
#[derive(Debug, Serialize)]
struct OutreachRow<'a> {
    full_name: &'a str,
    current_company: &'a str,
    current_position: &'a str,
    profile_url: &'a str,
    qualification_level: &'static str,
    outreach_action: &'a str,
    total_score: u8,
    experience_score: u8,
    education_score: u8,
    industry_score: u8,
    education_level: &'static str,
    industry: &'static str,
    skills: String,
    llm_analysis_status: &'static str,
}

impl<'a> From<&'a ScoredProfile> for OutreachRow<'a> {
    fn from(profile: &'a ScoredProfile) -> Self {
        Self {
            full_name: profile.full_name.as_deref().unwrap_or(""),
            current_company: profile.current_company.as_deref().unwrap_or(""),
            current_position: profile.current_position.as_deref().unwrap_or(""),
            profile_url: profile.profile_url.as_deref().unwrap_or(""),
            qualification_level: profile.qualification_level.label(),
            outreach_action: &profile.outreach_action,
            total_score: profile.total_score,
            experience_score: profile.experience_score,
            education_score: profile.education_score,
            industry_score: profile.industry_score,
            education_level: profile.education_level.label(),
            industry: profile.industry.label(),
            skills: profile.skills.join(";"),
            llm_analysis_status: profile.llm_analysis_status.label(),
        }
    }
}

pub fn write_outreach_csv<W: Write>(
    writer: W,
    profiles: &[ScoredProfile],
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for profile in profiles {
        csv_writer.serialize(OutreachRow::from(profile))?;
    }
    csv_writer.flush()?;
    Ok(())
}
