use super::super::domain::ProfileRecord;
use serde::{Deserialize, Serialize};

const ABOUT_PROMPT_CHARS: usize = 500;
const PROMPT_EXPERIENCE_ENTRIES: usize = 3;
const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTemplate {
    Full,
    LimitedData,
}

/// Prompt text for the external model call plus the template it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPrompt {
    pub template: PromptTemplate,
    pub text: String,
}

/// Profiles with neither education nor experience get the limited-data
/// template; both request the same three-section response shape.
pub fn build_analysis_prompt(profile: &ProfileRecord) -> AnalysisPrompt {
    if profile.education.is_empty() && profile.experience.is_empty() {
        AnalysisPrompt {
            template: PromptTemplate::LimitedData,
            text: limited_data_prompt(profile),
        }
    } else {
        AnalysisPrompt {
            template: PromptTemplate::Full,
            text: full_prompt(profile),
        }
    }
}

fn full_prompt(profile: &ProfileRecord) -> String {
    let info = &profile.basic_info;
    let experience: Vec<_> = profile
        .experience
        .iter()
        .take(PROMPT_EXPERIENCE_ENTRIES)
        .collect();
    let about: Option<String> = profile
        .about()
        .map(|about| about.chars().take(ABOUT_PROMPT_CHARS).collect());

    format!(
        r#"Analyze this LinkedIn profile data and provide structured analysis in JSON format:

PROFILE DATA:
- Name: {name}
- Education: {education}
- Experience: {experience}
- Current Company: {company}
- Headline: {headline}
- About: {about}
- Creator Hashtags: {hashtags}

ANALYSIS REQUIRED:
1. Education Level Classification
2. Industry Classification
3. Skills Extraction

RESPONSE FORMAT (JSON ONLY):
{{
  "education_analysis": {{
    "education_level": "bachelor|master|phd|high_school",
    "confidence": "high|medium|low",
    "reasoning": "Brief explanation"
  }},
  "industry_analysis": {{
    "industry": "technology|finance|healthcare|other",
    "confidence": "high|medium|low",
    "reasoning": "Brief explanation"
  }},
  "skills_analysis": {{
    "skills": ["skill1", "skill2", "skill3"],
    "confidence": "high|medium|low",
    "reasoning": "Brief explanation"
  }}
}}

CLASSIFICATION RULES:
- Education: PhD/Doctorate=phd, Master's/MBA=master, Bachelor's/University=bachelor, High School/None=high_school
- Industry: Technology companies/roles=technology, Finance/Banking/Consulting=finance, Healthcare/Medical=healthcare, Others=other
- Skills: Extract 5-8 most relevant professional skills from all provided data

Respond with JSON only, no additional text."#,
        name = profile.full_name().unwrap_or(NOT_PROVIDED),
        education = to_json(&profile.education),
        experience = to_json(&experience),
        company = profile
            .basic_info
            .current_company
            .as_deref()
            .filter(|company| !company.trim().is_empty())
            .unwrap_or(NOT_PROVIDED),
        headline = profile.headline().unwrap_or(NOT_PROVIDED),
        about = about.as_deref().unwrap_or(NOT_PROVIDED),
        hashtags = to_json(&info.creator_hashtags),
    )
}

fn limited_data_prompt(profile: &ProfileRecord) -> String {
    let available = serde_json::to_string_pretty(&profile.basic_info)
        .unwrap_or_else(|_| "{}".to_string());

    format!(
        r#"Analyze this limited LinkedIn profile data:

AVAILABLE DATA:
{available}

Provide best-effort analysis with lower confidence levels.
Focus on what can be reasonably inferred from available information.

Respond with JSON:
{{
  "education_analysis": {{
    "education_level": "bachelor|master|phd|high_school",
    "confidence": "low",
    "reasoning": "Based on limited data: [explanation]"
  }},
  "industry_analysis": {{
    "industry": "technology|finance|healthcare|other",
    "confidence": "low",
    "reasoning": "Based on available information: [explanation]"
  }},
  "skills_analysis": {{
    "skills": ["general_skill1", "general_skill2"],
    "confidence": "low",
    "reasoning": "Inferred from limited profile data: [explanation]"
  }}
}}"#
    )
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "[]".to_string())
}
