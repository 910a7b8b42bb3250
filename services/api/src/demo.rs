use crate::score::export_csv;
use chrono::{DateTime, Utc};
use clap::Args;
use lead_scoring::error::AppError;
use lead_scoring::workflows::qualification::{
    LeadScoringEngine, ProfileInputError, ProfileRecord, ScoredProfile, ScoringConfig,
};
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Processing timestamp (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = crate::infra::parse_timestamp)]
    pub(crate) processed_at: Option<DateTime<Utc>>,
    /// Write the demo leads to an outreach CSV.
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Lift well-known schools without a degree marker to bachelor.
    #[arg(long)]
    pub(crate) school_fallback: bool,
}

struct DemoLead {
    label: &'static str,
    profile: ProfileRecord,
    llm_response: Option<String>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        processed_at,
        csv,
        school_fallback,
    } = args;

    let processed_at = processed_at.unwrap_or_else(Utc::now);
    let engine = LeadScoringEngine::new(ScoringConfig {
        prestigious_school_fallback: school_fallback,
        ..ScoringConfig::default()
    });

    println!("Lead scoring demo ({})", processed_at.format("%Y-%m-%d"));

    let mut scored = Vec::new();
    for lead in demo_leads()? {
        let baseline = engine.baseline(&lead.profile, processed_at);
        let result = engine.score(&lead.profile, lead.llm_response.as_deref(), processed_at);

        println!("\n{}", lead.label);
        println!(
            "  Rule-based: {}/100 ({})",
            baseline.breakdown.total_score,
            baseline.breakdown.qualification_level.label()
        );
        render_scored(&result);
        scored.push(result);
    }

    if let Some(path) = csv {
        export_csv(&path, &scored)?;
        println!("\nOutreach CSV written to {}", path.display());
    }

    Ok(())
}

fn render_scored(result: &ScoredProfile) {
    println!(
        "  Final: {}/100 ({}) -> {}",
        result.total_score,
        result.qualification_level.label(),
        result.outreach_action
    );
    println!("  - Experience: {}", result.scoring_breakdown.experience);
    println!("  - Education: {}", result.scoring_breakdown.education);
    println!("  - Industry: {}", result.scoring_breakdown.industry);
    if result.skills.is_empty() {
        println!("  Skills: none detected");
    } else {
        println!("  Skills: {}", result.skills.join(", "));
    }

    let summary = &result.analysis_summary;
    if summary.ai_used {
        println!(
            "  Model analysis: {} (education {}, industry {}, skills {}) | score change {:+}",
            result.llm_analysis_status.label(),
            summary.confidence_levels.education,
            summary.confidence_levels.industry,
            summary.confidence_levels.skills,
            summary.score_improvement
        );
        if summary.education_enhanced {
            println!("    Education: {}", result.llm_education_reasoning);
        }
        if summary.industry_enhanced {
            println!("    Industry: {}", result.llm_industry_reasoning);
        }
    } else {
        println!(
            "  Model analysis: {} (rule-based only)",
            result.llm_analysis_status.label()
        );
    }
}

fn demo_leads() -> Result<Vec<DemoLead>, ProfileInputError> {
    Ok(vec![
        DemoLead {
            label: "Fintech founder with model analysis",
            profile: demo_profile(json!({
                "basic_info": {
                    "fullname": "Camille Laurent",
                    "headline": "Co-founder of AYOMI, investment crowdfunding for SMEs",
                    "about": "Helping companies access capital through equity investment.",
                    "current_company": "AYOMI",
                    "location": "Paris, France",
                    "creator_hashtags": ["entrepreneurship", "fintech"]
                },
                "education": [
                    { "school": "École Centrale", "degree_name": "Diplôme d'Ingénieur" }
                ],
                "experience": [
                    {
                        "title": "Investment Analyst",
                        "company": "BNP Paribas",
                        "start_date": { "year": 2007, "month": "Sep" },
                        "end_date": { "year": 2015, "month": "Jun" }
                    },
                    {
                        "title": "Co-founder & CEO",
                        "company": "AYOMI",
                        "is_current": true,
                        "start_date": { "year": 2015, "month": 7 }
                    }
                ]
            }))?,
            llm_response: Some(
                json!({
                    "education_analysis": {
                        "education_level": "master",
                        "confidence": "high",
                        "reasoning": "Engineering school diploma is a master-level degree"
                    },
                    "industry_analysis": {
                        "industry": "finance",
                        "confidence": "high",
                        "reasoning": "Runs an equity crowdfunding platform"
                    },
                    "skills_analysis": {
                        "skills": ["fundraising", "equity research"],
                        "confidence": "medium",
                        "reasoning": "Finance and founder roles"
                    }
                })
                .to_string(),
            ),
        },
        DemoLead {
            label: "Platform engineer with a truncated model response",
            profile: demo_profile(json!({
                "basic_info": {
                    "fullname": "Priya Raman",
                    "headline": "Staff software engineer, cloud infrastructure",
                    "creator_hashtags": ["devops"]
                },
                "education": [
                    { "school": "Stanford University", "degree_name": "M.S. Computer Science" }
                ],
                "experience": [
                    {
                        "title": "Staff Engineer",
                        "company": "Northwind Cloud",
                        "is_current": true,
                        "start_date": { "year": 2018, "month": 3 }
                    }
                ]
            }))?,
            llm_response: Some("```json\n{\"education_analysis\": {".to_string()),
        },
        DemoLead {
            label: "Sparse profile without model analysis",
            profile: demo_profile(json!({
                "basic_info": { "about": "teacher at university" }
            }))?,
            llm_response: None,
        },
    ])
}

fn demo_profile(value: serde_json::Value) -> Result<ProfileRecord, ProfileInputError> {
    Ok(serde_json::from_value(value)?)
}
