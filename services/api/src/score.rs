use crate::infra::read_text;
use chrono::{DateTime, Utc};
use clap::Args;
use lead_scoring::config::AppConfig;
use lead_scoring::error::AppError;
use lead_scoring::workflows::qualification::{
    load_profiles_from_path, write_outreach_csv, LeadScoringEngine, ProfileRecord, ScoredProfile,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding one profile object or an array of profiles
    pub(crate) profiles: PathBuf,
    /// Raw model response to merge; applied to every profile in the file
    #[arg(long)]
    pub(crate) llm_response: Option<PathBuf>,
    /// Also write an outreach CSV to this path
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Processing timestamp (RFC 3339 or YYYY-MM-DD). Defaults to now.
    #[arg(long, value_parser = crate::infra::parse_timestamp)]
    pub(crate) processed_at: Option<DateTime<Utc>>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PromptArgs {
    /// JSON file holding one profile object or an array of profiles
    pub(crate) profiles: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        profiles,
        llm_response,
        csv,
        processed_at,
        pretty,
    } = args;

    let config = AppConfig::load()?;
    let engine = LeadScoringEngine::new(config.scoring);
    let records = load_profiles_from_path(&profiles)?;
    let llm_response = llm_response.as_deref().map(read_text).transpose()?;
    let processed_at = processed_at.unwrap_or_else(Utc::now);

    let scored = score_all(&engine, &records, llm_response.as_deref(), processed_at);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, &scored).map_err(std::io::Error::from)?;
    } else {
        serde_json::to_writer(&mut out, &scored).map_err(std::io::Error::from)?;
    }
    writeln!(out)?;

    if let Some(path) = csv {
        export_csv(&path, &scored)?;
        eprintln!("Wrote {} scored leads to {}", scored.len(), path.display());
    }

    Ok(())
}

pub(crate) fn run_prompt(args: PromptArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = LeadScoringEngine::new(config.scoring);
    let records = load_profiles_from_path(&args.profiles)?;

    for (index, record) in records.iter().enumerate() {
        let prompt = engine.prompt(record);
        println!(
            "### Profile {} ({}) [{:?}]",
            index + 1,
            record.full_name().unwrap_or("unnamed"),
            prompt.template
        );
        println!("{}\n", prompt.text);
    }

    Ok(())
}

pub(crate) fn score_all(
    engine: &LeadScoringEngine,
    records: &[ProfileRecord],
    llm_response: Option<&str>,
    processed_at: DateTime<Utc>,
) -> Vec<ScoredProfile> {
    records
        .iter()
        .map(|record| engine.score(record, llm_response, processed_at))
        .collect()
}

pub(crate) fn export_csv(path: &Path, scored: &[ScoredProfile]) -> Result<(), AppError> {
    let file = File::create(path)?;
    write_outreach_csv(BufWriter::new(file), scored)?;
    Ok(())
}
