use crate::demo::{run_demo, DemoArgs};
use crate::score::{run_prompt, run_score, PromptArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lead_scoring::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lead Scoring",
    about = "Score professional profiles for outreach from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a profile file and print the scored records
    Score(ScoreArgs),
    /// Print the model prompt built for each profile in a file
    Prompt(PromptArgs),
    /// Score built-in sample profiles with and without a model response
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Prompt(args) => run_prompt(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_command_parses_flags() {
        let cli = Cli::try_parse_from([
            "lead-scoring-api",
            "score",
            "profiles.json",
            "--llm-response",
            "analysis.txt",
            "--processed-at",
            "2024-12-01",
            "--pretty",
        ])
        .expect("score arguments parse");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.profiles.to_str(), Some("profiles.json"));
                assert!(args.llm_response.is_some());
                assert!(args.processed_at.is_some());
                assert!(args.pretty);
                assert!(args.csv.is_none());
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["lead-scoring-api"]).expect("no arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn invalid_timestamp_is_rejected() {
        let result = Cli::try_parse_from(["lead-scoring-api", "demo", "--processed-at", "soon"]);
        assert!(result.is_err());
    }
}
