//! CLI for repo-survey.
//!
//! Searches GitHub for repositories matching a keyword expression and prints
//! the most recently active ones as a markdown table.

use clap::Parser;
use repo_survey::{ConfigError, RunSummary, Survey, SurveyConfig, SurveyError, SurveySettings};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

/// Repo Survey - Rank GitHub repositories matching keywords by recent activity.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Path to a TOML settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keyword expression to search for.
    #[arg(long)]
    keywords: Option<String>,

    /// Search page size (1-100).
    #[arg(long)]
    max_results: Option<u8>,

    /// Maximum rows in the report.
    #[arg(long)]
    limit: Option<usize>,

    /// Maximum repositories enriched at once.
    #[arg(long)]
    concurrency: Option<usize>,

    /// GitHub API base URL, for GitHub Enterprise.
    #[arg(long)]
    api_url: Option<Url>,
}

/// Errors that end the process with a failure exit code.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// The survey itself failed.
    #[error(transparent)]
    Survey(#[from] SurveyError),

    /// The report could not be written to stdout.
    #[error("Failed to write report")]
    Output(#[source] io::Error),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Survey(e.into())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Both ring and aws-lc-rs may be compiled in; pick one for the process.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            summary.log();
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %error_chain(&e), "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Formats an error followed by each of its causes, separated by `: `.
fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, keeping stdout
///   for the report
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Resolves settings from the optional file and command line overrides.
fn resolve_settings(args: &Args) -> Result<SurveySettings, ConfigError> {
    let mut settings = match &args.config {
        Some(path) => SurveySettings::load(path)?,
        None => SurveySettings::default(),
    };

    if let Some(keywords) = &args.keywords {
        settings.keywords = keywords.clone();
    }
    if let Some(max_results) = args.max_results {
        settings.max_results = max_results;
    }
    if let Some(limit) = args.limit {
        settings.report_limit = limit;
    }
    if let Some(concurrency) = args.concurrency {
        settings.concurrency = concurrency;
    }

    settings.validate("command line")?;
    Ok(settings)
}

/// Main execution logic.
///
/// The table is only written once the whole survey has succeeded.
async fn run(args: Args) -> Result<RunSummary, CliError> {
    let settings = resolve_settings(&args)?;

    let mut config = SurveyConfig::new(args.token).with_settings(settings);
    if let Some(url) = args.api_url {
        config = config.with_api_base_url(url);
    }

    let survey = Survey::new(config)?;
    let report = survey.run().await?;

    report
        .write_table(&mut io::stdout().lock())
        .map_err(CliError::Output)?;
    Ok(report.summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["repo-survey", "--token", "secret"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_without_overrides() {
        let settings = resolve_settings(&parse(&[])).unwrap();
        assert_eq!(settings, SurveySettings::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&[
            "--keywords",
            "scrum",
            "--max-results",
            "20",
            "--limit",
            "5",
            "--concurrency",
            "3",
        ]);
        let settings = resolve_settings(&args).unwrap();

        assert_eq!(settings.keywords, "scrum");
        assert_eq!(settings.max_results, 20);
        assert_eq!(settings.report_limit, 5);
        assert_eq!(settings.concurrency, 3);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let args = parse(&["--max-results", "101"]);
        assert!(matches!(
            resolve_settings(&args),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn error_chain_lists_each_cause_once() {
        let error = CliError::Output(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(error_chain(&error), "Failed to write report: pipe closed");
    }

    #[test]
    fn error_chain_through_settings_error() {
        let error = CliError::from(resolve_settings(&parse(&["--limit", "0"])).unwrap_err());
        let message = error_chain(&error);

        assert!(message.starts_with("Invalid setting in 'command line'"));
        assert_eq!(message.matches("report-limit").count(), 1);
    }

    #[test]
    fn parses_api_url() {
        let args = parse(&["--api-url", "https://github.example.com/api/v3/"]);
        assert_eq!(
            args.api_url.map(String::from).as_deref(),
            Some("https://github.example.com/api/v3/")
        );
    }
}
