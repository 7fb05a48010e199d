//! Orchestrates a survey: search, filter, enrich, rank.

mod error;

pub use error::SurveyError;

use crate::client::{GitHubClient, RepositoryClient};
use crate::config::SurveyConfig;
use crate::enrich::enrich_repositories;
use crate::filter::filter_repositories;
use crate::query::{run_search, SearchRequest};
use crate::rank::rank_records;
use crate::record::RepositoryRecord;
use crate::report::{render_table, write_table};
use crate::summary::RunSummary;
use std::io::{self, Write};
use tracing::{info, warn};

/// The ranked records of a completed run.
#[derive(Debug, Clone)]
pub struct SurveyReport {
    /// Records in report order.
    pub records: Vec<RepositoryRecord>,

    /// Stage-by-stage counts.
    pub summary: RunSummary,
}

impl SurveyReport {
    /// Renders the records as a markdown table.
    #[must_use]
    pub fn render_table(&self) -> String {
        render_table(&self.records)
    }

    /// Writes the markdown table to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_table(&self.records, out)
    }
}

/// Runs a survey against a [`RepositoryClient`].
pub struct Survey<C> {
    config: SurveyConfig,
    client: C,
}

impl Survey<GitHubClient> {
    /// Builds a survey talking to GitHub with the configured token.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::Client`] if the GitHub client cannot be built.
    pub fn new(config: SurveyConfig) -> Result<Self, SurveyError> {
        let client = GitHubClient::new(config.token(), config.api_base_url())
            .map_err(SurveyError::Client)?;
        Ok(Self { config, client })
    }
}

impl<C: RepositoryClient> Survey<C> {
    /// Builds a survey using the given client.
    pub fn with_client(config: SurveyConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Returns the client requests go through.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Executes the full pipeline.
    ///
    /// Each stage consumes the whole output of the previous one. Any failure
    /// aborts the run before a report exists.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] for invalid settings, a failed search, a failed
    /// commit history request, or an unparseable commit date.
    pub async fn run(&self) -> Result<SurveyReport, SurveyError> {
        let settings = self.config.settings();
        settings.validate("settings")?;

        let request = SearchRequest::from_settings(settings);
        let discovered = run_search(&self.client, &request)
            .await
            .map_err(SurveyError::Search)?;
        let discovered_count = discovered.len();

        let kept = filter_repositories(discovered, &settings.exclusions);
        info!(
            kept = kept.len(),
            excluded = discovered_count - kept.len(),
            "Applied exclusion rules"
        );

        if kept.is_empty() {
            warn!("No repositories left after filtering");
        }

        let records = enrich_repositories(&self.client, kept, settings.concurrency).await?;
        let enriched_count = records.len();

        let records = rank_records(records, settings.report_limit)?;
        info!(
            reported = records.len(),
            limit = settings.report_limit,
            "Ranked repositories"
        );

        Ok(SurveyReport {
            summary: RunSummary::new(discovered_count, enriched_count, records.len()),
            records,
        })
    }
}
