//! Per-repository enrichment with languages and latest commit date.

use crate::client::{ClientError, RepositoryClient, RepositorySummary};
use crate::record::RepositoryRecord;
use futures::stream::{self, StreamExt, TryStreamExt};
use thiserror::Error;
use tracing::{debug, info, info_span, warn, Instrument};

/// Errors that can occur during enrichment.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// The commit history of a repository could not be fetched.
    #[error("Failed to fetch latest commit for '{repository}'")]
    Commits {
        repository: String,
        #[source]
        source: ClientError,
    },
}

/// Fetches languages and the latest commit date for one repository.
///
/// A failed languages request is logged and yields an empty language list.
///
/// # Errors
///
/// Returns [`EnrichError::Commits`] if the commit history request fails.
pub async fn enrich_repository<C: RepositoryClient>(
    client: &C,
    summary: RepositorySummary,
) -> Result<RepositoryRecord, EnrichError> {
    let languages = match client.languages(&summary).await {
        Ok(languages) => languages,
        Err(e) => {
            warn!(
                repo = %summary.full_name,
                error = %e,
                "Failed to fetch languages, leaving them empty"
            );
            Vec::new()
        }
    };

    let last_commit = client
        .latest_commit_date(&summary)
        .await
        .map_err(|source| EnrichError::Commits {
            repository: summary.full_name.clone(),
            source,
        })?;

    debug!(
        repo = %summary.full_name,
        languages = languages.len(),
        last_commit = last_commit.as_deref().unwrap_or(""),
        "Enriched repository"
    );
    Ok(RepositoryRecord::new(summary, languages, last_commit))
}

/// Enriches every repository, running up to `concurrency` of them at a time.
///
/// Records come back in the order of `repositories`. The first commit
/// history failure aborts the whole batch.
///
/// # Errors
///
/// Returns the first [`EnrichError`] encountered.
pub async fn enrich_repositories<C: RepositoryClient>(
    client: &C,
    repositories: Vec<RepositorySummary>,
    concurrency: usize,
) -> Result<Vec<RepositoryRecord>, EnrichError> {
    let span = info_span!("enrich", count = repositories.len(), concurrency);

    async {
        info!("Enriching repositories");

        let records: Vec<RepositoryRecord> = stream::iter(repositories)
            .map(|summary| enrich_repository(client, summary))
            .buffered(concurrency.max(1))
            .try_collect()
            .await?;

        info!(count = records.len(), "Enrichment complete");
        Ok(records)
    }
    .instrument(span)
    .await
}
