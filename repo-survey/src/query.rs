//! Repository search query construction.

use crate::client::{ClientError, RepositoryClient, RepositorySummary};
use crate::config::SurveySettings;
use serde::Serialize;
use tracing::{info, info_span, Instrument};

/// Sort key requested from the search endpoint.
pub const SORT_BY_UPDATED: &str = "updated";

/// Sort order requested from the search endpoint.
pub const ORDER_DESCENDING: &str = "desc";

/// A single-page repository search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// Full search expression sent as `q`.
    pub query: String,

    /// Sort key (`sort`).
    pub sort: String,

    /// Sort order (`order`).
    pub order: String,

    /// Page size (`per_page`).
    pub per_page: u8,
}

impl SearchRequest {
    /// Builds the most-recently-updated-first request described by `settings`.
    #[must_use]
    pub fn from_settings(settings: &SurveySettings) -> Self {
        Self {
            query: build_search_query(&settings.keywords, &settings.search_fields),
            sort: SORT_BY_UPDATED.to_string(),
            order: ORDER_DESCENDING.to_string(),
            per_page: settings.max_results,
        }
    }
}

/// Builds a repository search expression scoped to the given fields.
///
/// Format: `{keywords} in:{field},{field}`
#[must_use]
pub fn build_search_query(keywords: &str, fields: &[String]) -> String {
    format!("{} in:{}", keywords.trim(), fields.join(","))
}

/// Runs the search request, returning the first page of results.
///
/// # Errors
///
/// Returns [`ClientError`] if the request fails or the API answers with a
/// non-success status.
pub async fn run_search<C: RepositoryClient>(
    client: &C,
    request: &SearchRequest,
) -> Result<Vec<RepositorySummary>, ClientError> {
    let span = info_span!("search", query = %request.query, per_page = request.per_page);

    async {
        info!("Starting repository search");
        let repositories = client.search_repositories(request).await?;
        info!(count = repositories.len(), "Search complete");
        Ok(repositories)
    }
    .instrument(span)
    .await
}
