//! [`RepositoryClient`] backed by the GitHub REST API.

use super::{ClientError, RepositoryClient, RepositorySummary};
use crate::query::SearchRequest;
use chrono::SecondsFormat;
use octocrab::models::Repository;
use octocrab::Octocrab;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

/// GitHub API client authenticated with a personal access token.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client sending `token` as a bearer token.
    ///
    /// `api_base_url` overrides the default `https://api.github.com`, e.g. for
    /// GitHub Enterprise.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the base URL is rejected or the underlying
    /// HTTP client cannot be built.
    pub fn new(token: &str, api_base_url: Option<&Url>) -> Result<Self, ClientError> {
        let mut builder = Octocrab::builder().personal_token(token.to_owned());
        if let Some(url) = api_base_url {
            builder = builder.base_uri(url.as_str())?;
        }

        Ok(Self {
            octocrab: builder.build()?,
        })
    }
}

impl RepositoryClient for GitHubClient {
    async fn search_repositories(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<RepositorySummary>, ClientError> {
        debug!(query = %request.query, per_page = request.per_page, "Searching repositories");

        let page = self
            .octocrab
            .search()
            .repositories(&request.query)
            .sort(request.sort.as_str())
            .order(request.order.as_str())
            .per_page(request.per_page)
            .send()
            .await?;

        Ok(page.items.into_iter().filter_map(summarize).collect())
    }

    async fn languages(&self, repository: &RepositorySummary) -> Result<Vec<String>, ClientError> {
        let route = format!("/repos/{}/{}/languages", repository.owner, repository.name);
        let breakdown: Map<String, Value> = self.octocrab.get(&route, None::<&()>).await?;

        Ok(language_names(breakdown))
    }

    async fn latest_commit_date(
        &self,
        repository: &RepositorySummary,
    ) -> Result<Option<String>, ClientError> {
        let page = self
            .octocrab
            .repos(&repository.owner, &repository.name)
            .list_commits()
            .per_page(1)
            .send()
            .await?;

        let Some(commit) = page.items.first() else {
            return Ok(None);
        };

        let date = commit
            .commit
            .committer
            .as_ref()
            .and_then(|committer| committer.date)
            .ok_or_else(|| ClientError::UnexpectedResponse {
                endpoint: format!("/repos/{}/commits", repository.full_name),
                message: format!("commit {} has no committer date", commit.sha),
            })?;

        Ok(Some(date.to_rfc3339_opts(SecondsFormat::Secs, true)))
    }
}

/// Language names of a languages response body, in response order.
///
/// Relies on `serde_json`'s `preserve_order`; without it keys come back sorted.
fn language_names(breakdown: Map<String, Value>) -> Vec<String> {
    breakdown.into_iter().map(|(language, _)| language).collect()
}

/// Converts a search item into a [`RepositorySummary`].
///
/// Items without an owner cannot be queried further and are dropped.
fn summarize(repo: Repository) -> Option<RepositorySummary> {
    let Some(owner) = repo.owner.as_ref().map(|owner| owner.login.clone()) else {
        warn!(repo = %repo.name, "Search result has no owner, skipping");
        return None;
    };
    let full_name = repo
        .full_name
        .clone()
        .unwrap_or_else(|| format!("{}/{}", owner, repo.name));

    Some(RepositorySummary {
        owner,
        full_name,
        stars: repo.stargazers_count.unwrap_or(0),
        license: repo.license.map(|license| license.name),
        name: repo.name,
    })
}
