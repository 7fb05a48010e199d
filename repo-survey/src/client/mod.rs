//! Access to the code-hosting API.
//!
//! The survey only needs three capabilities from the remote side, captured by
//! [`RepositoryClient`]. [`GitHubClient`] implements them against the GitHub
//! REST API; tests provide their own implementations backed by fixtures.

mod error;
mod github;
mod summary;

pub use error::ClientError;
pub use github::GitHubClient;
pub use summary::RepositorySummary;

use crate::query::SearchRequest;

/// The remote operations a survey run performs.
///
/// Every method maps to exactly one HTTP request.
#[allow(async_fn_in_trait)]
pub trait RepositoryClient {
    /// Runs a repository search and returns the first page of results.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    async fn search_repositories(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<RepositorySummary>, ClientError>;

    /// Returns the languages detected in a repository, in response order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    async fn languages(&self, repository: &RepositorySummary) -> Result<Vec<String>, ClientError>;

    /// Returns the committer date of the most recent commit as an ISO-8601
    /// string, or `None` if the repository has no commits.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    async fn latest_commit_date(
        &self,
        repository: &RepositorySummary,
    ) -> Result<Option<String>, ClientError>;
}
