//! Client error types.

use thiserror::Error;

/// Errors returned by a [`RepositoryClient`](super::RepositoryClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// GitHub API error, including any non-success HTTP status.
    #[error(transparent)]
    GitHubError(#[from] octocrab::Error),

    /// The API answered, but not with what the endpoint documents.
    #[error("Unexpected response from '{endpoint}': {message}")]
    UnexpectedResponse { endpoint: String, message: String },
}
