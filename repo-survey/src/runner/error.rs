//! Runner error types.

use crate::client::ClientError;
use crate::config::ConfigError;
use crate::enrich::EnrichError;
use crate::rank::RankError;

/// Errors that abort a survey run.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// Invalid settings.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub API client initialization errors.
    #[error("Failed to create GitHub client")]
    Client(#[source] ClientError),

    /// The repository search request failed.
    #[error("Repository search failed")]
    Search(#[source] ClientError),

    /// A repository could not be enriched.
    #[error(transparent)]
    Enrich(#[from] EnrichError),

    /// Records could not be ranked.
    #[error(transparent)]
    Rank(#[from] RankError),
}
