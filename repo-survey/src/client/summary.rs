//! Repository search result information.

use serde::{Deserialize, Serialize};

/// A repository as returned by the search endpoint, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name, without the owner.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Stargazer count.
    pub stars: u32,

    /// Human-readable license name, if the repository declares one.
    pub license: Option<String>,
}
