//! Enriched repository records.

use crate::client::RepositorySummary;
use serde::Serialize;

/// License text shown when a repository declares no license.
pub const NO_LICENSE: &str = "None";

/// A repository with everything the report shows about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRecord {
    /// Full repository name in "owner/name" format.
    pub name: String,

    /// Detected languages, in the order the API listed them.
    pub languages: Vec<String>,

    /// Stargazer count.
    pub stars: u32,

    /// License name, or [`NO_LICENSE`].
    pub license: String,

    /// ISO-8601 committer date of the latest commit; empty if there are none.
    pub last_commit: String,
}

impl RepositoryRecord {
    /// Combines a search result with its fetched languages and latest commit date.
    #[must_use]
    pub fn new(
        summary: RepositorySummary,
        languages: Vec<String>,
        last_commit: Option<String>,
    ) -> Self {
        Self {
            name: summary.full_name,
            languages,
            stars: summary.stars,
            license: summary.license.unwrap_or_else(|| NO_LICENSE.to_string()),
            last_commit: last_commit.unwrap_or_default(),
        }
    }

    /// Languages as a single comma-separated string.
    #[must_use]
    pub fn languages_joined(&self) -> String {
        self.languages.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(license: Option<&str>) -> RepositorySummary {
        RepositorySummary {
            owner: "acme".to_string(),
            name: "board".to_string(),
            full_name: "acme/board".to_string(),
            stars: 7,
            license: license.map(str::to_string),
        }
    }

    #[test]
    fn missing_license_falls_back_to_none() {
        let record = RepositoryRecord::new(summary(None), vec![], None);
        assert_eq!(record.license, "None");
        assert_eq!(record.last_commit, "");
    }

    #[test]
    fn keeps_fields_from_summary() {
        let record = RepositoryRecord::new(
            summary(Some("MIT License")),
            vec!["Rust".to_string(), "Shell".to_string()],
            Some("2024-03-01T00:00:00Z".to_string()),
        );

        assert_eq!(record.name, "acme/board");
        assert_eq!(record.stars, 7);
        assert_eq!(record.license, "MIT License");
        assert_eq!(record.languages_joined(), "Rust, Shell");
        assert_eq!(record.last_commit, "2024-03-01T00:00:00Z");
    }
}
