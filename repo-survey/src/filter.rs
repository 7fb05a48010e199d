//! Exclusion of search results by repository name.
//!
//! Search results often include tooling around the thing being surveyed
//! (plugins, project-management integrations). Each [`ExclusionRule`] drops
//! repositories whose lowercased name contains a term, optionally sparing
//! names that also contain a second term.

use crate::client::RepositorySummary;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A name-based exclusion rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExclusionRule {
    /// Exclude names containing this term.
    pub contains: String,

    /// Keep the repository anyway if its name also contains this term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unless: Option<String>,
}

impl ExclusionRule {
    /// Rule excluding every name that contains `term`.
    #[must_use]
    pub fn contains(term: impl Into<String>) -> Self {
        Self {
            contains: term.into(),
            unless: None,
        }
    }

    /// Spares names that also contain `term`.
    #[must_use]
    pub fn unless(mut self, term: impl Into<String>) -> Self {
        self.unless = Some(term.into());
        self
    }

    /// Returns true if `name` should be excluded. Case-insensitive.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        if !name.contains(&self.contains.to_lowercase()) {
            return false;
        }
        match &self.unless {
            Some(unless) => !name.contains(&unless.to_lowercase()),
            None => true,
        }
    }
}

/// The rules applied when no settings file overrides them: drop plugins, and
/// drop "project" repositories that are not kanban boards.
#[must_use]
pub fn default_exclusions() -> Vec<ExclusionRule> {
    vec![
        ExclusionRule::contains("plugin"),
        ExclusionRule::contains("project").unless("kanban"),
    ]
}

/// Returns true if any rule excludes `name`.
#[must_use]
pub fn is_excluded(name: &str, rules: &[ExclusionRule]) -> bool {
    rules.iter().any(|rule| rule.matches(name))
}

/// Drops excluded repositories, keeping the relative order of the rest.
///
/// Rules are evaluated against the short repository name, not `owner/name`.
#[must_use]
pub fn filter_repositories(
    repositories: Vec<RepositorySummary>,
    rules: &[ExclusionRule],
) -> Vec<RepositorySummary> {
    repositories
        .into_iter()
        .filter(|repo| {
            let excluded = is_excluded(&repo.name, rules);
            if excluded {
                debug!(repo = %repo.full_name, "Excluded by name");
            }
            !excluded
        })
        .collect()
}
