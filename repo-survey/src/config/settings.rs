//! Survey settings deserialization and validation.

use crate::config::ConfigError;
use crate::filter::{default_exclusions, ExclusionRule};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Largest page the search endpoint will return.
pub const MAX_PAGE_SIZE: u8 = 100;

/// What to search for and how much of it to report.
///
/// Every field has a default, so a settings file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SurveySettings {
    /// Keyword expression, passed through to the search query verbatim.
    #[serde(default = "default_keywords")]
    pub keywords: String,

    /// Repository fields the keywords must appear in.
    #[serde(default = "default_search_fields")]
    pub search_fields: Vec<String>,

    /// Search page size (1..=100).
    #[serde(default = "default_max_results")]
    pub max_results: u8,

    /// Rows kept after ranking.
    #[serde(default = "default_report_limit")]
    pub report_limit: usize,

    /// Repositories enriched at the same time.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Name-based exclusion rules.
    #[serde(default = "default_exclusions", rename = "exclude")]
    pub exclusions: Vec<ExclusionRule>,
}

fn default_keywords() -> String {
    "kanban+personal-kanban".to_string()
}

fn default_search_fields() -> Vec<String> {
    vec!["name".to_string(), "description".to_string()]
}

fn default_max_results() -> u8 {
    MAX_PAGE_SIZE
}

fn default_report_limit() -> usize {
    50
}

fn default_concurrency() -> usize {
    1
}

impl Default for SurveySettings {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            search_fields: default_search_fields(),
            max_results: default_max_results(),
            report_limit: default_report_limit(),
            concurrency: default_concurrency(),
            exclusions: default_exclusions(),
        }
    }
}

impl SurveySettings {
    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails [`validate`](Self::validate).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading settings");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(&path.display().to_string())?;
        Ok(settings)
    }

    /// Checks that every value is usable. `origin` names where the settings
    /// came from in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for the first invalid value.
    pub fn validate(&self, origin: &str) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::Invalid {
            origin: origin.to_string(),
            message: message.to_string(),
        };

        if self.keywords.trim().is_empty() {
            return Err(invalid("keywords must not be empty"));
        }

        if self.search_fields.is_empty()
            || self.search_fields.iter().any(|field| field.trim().is_empty())
        {
            return Err(invalid("search-fields must list at least one non-empty field"));
        }

        if self.max_results == 0 || self.max_results > MAX_PAGE_SIZE {
            return Err(invalid("max-results must be between 1 and 100"));
        }

        if self.report_limit == 0 {
            return Err(invalid("report-limit must be at least 1"));
        }

        if self.concurrency == 0 {
            return Err(invalid("concurrency must be at least 1"));
        }

        let empty_rule = self.exclusions.iter().any(|rule| {
            rule.contains.trim().is_empty()
                || rule.unless.as_deref().is_some_and(|t| t.trim().is_empty())
        });
        if empty_rule {
            return Err(invalid("exclusion terms must not be empty"));
        }

        Ok(())
    }
}
