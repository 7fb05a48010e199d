//! Survey configuration.
//!
//! [`SurveySettings`] describes what to search for and how much to report,
//! optionally loaded from a TOML file. [`SurveyConfig`] adds the credentials
//! and endpoint needed to talk to the API, and is what a run is built from.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{SurveySettings, MAX_PAGE_SIZE};

use url::Url;

/// Everything a survey run needs.
#[derive(Debug, Clone)]
pub struct SurveyConfig {
    /// Token sent as a bearer token on every request.
    token: String,
    /// API base URL; `None` means public GitHub.
    api_base_url: Option<Url>,
    /// Search and report settings.
    settings: SurveySettings,
}

impl SurveyConfig {
    /// Creates a configuration with default settings.
    pub fn new(token: String) -> Self {
        Self {
            token,
            api_base_url: None,
            settings: SurveySettings::default(),
        }
    }

    /// Replaces the search and report settings.
    pub fn with_settings(mut self, settings: SurveySettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets a custom API base URL.
    pub fn with_api_base_url(mut self, api_base_url: Url) -> Self {
        self.api_base_url = Some(api_base_url);
        self
    }

    /// Returns the configured token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the API base URL override, if any.
    pub fn api_base_url(&self) -> Option<&Url> {
        self.api_base_url.as_ref()
    }

    /// Returns the search and report settings.
    pub fn settings(&self) -> &SurveySettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn can_load_settings_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("survey.toml");
        fs::write(&path, "keywords = \"scrum\"\nreport-limit = 5\n").unwrap();

        let settings = SurveySettings::load(&path).unwrap();

        assert_eq!(settings.keywords, "scrum");
        assert_eq!(settings.report_limit, 5);
        assert_eq!(settings.max_results, 100);
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = SurveySettings::load(&temp.path().join("nonexistent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn load_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("survey.toml");
        fs::write(&path, "keywords = ").unwrap();

        let result = SurveySettings::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn load_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("survey.toml");
        fs::write(&path, "max-results = 0\n").unwrap();

        let result = SurveySettings::load(&path);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn load_errors_name_the_file() {
        use std::error::Error;

        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        let broken = temp.path().join("broken.toml");
        fs::write(&broken, "report-limit = \"ten\"\n").unwrap();

        let read = SurveySettings::load(&missing).unwrap_err();
        assert_eq!(
            read.to_string(),
            format!("Settings file '{}' could not be read", missing.display())
        );
        assert!(read.source().is_some());

        let parse = SurveySettings::load(&broken).unwrap_err();
        assert_eq!(
            parse.to_string(),
            format!("Settings file '{}' is not valid survey TOML", broken.display())
        );
        assert!(parse.source().is_some());
    }

    #[test]
    fn config_builders() {
        let url = Url::parse("https://github.example.com/api/v3/").unwrap();
        let settings = SurveySettings {
            report_limit: 7,
            ..SurveySettings::default()
        };

        let config = SurveyConfig::new("secret".to_string())
            .with_settings(settings)
            .with_api_base_url(url.clone());

        assert_eq!(config.token(), "secret");
        assert_eq!(config.api_base_url(), Some(&url));
        assert_eq!(config.settings().report_limit, 7);
    }
}
