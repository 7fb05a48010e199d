//! Settings loading errors.

use thiserror::Error;

/// Why a set of survey settings could not be used.
///
/// Each variant carries where the settings came from: a file path, or a label
/// such as `command line` for settings assembled from flags.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be opened or read.
    #[error("Settings file '{path}' could not be read")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not TOML, or has unknown or mistyped keys.
    #[error("Settings file '{path}' is not valid survey TOML")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A setting was parsed but holds an unusable value.
    #[error("Invalid setting in '{origin}': {message}")]
    Invalid { origin: String, message: String },
}
