use bookshelf_core::SortParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to resolve a [`BookshelfConfig`](crate::BookshelfConfig).
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// A config file could not be read.
    #[error("failed to read config file {path}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A `.toml` file did not parse.
    #[error("invalid TOML config {origin}")]
    Toml {
        /// File path or variable name the text came from.
        origin: String,
        #[source]
        source: toml::de::Error,
    },
    /// A `.json` file or inline JSON did not parse.
    #[error("invalid JSON config {origin}")]
    Json {
        /// File path or variable name the text came from.
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    /// Text of unknown format parsed as neither TOML nor JSON.
    #[error(
        "failed to parse config {origin}: toml error: {toml}; json error: {json}"
    )]
    Unparseable {
        /// File path or variable name the text came from.
        origin: String,
        /// Error from the TOML attempt.
        toml: toml::de::Error,
        /// Error from the JSON attempt.
        json: serde_json::Error,
    },
    /// An override variable held an unknown value.
    #[error("invalid value for {key}")]
    InvalidOverride {
        /// Override variable name.
        key: &'static str,
        #[source]
        source: SortParseError,
    },
}
