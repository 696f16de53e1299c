//! Resolves [`BookshelfConfig`] from the environment and config files.
//!
//! Evaluation order:
//! 1) `$BOOKSHELF_CONFIG_PATH` (TOML or JSON file),
//! 2) `$BOOKSHELF_CONFIG_JSON` (inline JSON),
//! 3) the first default file found under the search root,
//! 4) defaults.
//!
//! `$BOOKSHELF_RATING_COMPARISON` and `$BOOKSHELF_PASS_ORDER` are applied on
//! top of whichever source won.

pub mod error;

use crate::models::BookshelfConfig;
use crate::util::non_empty;
use error::ConfigLoadError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "BOOKSHELF_CONFIG_PATH";
/// Inline JSON config.
pub const CONFIG_JSON_VAR: &str = "BOOKSHELF_CONFIG_JSON";
/// Overrides `sorting.rating_comparison`.
pub const RATING_COMPARISON_VAR: &str = "BOOKSHELF_RATING_COMPARISON";
/// Overrides `sorting.pass_order`.
pub const PASS_ORDER_VAR: &str = "BOOKSHELF_PASS_ORDER";

const ENV_PREFIX: &str = "BOOKSHELF_";

const DEFAULT_CANDIDATES: &[&str] = &[
    "bookshelf.toml",
    "bookshelf.json",
    "config/bookshelf.toml",
];

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Built-in defaults.
    #[default]
    Default,
    /// File named by `$BOOKSHELF_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// `$BOOKSHELF_CONFIG_JSON`.
    EnvInline,
    /// A default or explicitly requested file.
    File(PathBuf),
}

/// A resolved configuration and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoad {
    /// Resolved configuration, overrides included.
    pub config: BookshelfConfig,
    /// Where `config` was read from.
    pub source: ConfigSource,
    /// Env overrides that were applied, by variable name.
    pub overrides: Vec<&'static str>,
}

/// Loads configuration from a snapshot of `BOOKSHELF_*` variables.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    vars: HashMap<String, String>,
    search_root: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            vars: HashMap::new(),
            search_root: PathBuf::from("."),
        }
    }
}

impl ConfigLoader {
    /// Snapshot the process environment.
    pub fn from_env() -> Self {
        Self::with_vars(
            std::env::vars().filter(|(key, _)| key.starts_with(ENV_PREFIX)),
        )
    }

    /// Use the given variables instead of the process environment.
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Directory searched for default config files.
    pub fn search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    /// Shorthand for `ConfigLoader::from_env().load()`.
    pub fn load_from_env() -> Result<ConfigLoad, ConfigLoadError> {
        Self::from_env().load()
    }

    /// Resolve configuration following the documented evaluation order.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (config, source) = if let Some(path) = self.var(CONFIG_PATH_VAR) {
            let path = PathBuf::from(path);
            (Self::load_from_file(&path)?, ConfigSource::EnvPath(path))
        } else if let Some(raw) = self.var(CONFIG_JSON_VAR) {
            (
                Self::parse_json(raw, CONFIG_JSON_VAR)?,
                ConfigSource::EnvInline,
            )
        } else if let Some(path) = self.find_default_file() {
            (Self::load_from_file(&path)?, ConfigSource::File(path))
        } else {
            (BookshelfConfig::default(), ConfigSource::Default)
        };

        self.finish(config, source)
    }

    /// Load an explicitly chosen file, then apply env overrides.
    pub fn load_path(&self, path: &Path) -> Result<ConfigLoad, ConfigLoadError> {
        let config = Self::load_from_file(path)?;
        self.finish(config, ConfigSource::File(path.to_path_buf()))
    }

    /// Read and parse a config file. `.json` and `.toml` extensions pick the
    /// format; anything else tries TOML, then JSON.
    pub fn load_from_file(
        path: &Path,
    ) -> Result<BookshelfConfig, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") | Some("tml") => toml::from_str(&contents)
                .map_err(|source| ConfigLoadError::Toml { origin, source }),
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Try TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<BookshelfConfig, ConfigLoadError> {
        toml::from_str(contents).or_else(|toml| {
            serde_json::from_str(contents).map_err(|json| {
                ConfigLoadError::Unparseable {
                    origin: origin.to_string(),
                    toml,
                    json,
                }
            })
        })
    }

    /// Parse JSON, reporting failures against `origin`.
    pub fn parse_json(
        raw: &str,
        origin: &str,
    ) -> Result<BookshelfConfig, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: origin.to_string(),
            source,
        })
    }

    fn var(&self, name: &str) -> Option<&str> {
        non_empty(self.vars.get(name).map(String::as_str))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.is_file())
    }

    fn finish(
        &self,
        mut config: BookshelfConfig,
        source: ConfigSource,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let mut overrides = Vec::new();

        if let Some(raw) = self.var(RATING_COMPARISON_VAR) {
            config.sorting.rating_comparison = raw.parse().map_err(|source| {
                ConfigLoadError::InvalidOverride {
                    key: RATING_COMPARISON_VAR,
                    source,
                }
            })?;
            overrides.push(RATING_COMPARISON_VAR);
        }

        if let Some(raw) = self.var(PASS_ORDER_VAR) {
            config.sorting.pass_order = raw.parse().map_err(|source| {
                ConfigLoadError::InvalidOverride {
                    key: PASS_ORDER_VAR,
                    source,
                }
            })?;
            overrides.push(PASS_ORDER_VAR);
        }

        tracing::debug!(
            ?source,
            rating_comparison = %config.sorting.rating_comparison,
            pass_order = %config.sorting.pass_order,
            overrides = overrides.len(),
            "resolved bookshelf config"
        );

        Ok(ConfigLoad {
            config,
            source,
            overrides,
        })
    }
}
