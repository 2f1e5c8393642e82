use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, RoundRobinError};
use crate::fuzz_list::DEFAULT_SCHEME;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "roundrobinizer.toml";

/// Prefix for environment overrides, e.g. `ROUNDROBINIZER_FUZZ_SCHEME=http`
pub const ENV_PREFIX: &str = "ROUNDROBINIZER";

pub const BANNER: &str = "Powered by Victor Security (https://victorsecurity.com.br)";

/// Settings shared by both entry points
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Scheme placed in front of every fuzz URL
    pub fuzz_scheme: String,

    /// Full Public Suffix List file (uses the bundled rules if None)
    pub suffix_list: Option<PathBuf>,

    /// Honour the private section of the bundled list (`github.io` is a suffix)
    pub private_suffixes: bool,

    /// Whether to print the branding banner to stderr
    pub banner: bool,

    /// Directory for timestamped log files (logs go to stderr if None)
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fuzz_scheme: DEFAULT_SCHEME.to_string(),
            suffix_list: None,
            private_suffixes: false,
            banner: true,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads settings from an optional TOML file and the environment
    ///
    /// An explicitly given file must exist. Without one, `roundrobinizer.toml`
    /// in the working directory is read if present. Environment variables
    /// override file values. Values are not checked here; call `validate`
    /// once command-line overrides are applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| RoundRobinError::InvalidConfig(e.to_string()))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| RoundRobinError::InvalidConfig(e.to_string()))?;

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Checks values that the file, environment or command line may have set
    pub fn validate(&self) -> Result<()> {
        let scheme = self.fuzz_scheme.trim_end_matches("://");
        let valid = scheme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid {
            return Err(RoundRobinError::InvalidConfig(format!(
                "fuzz_scheme '{}' is not a valid URL scheme",
                self.fuzz_scheme
            )));
        }
        Ok(())
    }
}
