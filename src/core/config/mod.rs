//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Config file passed with `--config`
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order, first hit wins:
//! 1. `$SLUGSMITH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/slugsmith/config.toml`
//! 3. `~/.slugsmith/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use slugsmith::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! let options = config.slug_options();
//! println!("separator: {}", options.separator());
//! println!("max attempts: {}", config.max_attempts());
//! ```

pub mod schema;

pub use schema::{FileConfig, ResolveSection, SlugSection};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::options::SlugOptions;
use crate::lookup::DEFAULT_FIELD;
use crate::resolve::DEFAULT_MAX_ATTEMPTS;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all files.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Merged file contents
    pub file: FileConfig,
    /// Files that contributed, in load order
    sources: Vec<PathBuf>,
}

impl Config {
    /// Load the global config file, then `explicit` on top of it.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed or
    /// holds invalid values, or if `explicit` cannot be read. A missing
    /// global file is not an error (defaults are used).
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let global = Self::find_global();
        Self::from_files(global.as_deref(), explicit)
    }

    /// Build a config from an optional global file and an optional
    /// explicit file.
    pub fn from_files(global: Option<&Path>, explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        for path in global.into_iter().chain(explicit) {
            let file = Self::read_file(path)?;
            file.validate()?;
            log::debug!("loaded config from {}", path.display());
            config.file = config.file.merged_with(file);
            config.sources.push(path.to_path_buf());
        }

        config.file.validate()?;
        Ok(config)
    }

    /// Locate the global config file, if any.
    fn find_global() -> Option<PathBuf> {
        // 1. Check $SLUGSMITH_CONFIG
        if let Ok(path) = std::env::var("SLUGSMITH_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/slugsmith/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("slugsmith/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.slugsmith/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".slugsmith/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Read and parse a config file.
    fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with defaults applied
    // =========================================================================

    /// Normalization options with defaults filled in.
    pub fn slug_options(&self) -> SlugOptions {
        let mut options = SlugOptions::default();
        let Some(slug) = &self.file.slug else {
            return options;
        };

        if let Some(separator) = &slug.separator {
            options = options.with_separator(separator.clone());
        }
        if let Some(lowercase) = slug.lowercase {
            options = options.with_lowercase(lowercase);
        }
        if let Some(preserve_case) = slug.preserve_case {
            options = options.with_preserve_case(preserve_case);
        }
        if let Some(max_length) = slug.max_length {
            options = options.with_max_length(max_length);
        }
        if let Some(words) = &slug.reserved_words {
            options = options.with_reserved_words(words.iter().cloned());
        }
        options
    }

    /// Upper bound on lookups per resolution.
    ///
    /// Defaults to [`DEFAULT_MAX_ATTEMPTS`].
    pub fn max_attempts(&self) -> u64 {
        self.file
            .resolve
            .as_ref()
            .and_then(|r| r.max_attempts)
            .unwrap_or(DEFAULT_MAX_ATTEMPTS)
    }

    /// Document field compared against candidates.
    ///
    /// Defaults to `"slug"`.
    pub fn field(&self) -> &str {
        self.file
            .resolve
            .as_ref()
            .and_then(|r| r.field.as_deref())
            .unwrap_or(DEFAULT_FIELD)
    }

    /// Files that were loaded, in precedence order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }
}
