//! cli
//!
//! Command-line interface layer for slugsmith.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialize logging
//! - Merge config files and flags into a [`Context`]
//! - Delegate to command handlers

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell, SlugArgs};

use anyhow::{bail, Context as _, Result};

use crate::core::config::Config;
use crate::core::options::SlugOptions;

/// Settings shared by every command, after config and flags are merged.
#[derive(Debug, Clone)]
pub struct Context {
    /// Normalization options
    pub options: SlugOptions,
    /// Upper bound on lookups per resolution
    pub max_attempts: u64,
    /// Document field holding the slug
    pub field: String,
}

impl Context {
    /// Merge loaded config with command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a flag holds an invalid value.
    pub fn from_config(config: &Config, flags: &SlugArgs) -> Result<Self> {
        let mut options = config.slug_options();

        if let Some(separator) = &flags.separator {
            options = options.with_separator(separator.clone());
        }
        if flags.keep_case {
            options = options.with_preserve_case(true);
        }
        if let Some(max_length) = flags.max_length {
            if max_length == 0 {
                bail!("--max-length must be positive");
            }
            options = options.with_max_length(max_length);
        }
        if !flags.reserved.is_empty() {
            let words = options
                .reserved_words()
                .iter()
                .cloned()
                .chain(flags.reserved.iter().cloned())
                .collect::<Vec<_>>();
            options = options.with_reserved_words(words);
        }

        Ok(Context {
            options,
            max_attempts: config.max_attempts(),
            field: config.field().to_string(),
        })
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    init_logging(cli.debug);

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let ctx = Context::from_config(&config, &cli.slug)?;

    commands::dispatch(cli.command, &ctx)
}

/// Initialize logging once. `--debug` wins over `RUST_LOG`.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
