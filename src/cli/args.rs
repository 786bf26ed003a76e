//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--config <file>`: Config file layered over the global one
//! - `--debug`: Enable debug logging
//! - `--separator`, `--keep-case`, `--max-length`, `--reserved`:
//!   Override normalization options from config

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// slugsmith - URL slugs that don't collide
#[derive(Parser, Debug)]
#[command(name = "slugsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to load on top of the global config
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub slug: SlugArgs,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Normalization overrides; unset flags defer to config.
#[derive(Args, Debug, Clone, Default)]
pub struct SlugArgs {
    /// Separator joining words and counters
    #[arg(long, global = true, value_name = "SEP", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Keep the input's letter case
    #[arg(long, global = true)]
    pub keep_case: bool,

    /// Truncate slugs to this many characters
    #[arg(long, global = true, value_name = "N")]
    pub max_length: Option<usize>,

    /// Word that must never be produced verbatim (repeatable)
    #[arg(long = "reserved", global = true, value_name = "WORD")]
    pub reserved: Vec<String>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the slug for some text
    #[command(
        name = "make",
        after_help = "\
EXAMPLES:
    slugsmith make \"My Example Text!\"        # my-example-text
    slugsmith make --keep-case Hello World    # Hello-World
    slugsmith make --json '[\"a\", 1]'          # a-1"
    )]
    Make {
        /// Text to slugify; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Parse TEXT as a JSON value and slugify its text form
        #[arg(long)]
        json: bool,
    },

    /// Print a slug that no document in a collection uses yet
    #[command(
        name = "unique",
        long_about = "Print a slug that no document in a collection uses yet.\n\n\
            The collection is a JSON file holding an array of documents. The slug \
            for TEXT is checked against each document's slug field; while it is \
            taken, -1, -2, ... are appended until a free one is found.\n\n\
            Nothing is written to the collection. Two runs racing on the same text \
            can print the same slug.",
        after_help = "\
EXAMPLES:
    slugsmith unique --collection posts.json \"Hello World\"
    slugsmith unique -c users.json --field handle \"Ada Lovelace\""
    )]
    Unique {
        /// Text to slugify; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// JSON file holding an array of documents
        #[arg(short, long, value_name = "FILE")]
        collection: PathBuf,

        /// Document field holding the slug
        #[arg(long, value_name = "NAME")]
        field: Option<String>,

        /// Give up after this many lookups
        #[arg(long, value_name = "N")]
        max_attempts: Option<u64>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "slugsmith",
            "make",
            "Hello",
            "World",
            "--separator",
            "_",
            "--reserved",
            "admin",
            "--reserved",
            "new",
        ])
        .unwrap();

        assert_eq!(cli.slug.separator.as_deref(), Some("_"));
        assert_eq!(cli.slug.reserved, vec!["admin", "new"]);
        match cli.command {
            Command::Make { text, json } => {
                assert_eq!(text, vec!["Hello", "World"]);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unique_requires_collection() {
        assert!(Cli::try_parse_from(["slugsmith", "unique", "text"]).is_err());
    }
}
