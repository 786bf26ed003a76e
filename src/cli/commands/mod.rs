//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Async Commands
//!
//! `unique` queries a record store and is async. The dispatch function
//! builds a tokio runtime for it and blocks on the result, so the rest of
//! the CLI stays synchronous.

mod completion;
mod make;
mod unique;

pub use completion::completion;
pub use make::make;
pub use unique::unique;

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Make { text, json } => {
            let slug = make(ctx, &text, json)?;
            println!("{}", slug);
            Ok(())
        }
        Command::Unique {
            text,
            collection,
            field,
            max_attempts,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            let slug = rt.block_on(unique(
                ctx,
                &text,
                &collection,
                field.as_deref(),
                max_attempts,
            ))?;
            println!("{}", slug);
            Ok(())
        }
        Command::Completion { shell } => completion(shell),
    }
}
