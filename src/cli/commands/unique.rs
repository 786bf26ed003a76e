//! unique command - Resolve a free slug against a JSON collection

use std::path::Path;

use anyhow::{bail, Result};

use crate::cli::Context;
use crate::lookup::{JsonCollection, SlugLookup};
use crate::resolve::Resolver;

/// Resolve a slug for `words` that no document in `collection` uses.
///
/// `field` and `max_attempts` override the values from config.
pub async fn unique(
    ctx: &Context,
    words: &[String],
    collection: &Path,
    field: Option<&str>,
    max_attempts: Option<u64>,
) -> Result<String> {
    let field = field.unwrap_or(&ctx.field);
    if field.is_empty() {
        bail!("--field cannot be empty");
    }
    let max_attempts = max_attempts.unwrap_or(ctx.max_attempts);
    if max_attempts == 0 {
        bail!("--max-attempts must be positive");
    }

    let store = JsonCollection::open(collection).with_field(field);
    let resolver = Resolver::new(ctx.options.clone()).with_max_attempts(max_attempts);

    log::debug!(
        "resolving against {} (field '{}', at most {} lookups)",
        collection.display(),
        field,
        max_attempts
    );

    let slug = resolver
        .resolve(words.join(" "), Some(&store as &dyn SlugLookup))
        .await?;
    Ok(slug)
}
