//! resolve
//!
//! Uniqueness resolution: turn text into a slug no existing record uses.
//!
//! # Lifecycle
//!
//! ```text
//! START -> NORMALIZING -> CHECKING -> CHECKING (taken) | DONE (free)
//! START -> FAILED (no lookup supplied)
//! ```
//!
//! The base slug is checked first; while a candidate is taken the next one
//! is `base + separator + n` for `n = 1, 2, 3, ...`. Lookups run one at a
//! time, each awaited before the next candidate is built. Lookup errors
//! propagate unchanged and are not retried.
//!
//! # Races
//!
//! The answer is only true as of the last lookup. Two resolutions of the
//! same text running concurrently can both return the same slug; only an
//! atomic insert-if-absent at the store closes that window.

use std::fmt::Display;

use thiserror::Error;

use crate::core::naming::slugify_with;
use crate::core::options::SlugOptions;
use crate::core::tokens::{ClockTokens, TokenSource};
use crate::lookup::{LookupError, SlugLookup};

/// Default upper bound on lookups per resolution.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1000;

/// Errors from uniqueness resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No lookup capability was supplied, so uniqueness cannot be checked.
    #[error("no lookup supplied: cannot check slug uniqueness")]
    MissingLookup,

    /// Every candidate tried was taken.
    #[error("no free slug for '{base}' after {attempts} lookups")]
    AttemptsExhausted {
        /// Base slug the suffixes were appended to
        base: String,
        /// Number of lookups performed
        attempts: u64,
    },

    /// The store could not answer a lookup.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Resolves text to a slug that is free in a record store.
///
/// # Example
///
/// ```
/// use slugsmith::core::options::SlugOptions;
/// use slugsmith::lookup::MemoryLookup;
/// use slugsmith::resolve::Resolver;
///
/// # tokio_test::block_on(async {
/// let lookup = MemoryLookup::with_slugs(["a", "a-1", "a-2"]);
/// let resolver = Resolver::new(SlugOptions::default());
///
/// let slug = resolver.resolve("A", Some(&lookup)).await.unwrap();
/// assert_eq!(slug, "a-3");
/// # });
/// ```
pub struct Resolver {
    options: SlugOptions,
    tokens: Box<dyn TokenSource>,
    max_attempts: u64,
}

impl Resolver {
    /// Resolver with clock tokens and [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(options: SlugOptions) -> Self {
        Self {
            options,
            tokens: Box::new(ClockTokens::new()),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Draw reserved-word tokens from `tokens`.
    pub fn with_tokens(mut self, tokens: impl TokenSource + 'static) -> Self {
        self.tokens = Box::new(tokens);
        self
    }

    /// Give up after `max_attempts` lookups.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn options(&self) -> &SlugOptions {
        &self.options
    }

    pub fn max_attempts(&self) -> u64 {
        self.max_attempts
    }

    /// Produce a slug for `text` that `lookup` reports as free.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::MissingLookup`] when `lookup` is `None`; no
    ///   normalization or lookup happens.
    /// - [`ResolveError::AttemptsExhausted`] after `max_attempts` taken
    ///   candidates.
    /// - [`ResolveError::Lookup`] as soon as any lookup fails.
    pub async fn resolve(
        &self,
        text: impl Display,
        lookup: Option<&dyn SlugLookup>,
    ) -> Result<String, ResolveError> {
        let Some(lookup) = lookup else {
            log::error!("slug resolution requested without a lookup");
            return Err(ResolveError::MissingLookup);
        };

        let base = slugify_with(text, &self.options, self.tokens.as_ref());

        let separator = self.options.separator();
        let mut candidate = base.clone();
        let mut counter: u64 = 1;
        let mut attempts: u64 = 0;

        loop {
            if attempts >= self.max_attempts {
                return Err(ResolveError::AttemptsExhausted { base, attempts });
            }
            attempts += 1;

            if !lookup.exists(&candidate).await? {
                log::debug!("slug '{}' is free after {} lookup(s)", candidate, attempts);
                return Ok(candidate);
            }

            log::debug!("slug '{}' is taken", candidate);
            candidate = format!("{}{}{}", base, separator, counter);
            counter += 1;
        }
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("options", &self.options)
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}

/// Produce a slug for `text` that `lookup` reports as free.
///
/// Shorthand for [`Resolver::new`] followed by [`Resolver::resolve`].
///
/// # Example
///
/// ```
/// use slugsmith::core::options::SlugOptions;
/// use slugsmith::lookup::MemoryLookup;
/// use slugsmith::resolve::{generate_unique_slug, ResolveError};
///
/// # tokio_test::block_on(async {
/// let options = SlugOptions::default();
/// let lookup = MemoryLookup::with_slugs(["my-example-text"]);
///
/// let slug = generate_unique_slug("My Example Text", Some(&lookup), &options).await;
/// assert_eq!(slug.unwrap(), "my-example-text-1");
///
/// let missing = generate_unique_slug("My Example Text", None, &options).await;
/// assert_eq!(missing, Err(ResolveError::MissingLookup));
/// # });
/// ```
pub async fn generate_unique_slug(
    text: impl Display,
    lookup: Option<&dyn SlugLookup>,
    options: &SlugOptions,
) -> Result<String, ResolveError> {
    Resolver::new(options.clone()).resolve(text, lookup).await
}
