//! slugsmith - URL slugs that don't collide
//!
//! Turns arbitrary text into URL-safe slugs and, given a way to ask a record
//! store whether a slug is already taken, picks the first free variant by
//! appending `-1`, `-2`, ...
//!
//! # Architecture
//!
//! - [`core`] - Normalization algorithm, options, tokens and config
//! - [`lookup`] - The `SlugLookup` store abstraction and adapters
//! - [`resolve`] - Uniqueness resolution loop
//! - [`cli`] - Command-line interface layer
//!
//! # Example
//!
//! ```
//! use slugsmith::{generate_unique_slug, slugify, MemoryLookup, SlugOptions};
//!
//! let options = SlugOptions::default();
//! assert_eq!(slugify("My Example Text!", &options), "my-example-text");
//!
//! # tokio_test::block_on(async {
//! let posts = MemoryLookup::with_slugs(["my-example-text"]);
//! let slug = generate_unique_slug("My Example Text", Some(&posts), &options).await;
//! assert_eq!(slug.unwrap(), "my-example-text-1");
//! # });
//! ```
//!
//! # Limitations
//!
//! A resolved slug is only free as of its last lookup. Concurrent
//! resolutions of the same text can return the same slug; the store must
//! enforce uniqueness on insert if that matters.

pub mod cli;
pub mod core;
pub mod lookup;
pub mod resolve;

pub use crate::core::naming::{slugify, slugify_value, slugify_with, SlugError};
pub use crate::core::options::SlugOptions;
pub use crate::core::tokens::{ClockTokens, SequenceTokens, TokenSource};
pub use crate::lookup::{FnLookup, JsonCollection, LookupError, MemoryLookup, SlugLookup};
pub use crate::resolve::{generate_unique_slug, ResolveError, Resolver};
