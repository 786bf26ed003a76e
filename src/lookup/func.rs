//! lookup::func
//!
//! Adapt an async closure into a [`SlugLookup`].
//!
//! # Example
//!
//! ```
//! use slugsmith::lookup::{FnLookup, LookupError, SlugLookup};
//!
//! # tokio_test::block_on(async {
//! let lookup = FnLookup::new(|slug: String| async move {
//!     Ok::<_, LookupError>(slug.starts_with("taken"))
//! });
//!
//! assert!(lookup.exists("taken-1").await.unwrap());
//! assert!(!lookup.exists("free").await.unwrap());
//! # });
//! ```

use std::fmt;
use std::future::Future;

use async_trait::async_trait;

use super::traits::{LookupError, SlugLookup};

/// Lookup backed by a closure returning a future.
pub struct FnLookup<F> {
    f: F,
}

impl<F> FnLookup<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnLookup<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLookup").finish_non_exhaustive()
    }
}

#[async_trait]
impl<F, Fut> SlugLookup for FnLookup<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<bool, LookupError>> + Send,
{
    async fn exists(&self, slug: &str) -> Result<bool, LookupError> {
        (self.f)(slug.to_string()).await
    }
}
