//! lookup::memory
//!
//! In-memory lookup for deterministic testing.
//!
//! # Design
//!
//! `MemoryLookup` keeps a set of taken slugs behind `Arc<Mutex<...>>`, so
//! clones share state. Every query is recorded, and a failure can be
//! injected after a given number of successful queries to exercise error
//! propagation mid-resolution.
//!
//! # Example
//!
//! ```
//! use slugsmith::lookup::{MemoryLookup, SlugLookup};
//!
//! # tokio_test::block_on(async {
//! let lookup = MemoryLookup::with_slugs(["hello-world"]);
//!
//! assert!(lookup.exists("hello-world").await.unwrap());
//! assert!(!lookup.exists("hello-world-1").await.unwrap());
//! assert_eq!(lookup.queries(), vec!["hello-world", "hello-world-1"]);
//! # });
//! ```

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::traits::{LookupError, SlugLookup};

/// In-memory slug set.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MemoryLookup {
    inner: Arc<Mutex<MemoryLookupInner>>,
}

#[derive(Debug, Default)]
struct MemoryLookupInner {
    /// Slugs considered taken.
    slugs: HashSet<String>,
    /// Injected failure, if any.
    fail: Option<FailAfter>,
    /// Every slug queried, in order.
    queries: Vec<String>,
}

/// Fail every query after `successes` successful ones.
#[derive(Debug, Clone)]
struct FailAfter {
    successes: usize,
    error: LookupError,
}

impl MemoryLookup {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lookup with pre-existing slugs.
    pub fn with_slugs<I, S>(slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lookup = Self::new();
        {
            let mut inner = lookup.inner.lock().unwrap();
            inner.slugs = slugs.into_iter().map(Into::into).collect();
        }
        lookup
    }

    /// Fail every query with `error` after `successes` queries succeeded.
    ///
    /// # Example
    ///
    /// ```
    /// use slugsmith::lookup::{LookupError, MemoryLookup};
    ///
    /// let lookup = MemoryLookup::new()
    ///     .fail_after(0, LookupError::Query("store offline".into()));
    /// ```
    pub fn fail_after(self, successes: usize, error: LookupError) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.fail = Some(FailAfter { successes, error });
        }
        self
    }

    /// Clear the failure configuration.
    pub fn clear_failure(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.fail = None;
    }

    /// Mark `slug` as taken.
    pub fn insert(&self, slug: impl Into<String>) {
        let mut inner = self.inner.lock().unwrap();
        inner.slugs.insert(slug.into());
    }

    /// Check membership without recording a query.
    pub fn contains(&self, slug: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.slugs.contains(slug)
    }

    /// Get all recorded queries.
    pub fn queries(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner.queries.clone()
    }
}

#[async_trait]
impl SlugLookup for MemoryLookup {
    async fn exists(&self, slug: &str) -> Result<bool, LookupError> {
        let mut inner = self.inner.lock().unwrap();
        let answered = inner.queries.len();
        inner.queries.push(slug.to_string());

        if let Some(fail) = &inner.fail {
            if answered >= fail.successes {
                return Err(fail.error.clone());
            }
        }

        Ok(inner.slugs.contains(slug))
    }
}
