//! lookup::traits
//!
//! The existence check the resolver runs against a record store.
//!
//! # Design
//!
//! The `SlugLookup` trait is async because real stores sit behind I/O.
//! It answers one question, "is there a record whose slug field equals
//! this value", and reflects the store as of the call. No ordering or
//! transactional guarantee is assumed between calls.
//!
//! # Example
//!
//! ```ignore
//! use slugsmith::lookup::{LookupError, SlugLookup};
//!
//! async fn is_taken(store: &dyn SlugLookup, slug: &str) -> Result<bool, LookupError> {
//!     store.exists(slug).await
//! }
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Field name compared against candidates by default.
pub const DEFAULT_FIELD: &str = "slug";

/// Errors from lookup operations.
///
/// The resolver never retries these; they propagate to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The backing store could not be read.
    #[error("failed to read collection '{path}': {message}")]
    Read {
        /// Path of the collection file
        path: PathBuf,
        /// Underlying I/O error text
        message: String,
    },

    /// The backing store holds data of an unexpected shape.
    #[error("malformed collection '{path}': {message}")]
    Malformed {
        /// Path of the collection file
        path: PathBuf,
        /// What was wrong with it
        message: String,
    },

    /// The store rejected the query.
    #[error("lookup failed: {0}")]
    Query(String),
}

/// Existence check against a collection of records.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that a resolver future can move
/// across tasks.
#[async_trait]
pub trait SlugLookup: Send + Sync {
    /// Check whether a record with slug `slug` exists.
    ///
    /// Returns `Ok(true)` when a matching record is found, `Ok(false)` when
    /// none is, and `Err` when the store could not answer.
    async fn exists(&self, slug: &str) -> Result<bool, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = LookupError::Read {
            path: PathBuf::from("/tmp/posts.json"),
            message: "permission denied".into(),
        };
        assert!(err.to_string().contains("posts.json"));
        assert!(err.to_string().contains("read"));

        let err = LookupError::Malformed {
            path: PathBuf::from("posts.json"),
            message: "expected an array".into(),
        };
        assert!(err.to_string().contains("malformed"));
        assert!(err.to_string().contains("expected an array"));

        let err = LookupError::Query("connection reset".into());
        assert!(err.to_string().contains("connection reset"));
    }
}
