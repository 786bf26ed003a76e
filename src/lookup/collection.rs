//! lookup::collection
//!
//! Lookup against a JSON document collection on disk.
//!
//! The file holds an array of documents:
//!
//! ```json
//! [
//!   { "slug": "hello-world", "title": "Hello World" },
//!   { "slug": "hello-world-1", "title": "Hello, World" }
//! ]
//! ```
//!
//! `exists` is a find-one on the configured field: it re-reads the file on
//! every call, so each answer reflects the file as of that call. A missing
//! file is an empty collection. Documents without the field, or with a
//! non-string value in it, never match.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use super::traits::{LookupError, SlugLookup, DEFAULT_FIELD};

/// A JSON array of documents, queried by one field.
#[derive(Debug, Clone)]
pub struct JsonCollection {
    path: PathBuf,
    field: String,
}

impl JsonCollection {
    /// Collection at `path`, matching on the `slug` field.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            field: DEFAULT_FIELD.to_string(),
        }
    }

    /// Match on `field` instead of `slug`.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Read and parse the whole collection.
    async fn documents(&self) -> Result<Vec<Value>, LookupError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(LookupError::Read {
                    path: self.path.clone(),
                    message: e.to_string(),
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: Value =
            serde_json::from_str(&contents).map_err(|e| LookupError::Malformed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        match value {
            Value::Array(documents) => Ok(documents),
            _ => Err(LookupError::Malformed {
                path: self.path.clone(),
                message: "expected a JSON array of documents".to_string(),
            }),
        }
    }
}

#[async_trait]
impl SlugLookup for JsonCollection {
    async fn exists(&self, slug: &str) -> Result<bool, LookupError> {
        let documents = self.documents().await?;
        let found = documents
            .iter()
            .any(|doc| doc.get(&self.field).and_then(Value::as_str) == Some(slug));
        log::debug!(
            "{} {}={:?}: {}",
            self.path.display(),
            self.field,
            slug,
            if found { "found" } else { "absent" }
        );
        Ok(found)
    }
}
