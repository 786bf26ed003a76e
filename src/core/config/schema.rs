//! core::config::schema
//!
//! Configuration file schema.
//!
//! Every field is optional so that files can be layered: a value set in a
//! later file overrides the same value from an earlier one, and anything
//! left unset falls through to the built-in default.
//!
//! # Validation
//!
//! Values are validated after parsing (and again after merging) so that a
//! bad length or attempt limit is rejected at load time rather than
//! surfacing mid-resolution.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Contents of one config file.
///
/// # Example
///
/// ```toml
/// [slug]
/// separator = "-"
/// lowercase = true
/// preserve_case = false
/// max_length = 80
/// reserved_words = ["admin", "new"]
///
/// [resolve]
/// max_attempts = 1000
/// field = "slug"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Normalization settings
    pub slug: Option<SlugSection>,

    /// Uniqueness resolution settings
    pub resolve: Option<ResolveSection>,
}

/// `[slug]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SlugSection {
    pub separator: Option<String>,
    pub lowercase: Option<bool>,
    pub preserve_case: Option<bool>,
    pub max_length: Option<usize>,
    pub reserved_words: Option<Vec<String>>,
}

/// `[resolve]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ResolveSection {
    /// Upper bound on store lookups per resolution
    pub max_attempts: Option<u64>,

    /// Document field holding the slug in a JSON collection
    pub field: Option<String>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(slug) = &self.slug {
            if slug.max_length == Some(0) {
                return Err(ConfigError::InvalidValue(
                    "slug.max_length must be positive".to_string(),
                ));
            }
        }

        if let Some(resolve) = &self.resolve {
            if resolve.max_attempts == Some(0) {
                return Err(ConfigError::InvalidValue(
                    "resolve.max_attempts must be positive".to_string(),
                ));
            }
            if let Some(field) = &resolve.field {
                if field.is_empty() {
                    return Err(ConfigError::InvalidValue(
                        "resolve.field cannot be empty".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Layer `overlay` on top of `self`, field by field.
    pub fn merged_with(self, overlay: FileConfig) -> FileConfig {
        FileConfig {
            slug: merge_section(self.slug, overlay.slug, |base, top| SlugSection {
                separator: top.separator.or(base.separator),
                lowercase: top.lowercase.or(base.lowercase),
                preserve_case: top.preserve_case.or(base.preserve_case),
                max_length: top.max_length.or(base.max_length),
                reserved_words: top.reserved_words.or(base.reserved_words),
            }),
            resolve: merge_section(self.resolve, overlay.resolve, |base, top| ResolveSection {
                max_attempts: top.max_attempts.or(base.max_attempts),
                field: top.field.or(base.field),
            }),
        }
    }
}

fn merge_section<T>(base: Option<T>, top: Option<T>, merge: impl FnOnce(T, T) -> T) -> Option<T> {
    match (base, top) {
        (Some(base), Some(top)) => Some(merge(base, top)),
        (base, None) => base,
        (None, top) => top,
    }
}
