//! core::options
//!
//! Normalization options.
//!
//! # Defaults
//!
//! | option           | default   |
//! |------------------|-----------|
//! | `separator`      | `"-"`     |
//! | `lowercase`      | `true`    |
//! | `preserve_case`  | `false`   |
//! | `max_length`     | unbounded |
//! | `reserved_words` | empty     |
//!
//! `preserve_case` wins over `lowercase`: case is kept whenever it is set.

use std::collections::BTreeSet;

/// Default separator used to join words and counters.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Options controlling how text is turned into a slug.
///
/// Options are built once and passed by reference into every call; nothing
/// in this crate mutates them.
///
/// # Example
///
/// ```
/// use slugsmith::core::options::SlugOptions;
///
/// let options = SlugOptions::new()
///     .with_separator("_")
///     .with_max_length(20)
///     .with_reserved_words(["admin", "new"]);
///
/// assert_eq!(options.separator(), "_");
/// assert!(options.is_reserved("admin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugOptions {
    separator: String,
    lowercase: bool,
    preserve_case: bool,
    max_length: Option<usize>,
    reserved_words: BTreeSet<String>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            lowercase: true,
            preserve_case: false,
            max_length: None,
            reserved_words: BTreeSet::new(),
        }
    }
}

impl SlugOptions {
    /// Options with every value at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator.
    ///
    /// An empty separator is accepted: non-word runs are then removed
    /// rather than replaced.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set whether output is lowercased.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Set whether the input case is preserved regardless of `lowercase`.
    pub fn with_preserve_case(mut self, preserve_case: bool) -> Self {
        self.preserve_case = preserve_case;
        self
    }

    /// Bound the slug to `max_length` characters.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Remove any length bound.
    pub fn unbounded(mut self) -> Self {
        self.max_length = None;
        self
    }

    /// Replace the reserved word set.
    pub fn with_reserved_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// The separator token.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Raw `lowercase` flag, before `preserve_case` is taken into account.
    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    /// Raw `preserve_case` flag.
    pub fn preserve_case(&self) -> bool {
        self.preserve_case
    }

    /// Whether normalization lowercases its output.
    pub fn folds_case(&self) -> bool {
        self.lowercase && !self.preserve_case
    }

    /// Length bound in characters, `None` when unbounded.
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// The reserved word set.
    pub fn reserved_words(&self) -> &BTreeSet<String> {
        &self.reserved_words
    }

    /// Check if `slug` is exactly one of the reserved words.
    pub fn is_reserved(&self, slug: &str) -> bool {
        self.reserved_words.contains(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = SlugOptions::default();
        assert_eq!(options.separator(), "-");
        assert!(options.lowercase());
        assert!(!options.preserve_case());
        assert_eq!(options.max_length(), None);
        assert!(options.reserved_words().is_empty());
        assert!(options.folds_case());
    }

    #[test]
    fn preserve_case_overrides_lowercase() {
        let options = SlugOptions::new()
            .with_lowercase(true)
            .with_preserve_case(true);
        assert!(!options.folds_case());

        let options = SlugOptions::new().with_lowercase(false);
        assert!(!options.folds_case());
    }

    #[test]
    fn reserved_lookup_is_exact() {
        let options = SlugOptions::new().with_reserved_words(["admin"]);
        assert!(options.is_reserved("admin"));
        assert!(!options.is_reserved("Admin"));
        assert!(!options.is_reserved("admin-1"));
    }

    #[test]
    fn unbounded_clears_length() {
        let options = SlugOptions::new().with_max_length(4).unbounded();
        assert_eq!(options.max_length(), None);
    }
}
