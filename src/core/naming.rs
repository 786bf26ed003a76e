//! core::naming
//!
//! Slug normalization.
//!
//! # Algorithm
//!
//! 1. Trim surrounding whitespace.
//! 2. Replace every run of whitespace or non-word characters with one
//!    separator. Word characters are ASCII letters, digits and `_`.
//! 3. Strip separator runs from both edges.
//! 4. Lowercase unless case is preserved.
//! 5. Truncate to `max_length` characters, then drop any separator left
//!    dangling at the cut.
//! 6. If the result is a reserved word, append `separator + token`.
//!
//! Steps 1-5 are deterministic ([`normalize`]). Step 6 draws from a
//! [`TokenSource`] and may push the slug past `max_length`.

use std::fmt::Display;

use serde_json::{Number, Value};
use thiserror::Error;

use super::options::SlugOptions;
use super::tokens::{ClockTokens, TokenSource};

/// Errors from slug normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    /// The input value has no text representation.
    #[error("cannot convert {kind} to text")]
    Coercion {
        /// JSON kind of the offending value
        kind: &'static str,
    },
}

/// Generate a slug from any displayable value.
///
/// Reserved words are disambiguated with a millisecond timestamp token. Use
/// [`slugify_with`] to supply a different token source.
///
/// # Example
///
/// ```
/// use slugsmith::core::naming::slugify;
/// use slugsmith::core::options::SlugOptions;
///
/// let options = SlugOptions::default();
/// assert_eq!(slugify("My Example Text!", &options), "my-example-text");
/// assert_eq!(slugify(2024, &options), "2024");
/// ```
pub fn slugify(text: impl Display, options: &SlugOptions) -> String {
    slugify_with(text, options, &ClockTokens::new())
}

/// Generate a slug, drawing reserved-word tokens from `tokens`.
///
/// # Example
///
/// ```
/// use slugsmith::core::naming::slugify_with;
/// use slugsmith::core::options::SlugOptions;
/// use slugsmith::core::tokens::SequenceTokens;
///
/// let options = SlugOptions::new().with_reserved_words(["admin"]);
/// let tokens = SequenceTokens::new();
///
/// assert_eq!(slugify_with("Admin", &options, &tokens), "admin-1");
/// assert_eq!(slugify_with("Admin!", &options, &tokens), "admin-2");
/// ```
pub fn slugify_with(text: impl Display, options: &SlugOptions, tokens: &dyn TokenSource) -> String {
    let slug = normalize(&text.to_string(), options);

    if !slug.is_empty() && options.is_reserved(&slug) {
        let token = tokens.next_token();
        log::warn!("slug '{}' is reserved, appending token '{}'", slug, token);
        return format!("{}{}{}", slug, options.separator(), token);
    }

    slug
}

/// Generate a slug from a JSON value.
///
/// Strings use their content; booleans their literal text; numbers their
/// shortest form, so whole-valued floats print without a fraction (`1.0`
/// becomes `1`). Arrays join their elements with `,` (null elements become
/// empty) and objects read as `[object Object]`.
///
/// # Errors
///
/// Returns [`SlugError::Coercion`] for `null`.
pub fn slugify_value(value: &Value, options: &SlugOptions) -> Result<String, SlugError> {
    let text = value_text(value)?;
    Ok(slugify(text, options))
}

/// Apply the deterministic part of normalization (no reserved-word check).
pub fn normalize(text: &str, options: &SlugOptions) -> String {
    let separator = options.separator();

    let mut replaced = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.trim().chars() {
        if is_word_char(c) {
            replaced.push(c);
            in_run = false;
        } else if !in_run {
            replaced.push_str(separator);
            in_run = true;
        }
    }

    let mut slug = strip_separators(&replaced, separator).to_string();

    if options.folds_case() {
        slug = slug.to_lowercase();
    }

    if let Some(max) = options.max_length() {
        if slug.chars().count() > max {
            let truncated: String = slug.chars().take(max).collect();
            slug = trim_cut_tail(&truncated, separator).to_string();
        }
    }

    slug
}

/// Check if `c` belongs to the word class `[A-Za-z0-9_]`.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn strip_separators<'a>(s: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        return s;
    }
    s.trim_start_matches(separator).trim_end_matches(separator)
}

/// Drop separators (whole or cut in half) left at the end after truncation.
fn trim_cut_tail<'a>(s: &'a str, separator: &str) -> &'a str {
    let mut tail = s;
    loop {
        let before = tail.len();
        if !separator.is_empty() {
            tail = tail.trim_end_matches(separator);
        }
        tail = tail.trim_end_matches(|c: char| !is_word_char(c));
        if tail.len() == before {
            return tail;
        }
    }
}

fn value_text(value: &Value) -> Result<String, SlugError> {
    match value {
        Value::Null => Err(SlugError::Coercion { kind: "null" }),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(number_text(n)),
        Value::String(s) => Ok(s.clone()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .map(|item| match item {
                    Value::Null => Ok(String::new()),
                    other => value_text(other),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.join(","))
        }
        Value::Object(_) => Ok("[object Object]".to_string()),
    }
}

fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokens::SequenceTokens;
    use serde_json::json;

    fn defaults() -> SlugOptions {
        SlugOptions::default()
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("My Example Text!", &defaults()), "my-example-text");
        assert_eq!(slugify("Hello World", &defaults()), "hello-world");
        assert_eq!(slugify("fix: something", &defaults()), "fix-something");
    }

    #[test]
    fn slugify_collapses_runs() {
        assert_eq!(slugify("  multiple   spaces  ", &defaults()), "multiple-spaces");
        assert_eq!(slugify("a -- b", &defaults()), "a-b");
        assert_eq!(slugify("Fix bug [WIP]", &defaults()), "fix-bug-wip");
        assert_eq!(slugify("Test: foo/bar", &defaults()), "test-foo-bar");
    }

    #[test]
    fn slugify_strips_edge_separators() {
        assert_eq!(slugify("!!hello!!", &defaults()), "hello");
        assert_eq!(slugify("---hello---", &defaults()), "hello");
    }

    #[test]
    fn slugify_keeps_underscores() {
        assert_eq!(slugify("snake_case name", &defaults()), "snake_case-name");
    }

    #[test]
    fn slugify_replaces_non_ascii() {
        assert_eq!(slugify("Café crème", &defaults()), "caf-cr-me");
        assert_eq!(slugify("日本語", &defaults()), "");
    }

    #[test]
    fn slugify_handles_empty() {
        assert_eq!(slugify("", &defaults()), "");
        assert_eq!(slugify("   ", &defaults()), "");
        assert_eq!(slugify("?!", &defaults()), "");
    }

    #[test]
    fn slugify_displayable_values() {
        assert_eq!(slugify(42, &defaults()), "42");
        assert_eq!(slugify(3.5, &defaults()), "3-5");
        assert_eq!(slugify(true, &defaults()), "true");
    }

    #[test]
    fn custom_separator() {
        let options = SlugOptions::new().with_separator("_");
        assert_eq!(slugify("Hello big World", &options), "hello_big_world");
        assert_eq!(slugify("__Hello__", &options), "hello");

        let options = SlugOptions::new().with_separator("--");
        assert_eq!(slugify("a b", &options), "a--b");
        assert_eq!(slugify(" !a b! ", &options), "a--b");
    }

    #[test]
    fn empty_separator_removes_runs() {
        let options = SlugOptions::new().with_separator("");
        assert_eq!(slugify("Hello, World!", &options), "helloworld");
    }

    #[test]
    fn preserve_case_overrides_lowercase() {
        let preserved = SlugOptions::new().with_preserve_case(true);
        let not_lowered = SlugOptions::new().with_lowercase(false);
        let text = "Hello Big World";
        assert_eq!(slugify(text, &preserved), "Hello-Big-World");
        assert_eq!(slugify(text, &preserved), slugify(text, &not_lowered));
    }

    #[test]
    fn max_length_truncates() {
        let options = SlugOptions::new().with_max_length(5);
        assert_eq!(slugify("abcdefgh", &options), "abcde");
        assert!(slugify("hello world", &options).chars().count() <= 5);
    }

    #[test]
    fn max_length_drops_dangling_separator() {
        let options = SlugOptions::new().with_max_length(4);
        assert_eq!(slugify("abc def", &options), "abc");

        let options = SlugOptions::new().with_separator("->").with_max_length(2);
        assert_eq!(slugify("a b", &options), "a");
    }

    #[test]
    fn max_length_zero_is_empty() {
        let options = SlugOptions::new().with_max_length(0);
        assert_eq!(slugify("anything", &options), "");
    }

    #[test]
    fn reserved_word_gets_token() {
        let options = SlugOptions::new().with_reserved_words(["admin", "new"]);
        let tokens = SequenceTokens::new();
        assert_eq!(slugify_with("Admin", &options, &tokens), "admin-1");
        assert_eq!(slugify_with("NEW", &options, &tokens), "new-2");
        assert_eq!(slugify_with("admins", &options, &tokens), "admins");
    }

    #[test]
    fn empty_slug_is_never_suffixed() {
        let options = SlugOptions::new().with_reserved_words(["", "admin"]);
        let tokens = SequenceTokens::new();
        assert_eq!(slugify_with("!!", &options, &tokens), "");
        assert_eq!(slugify_with("admin", &options, &tokens), "admin-1");
    }

    #[test]
    fn reserved_word_uses_configured_separator() {
        let options = SlugOptions::new()
            .with_separator("_")
            .with_reserved_words(["admin"]);
        let tokens = SequenceTokens::starting_at(7);
        assert_eq!(slugify_with("admin", &options, &tokens), "admin_7");
    }

    #[test]
    fn reserved_check_runs_after_truncation() {
        let options = SlugOptions::new()
            .with_max_length(5)
            .with_reserved_words(["admin"]);
        let tokens = SequenceTokens::new();
        assert_eq!(slugify_with("administrator", &options, &tokens), "admin-1");
    }

    #[test]
    fn reserved_word_clock_token() {
        let options = SlugOptions::new().with_reserved_words(["admin"]);
        let slug = slugify("admin", &options);
        let token = slug.strip_prefix("admin-").expect("token suffix");
        assert!(!token.is_empty());
        assert!(token.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn normalize_is_idempotent() {
        let options = SlugOptions::new().with_max_length(6);
        for text in ["Hello World", "  a  b  ", "x!y?z", "abcde fgh"] {
            let once = normalize(text, &options);
            assert_eq!(normalize(&once, &options), once);
        }
    }

    #[test]
    fn value_coercion() {
        let options = defaults();
        assert_eq!(slugify_value(&json!("My Title"), &options).unwrap(), "my-title");
        assert_eq!(slugify_value(&json!(12), &options).unwrap(), "12");
        assert_eq!(slugify_value(&json!(false), &options).unwrap(), "false");
        assert_eq!(
            slugify_value(&json!(["a", null, 1]), &options).unwrap(),
            "a-1"
        );
        assert_eq!(
            slugify_value(&json!({"title": "x"}), &options).unwrap(),
            "object-object"
        );
        assert_eq!(
            slugify_value(&json!(["a", {"b": 1}]), &options).unwrap(),
            "a-object-object"
        );
    }

    #[test]
    fn value_coercion_whole_floats() {
        let options = defaults();
        assert_eq!(slugify_value(&json!(1.0), &options).unwrap(), "1");
        assert_eq!(slugify_value(&json!(-0.0), &options).unwrap(), "0");
        assert_eq!(slugify_value(&json!(250.0), &options).unwrap(), "250");
        assert_eq!(slugify_value(&json!(1.5), &options).unwrap(), "1-5");
        assert_eq!(slugify_value(&json!(-3), &options).unwrap(), "3");
    }

    #[test]
    fn value_coercion_failures() {
        let options = defaults();
        assert_eq!(
            slugify_value(&Value::Null, &options),
            Err(SlugError::Coercion { kind: "null" })
        );
        let err = slugify_value(&Value::Null, &options).unwrap_err();
        assert!(err.to_string().contains("null"));
    }
}
