//! make command - Print the slug for some text

use anyhow::{Context as _, Result};
use serde_json::Value;

use crate::cli::Context;
use crate::core::naming::{slugify, slugify_value};

/// Slugify `words` joined by single spaces.
///
/// With `json`, the joined text is parsed as a JSON value first and its
/// text form is slugified instead.
pub fn make(ctx: &Context, words: &[String], json: bool) -> Result<String> {
    let text = words.join(" ");

    if json {
        let value: Value =
            serde_json::from_str(&text).with_context(|| format!("invalid JSON: {}", text))?;
        return Ok(slugify_value(&value, &ctx.options)?);
    }

    Ok(slugify(&text, &ctx.options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::cli::SlugArgs;

    fn ctx() -> Context {
        Context::from_config(&Config::default(), &SlugArgs::default()).unwrap()
    }

    fn words(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn joins_words() {
        assert_eq!(
            make(&ctx(), &words(&["My", "Example", "Text!"]), false).unwrap(),
            "my-example-text"
        );
    }

    #[test]
    fn json_values() {
        assert_eq!(make(&ctx(), &words(&["42"]), true).unwrap(), "42");
        assert_eq!(
            make(&ctx(), &words(&["\"Hello World\""]), true).unwrap(),
            "hello-world"
        );
    }

    #[test]
    fn json_null_fails() {
        let err = make(&ctx(), &words(&["null"]), true).unwrap_err();
        assert!(err.to_string().contains("null"));
    }

    #[test]
    fn invalid_json_fails() {
        assert!(make(&ctx(), &words(&["{oops"]), true).is_err());
    }
}
