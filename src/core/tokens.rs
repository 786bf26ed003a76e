//! core::tokens
//!
//! Disambiguation tokens for reserved-word slugs.
//!
//! When a normalized slug is exactly a reserved word, the normalizer appends
//! `separator + token`. The token comes from a [`TokenSource`] handed in by
//! the caller, so the choice between wall-clock tokens and a plain counter
//! is explicit at the call site.
//!
//! # Weak guarantee
//!
//! [`ClockTokens`] is monotonic only within one instance. Two independent
//! instances (or two processes) can hand out the same millisecond value, so a
//! clock token makes a collision unlikely, not impossible.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use chrono::Utc;

/// Source of tokens appended to reserved-word slugs.
pub trait TokenSource: Send + Sync {
    /// Produce the next token.
    ///
    /// Tokens must contain only word characters (`[A-Za-z0-9_]`) so the
    /// suffixed slug is itself a valid slug.
    fn next_token(&self) -> String;
}

/// Millisecond timestamp tokens.
///
/// Each call returns `max(now_ms, last + 1)`, so tokens from one instance are
/// strictly increasing even within the same millisecond.
#[derive(Debug, Default)]
pub struct ClockTokens {
    last: AtomicI64,
}

impl ClockTokens {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenSource for ClockTokens {
    fn next_token(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Counter tokens: `1`, `2`, `3`, ...
///
/// Deterministic, which makes it the source of choice in tests.
#[derive(Debug)]
pub struct SequenceTokens {
    next: AtomicU64,
}

impl SequenceTokens {
    /// Counter starting at 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Counter starting at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequenceTokens {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSource for SequenceTokens {
    fn next_token(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}
