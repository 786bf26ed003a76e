//! core
//!
//! Slug normalization and its configuration.
//!
//! # Modules
//!
//! - [`naming`] - The normalization algorithm
//! - [`options`] - Per-call normalization options
//! - [`tokens`] - Disambiguation tokens for reserved words
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Normalization is pure; the only nondeterminism is an injected token source
//! - Options are immutable once built
//! - Config files are strict and validated at load time

pub mod config;
pub mod naming;
pub mod options;
pub mod tokens;
