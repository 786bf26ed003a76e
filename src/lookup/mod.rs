//! lookup
//!
//! Record-store existence checks used by the uniqueness resolver.
//!
//! # Architecture
//!
//! The [`SlugLookup`] trait is the only thing the resolver knows about a
//! store. Adapters in this module cover the common cases; anything else
//! implements the trait directly.
//!
//! # Modules
//!
//! - `traits`: Core `SlugLookup` trait and `LookupError`
//! - [`collection`]: JSON document collection on disk
//! - [`memory`]: In-memory set for deterministic testing
//! - `func`: Async closure adapter
//!
//! # Concurrency
//!
//! A lookup answers for the store as of the call. Nothing here reserves a
//! slug, so two resolvers racing on the same text can both be told a
//! candidate is free. Closing that gap takes an atomic insert-if-absent in
//! the store itself.

pub mod collection;
mod func;
pub mod memory;
mod traits;

pub use collection::JsonCollection;
pub use func::FnLookup;
pub use memory::MemoryLookup;
pub use traits::*;
