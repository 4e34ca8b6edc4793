//! TTL-based memoization for derived media links.
//!
//! This crate provides the memoizing cache used to avoid recomputing
//! expensive derivations for identical inputs within a fixed time window.

#![warn(missing_docs)]

mod cache;

pub use cache::{CacheEntry, MemoCache, MemoCacheConfig, MemoCacheConfigBuilder};
