//! Persistent cache of title classifications.
//!
//! The cache is an acceleration layer, not a source of truth: losing it only
//! means titles get classified again. Entries are never invalidated
//! automatically.
//!
//! # Architecture
//! - [`GenreCache`] holds every entry in memory behind one mutex and is safe
//!   to share between threads.
//! - [`CacheStore`] is the persistence seam: [`JsonFileStore`] for real runs,
//!   [`MemoryStore`] for tests.

mod cache;
pub mod error;
mod store;

pub use crate::cache::{GenreCache, normalize_key};
pub use crate::store::{CacheStore, Entries, JsonFileStore, MemoryStore};
