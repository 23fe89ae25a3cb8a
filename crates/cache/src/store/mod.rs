//! Persistence backends for the genre cache.

mod json;
mod memory;

use shelf_genre::models::ClassificationRecord;
use std::collections::BTreeMap;
use std::sync::Arc;

pub use self::json::JsonFileStore;
pub use self::memory::MemoryStore;
use crate::error::Result;

/// Normalized title → record. Ordered, so persisted output is stable.
pub type Entries = BTreeMap<String, ClassificationRecord>;

/// Where cache entries live between runs.
pub trait CacheStore: Send + Sync {
    /// Reads every persisted entry. A store that has never been written
    /// returns no entries rather than an error.
    fn load(&self) -> Result<Entries>;
    /// Replaces the persisted entries.
    fn store(&self, entries: &Entries) -> Result<()>;
}

impl<S: CacheStore + ?Sized> CacheStore for Arc<S> {
    fn load(&self) -> Result<Entries> {
        (**self).load()
    }

    fn store(&self, entries: &Entries) -> Result<()> {
        (**self).store(entries)
    }
}
