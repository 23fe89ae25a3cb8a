use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use super::{CacheStore, Entries};
use crate::error::{ErrorKind, Result};

/// In-memory store for tests and throwaway runs.
///
/// Writes can be made to fail with [`set_failing`](Self::set_failing) to
/// exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Entries>,
    failing: AtomicBool,
    writes: AtomicUsize,
}
impl MemoryStore {
    pub fn with_entries(entries: Entries) -> Self {
        Self { entries: Mutex::new(entries), ..Default::default() }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Snapshot of what was last written.
    pub fn entries(&self) -> Entries {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
impl CacheStore for MemoryStore {
    fn load(&self) -> Result<Entries> {
        Ok(self.entries())
    }

    fn store(&self, entries: &Entries) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            exn::bail!(ErrorKind::Unavailable);
        }
        *self.entries.lock().unwrap_or_else(PoisonError::into_inner) = entries.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
