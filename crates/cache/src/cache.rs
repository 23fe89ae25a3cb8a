use shelf_genre::models::ClassificationRecord;
use std::ops::Deref;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::instrument;

use crate::error::Result;
use crate::store::{CacheStore, Entries, MemoryStore};

struct State {
    entries: Entries,
    /// Whether anything changed since the last successful save.
    dirty: bool,
}

/// Title → classification cache, persisted through a [`CacheStore`].
///
/// Keys are normalized titles (trimmed, whitespace runs collapsed, lower-cased)
/// so trivial variants share one entry. Every read-modify-write happens inside
/// a single lock region; a poisoned lock is recovered rather than propagated.
pub struct GenreCache {
    store: Box<dyn CacheStore>,
    state: Mutex<State>,
}
impl GenreCache {
    /// Opens the cache, loading whatever the store holds. A missing or
    /// corrupt store starts an empty cache.
    #[instrument(skip_all)]
    pub fn open(store: impl CacheStore + 'static) -> Self {
        let entries = match store.load() {
            Ok(loaded) => {
                let entries: Entries = loaded.into_iter().map(|(key, record)| (normalize_key(&key), record)).collect();
                tracing::debug!(entries = entries.len(), "loaded genre cache");
                entries
            },
            Err(e) => {
                tracing::warn!(error = %e.deref(), "could not load genre cache, starting empty");
                Entries::new()
            },
        };
        Self { store: Box::new(store), state: Mutex::new(State { entries, dirty: false }) }
    }

    /// A cache that is never persisted beyond the process.
    pub fn in_memory() -> Self {
        Self::open(MemoryStore::default())
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, title: &str) -> Option<ClassificationRecord> {
        self.lock().entries.get(&normalize_key(title)).cloned()
    }

    pub fn set(&self, title: &str, record: ClassificationRecord) {
        let mut state = self.lock();
        state.entries.insert(normalize_key(title), record);
        state.dirty = true;
    }

    /// Inserts `record` only when the title has no entry yet, returning the
    /// record that ends up stored. The first writer wins.
    pub fn upsert(&self, title: &str, record: ClassificationRecord) -> ClassificationRecord {
        let mut state = self.lock();
        let key = normalize_key(title);
        if let Some(existing) = state.entries.get(&key) {
            return existing.clone();
        }
        state.entries.insert(key, record.clone());
        state.dirty = true;
        record
    }

    pub fn contains(&self, title: &str) -> bool {
        self.lock().entries.contains_key(&normalize_key(title))
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        if !state.entries.is_empty() {
            state.entries.clear();
            state.dirty = true;
        }
    }

    /// Persists the cache. Failures are logged and swallowed; the in-memory
    /// entries keep serving and the next save tries again.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            tracing::warn!(error = %e.deref(), "could not save genre cache");
        }
    }

    /// Persists the cache, skipping the write when nothing changed.
    #[instrument(skip(self))]
    pub fn try_save(&self) -> Result<()> {
        let mut state = self.lock();
        if !state.dirty {
            return Ok(());
        }
        self.store.store(&state.entries)?;
        state.dirty = false;
        tracing::debug!(entries = state.entries.len(), "saved genre cache");
        Ok(())
    }
}

/// Normalizes a title into a cache key.
pub fn normalize_key(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonFileStore;
    use rstest::rstest;
    use shelf_genre::models::{Confidence, Genre, Platform, Source};
    use std::sync::Arc;

    fn record(genre: Genre) -> ClassificationRecord {
        ClassificationRecord::new(genre, Confidence::High, Source::Platform(Platform::Munpia))
    }

    #[rstest]
    #[case("Solo Leveling", "solo leveling")]
    #[case("  나 혼자만   레벨업 ", "나 혼자만 레벨업")]
    #[case("A\u{3000}B", "a b")]
    fn test_normalize_key(#[case] title: &str, #[case] expected: &str) {
        assert_eq!(normalize_key(title), expected);
    }

    #[test]
    fn set_then_get_round_trips() {
        let cache = GenreCache::in_memory();
        let stored = record(Genre::Wuxia);
        cache.set("화산귀환", stored.clone());
        assert_eq!(cache.get("화산귀환"), Some(stored.clone()));
        assert_eq!(cache.get("  화산귀환 "), Some(stored));
        assert_eq!(cache.get("화산"), None);
        assert!(cache.contains("화산귀환"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn case_and_whitespace_variants_share_an_entry() {
        let cache = GenreCache::in_memory();
        cache.set("Solo  Leveling", record(Genre::ModernFantasy));
        cache.set("solo leveling", record(Genre::GameFantasy));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("SOLO LEVELING").map(|r| r.genre), Some(Genre::GameFantasy));
    }

    #[test]
    fn first_upsert_wins() {
        let cache = GenreCache::in_memory();
        let first = cache.upsert("title", record(Genre::Wuxia));
        let second = cache.upsert("TITLE", record(Genre::Fantasy));
        assert_eq!(first.genre, Genre::Wuxia);
        assert_eq!(second.genre, Genre::Wuxia);
        assert_eq!(cache.get("title").map(|r| r.genre), Some(Genre::Wuxia));
    }

    #[test]
    fn concurrent_upserts_agree() {
        let cache = Arc::new(GenreCache::in_memory());
        let genres = [Genre::Wuxia, Genre::Fantasy, Genre::ModernFantasy, Genre::Xianxia];
        let handles: Vec<_> = genres
            .into_iter()
            .map(|genre| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.upsert("shared", record(genre)).genre)
            })
            .collect();
        let winners: Vec<Genre> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(winners.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(cache.get("shared").map(|r| r.genre), Some(winners[0]));
    }

    #[test]
    fn save_is_skipped_when_clean() {
        let store = Arc::new(MemoryStore::default());
        let cache = GenreCache::open(Arc::clone(&store));
        cache.save();
        assert_eq!(store.writes(), 0);
        cache.set("title", record(Genre::Wuxia));
        cache.save();
        cache.save();
        assert_eq!(store.writes(), 1);
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn save_failures_are_swallowed() {
        let store = Arc::new(MemoryStore::default());
        store.set_failing(true);
        let cache = GenreCache::open(Arc::clone(&store));
        cache.set("title", record(Genre::Wuxia));
        cache.save();
        assert!(cache.try_save().is_err());
        // Still serving from memory, and the entry is retried on the next save.
        assert_eq!(cache.get("title").map(|r| r.genre), Some(Genre::Wuxia));
        store.set_failing(false);
        cache.save();
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn corrupt_file_starts_empty_and_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genre_cache.json");
        std::fs::write(&path, "not json at all").unwrap();
        let cache = GenreCache::open(JsonFileStore::new(&path));
        assert!(cache.is_empty());
        cache.set("검의 길", record(Genre::Xianxia));
        cache.save();

        let reopened = GenreCache::open(JsonFileStore::new(&path));
        assert_eq!(reopened.get("검의 길").map(|r| r.genre), Some(Genre::Xianxia));
    }

    #[test]
    fn clear_marks_dirty() {
        let store = Arc::new(MemoryStore::default());
        let cache = GenreCache::open(Arc::clone(&store));
        cache.set("title", record(Genre::Wuxia));
        cache.save();
        cache.clear();
        assert!(cache.is_empty());
        cache.save();
        assert_eq!(store.writes(), 2);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let cache = Arc::new(GenreCache::in_memory());
        cache.set("title", record(Genre::Wuxia));
        let poisoner = Arc::clone(&cache);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock();
            panic!("poison the cache lock");
        })
        .join();
        assert_eq!(cache.get("title").map(|r| r.genre), Some(Genre::Wuxia));
    }
}
