//! Bounded per-shop snapshot cache with staleness and invalidation.
//!
//! The cache is the single writer of snapshot state: fetches store into it,
//! mutating actions invalidate it, and readers only ever see a complete
//! snapshot or nothing. Entries age out by wall-clock staleness and are
//! evicted LRU when the shop count exceeds capacity.

use std::{
    num::NonZeroUsize,
    sync::Mutex,
    time::{Duration, Instant},
};

use lru::LruCache;

struct Entry<T> {
    value: T,
    fetched_at: Instant,
}

/// Bounded cache of per-shop snapshots.
///
/// Thread-safe; the lock is held only for map operations, never across an
/// await point.
pub struct SnapshotCache<T> {
    entries: Mutex<LruCache<String, Entry<T>>>,
    staleness: Duration,
}

impl<T> std::fmt::Debug for SnapshotCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotCache").field("staleness", &self.staleness).finish_non_exhaustive()
    }
}

impl<T: Clone> SnapshotCache<T> {
    /// Creates a cache holding at most `capacity` shops, serving entries
    /// younger than `staleness`.
    ///
    /// A zero capacity is clamped to one entry.
    #[must_use]
    pub fn new(capacity: usize, staleness: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("clamped to at least 1");
        Self { entries: Mutex::new(LruCache::new(capacity)), staleness }
    }

    /// Returns the cached snapshot for `shop_id` if it is still fresh.
    ///
    /// Stale entries are removed on access so a later [`store`](Self::store)
    /// is the only way they come back.
    #[must_use]
    pub fn get_fresh(&self, shop_id: &str) -> Option<T> {
        let mut entries = self.entries.lock().expect("snapshot cache lock poisoned");
        if let Some(entry) = entries.get(shop_id)
            && entry.fetched_at.elapsed() < self.staleness
        {
            return Some(entry.value.clone());
        }
        // Missing or stale; stale entries only come back via `store`.
        entries.pop(shop_id);
        None
    }

    /// Stores a freshly fetched snapshot.
    pub fn store(&self, shop_id: &str, value: T) {
        let mut entries = self.entries.lock().expect("snapshot cache lock poisoned");
        entries.put(shop_id.to_owned(), Entry { value, fetched_at: Instant::now() });
    }

    /// Drops the snapshot for `shop_id` regardless of age.
    ///
    /// Called after any mutating action so the next read is fresh.
    pub fn invalidate(&self, shop_id: &str) {
        let mut entries = self.entries.lock().expect("snapshot cache lock poisoned");
        entries.pop(shop_id);
    }
}
