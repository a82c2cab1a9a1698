//! # Derived-Data Cache
//!
//! Process-lifetime cache of precomputed reports and hot reads. Entries are
//! typed snapshots keyed by string; readers get a clone of the stored value,
//! so a cached report serializes identically on every hit. There is no TTL:
//! an entry lives until an invalidation removes it, and the next read
//! repopulates it.
//!
//! The cache is constructed once at startup and injected through the app
//! state. Read paths populate entries; removal goes through the
//! invalidation coordinator (`InvalidationRequest`).

pub mod invalidation;
pub mod keys;

pub use invalidation::InvalidationRequest;

use std::any::Any;
use std::fmt;

use dashmap::DashMap;

type Entry = Box<dyn Any + Send + Sync>;

/// String-keyed store of typed snapshots
#[derive(Default)]
pub struct ResultCache {
    entries: DashMap<String, Entry>,
}

impl fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Typed read. A missing key or a stored value of a different type is a
    /// miss; the caller recomputes and overwrites.
    pub fn get<T>(&self, key: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let entry = self.entries.get(key)?;
        let hit = entry.value().downcast_ref::<T>().cloned();
        if hit.is_some() {
            tracing::debug!(key = %key, "cache hit");
        }
        hit
    }

    /// Store a typed snapshot, replacing any previous entry under the key
    pub fn set<T>(&self, key: impl Into<String>, value: T)
    where
        T: Send + Sync + 'static,
    {
        let key = key.into();
        tracing::debug!(key = %key, "cache store");
        self.entries.insert(key, Box::new(value));
    }

    /// Remove the listed keys, returning how many were actually present
    pub fn delete<I, K>(&self, cache_keys: I) -> usize
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        cache_keys
            .into_iter()
            .filter(|key| self.entries.remove(key.as_ref()).is_some())
            .count()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
