use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::lru::LruStore;

/// Bounded memoization cache with a single-flight guarantee.
///
/// Concurrent callers for the same key share one in-flight computation
/// through a per-key [`OnceCell`]; completed values land in an LRU store and
/// are served from there until evicted. Neither lock is held across the user
/// computation, so unrelated keys never contend.
///
/// If the task driving a computation is cancelled, the next waiter takes over
/// initialization; nothing is left poisoned.
#[derive(Debug)]
pub struct FlightCache<K, V> {
    store: Mutex<LruStore<K, V>>,
    inflight: Mutex<HashMap<K, Arc<OnceCell<V>>>>,
}

impl<K, V> FlightCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a cache bounded to `capacity` completed entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: Mutex::new(LruStore::new(capacity)),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key`, marking it recently used.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.store.lock().await.get(key)
    }

    /// Number of completed entries currently held.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns the value for `key`, running `compute` at most once across all
    /// concurrent callers to produce it.
    ///
    /// Successful values are inserted into the LRU store. An `Err` outcome is
    /// returned to the caller and leaves the key uncached; waiters parked on
    /// a computation that failed run their own computation instead, so one
    /// caller's transient error does not stick to the key.
    pub async fn get_or_try_compute<F, Fut, E>(&self, key: &K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.store.lock().await.get(key) {
            return Ok(value);
        }

        let cell = {
            let mut inflight = self.inflight.lock().await;
            Arc::clone(inflight.entry(key.clone()).or_default())
        };

        let result = cell.get_or_try_init(compute).await.map(V::clone);

        if let Ok(value) = &result {
            self.store.lock().await.insert(key.clone(), value.clone());
        }
        self.inflight.lock().await.remove(key);

        result
    }
}
