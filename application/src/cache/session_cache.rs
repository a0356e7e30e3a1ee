//! Time-to-live memoization for credentials and clients.
//!
//! [`SessionCache`] is an explicitly constructed object: the owner of the
//! process (the client factory) holds it and shares it behind an `Arc`.
//! Expiry is purely time-based; there is no size bound because keys are
//! low-cardinality (one credentials slot, a handful of model/temperature
//! pairs).
//!
//! Ages are measured with [`tokio::time::Instant`] so tests can drive the
//! clock with `tokio::time::pause` / `advance`.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tokio::time::Instant;

struct CacheEntry<V> {
    value: V,
    ttl: Duration,
    created_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_fresh(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) < self.ttl
    }
}

/// Process-wide cache keyed by operation arguments, each entry with its own ttl.
///
/// Concurrent callers racing on a missing key may each run the factory;
/// the last completed value wins. Entries are inserted whole under the
/// write lock and the lock is never held across a factory call, so readers
/// never see a partially built value.
pub struct SessionCache<K, V> {
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> SessionCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get a value that is still within its ttl.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = Instant::now();
        self.read()
            .get(key)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| entry.value.clone())
    }

    /// Store a value with a fresh creation instant, replacing any previous entry.
    pub fn insert(&self, key: K, value: V, ttl: Duration) {
        let entry = CacheEntry {
            value,
            ttl,
            created_at: Instant::now(),
        };
        self.write().insert(key, entry);
    }

    /// Return the cached value for `key`, or run `factory` and cache its result.
    ///
    /// A failing factory caches nothing and its error is returned as-is.
    pub async fn get_or_compute<F, Fut, E>(
        &self,
        key: &K,
        ttl: Duration,
        factory: F,
    ) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }

        let value = factory().await?;
        self.insert(key.clone(), value.clone(), ttl);
        Ok(value)
    }

    /// Remove an entry regardless of its remaining ttl.
    ///
    /// Returns `true` if an entry (fresh or stale) was removed.
    pub fn invalidate(&self, key: &K) -> bool {
        self.write().remove(key).is_some()
    }

    /// Number of stored entries, including stale ones not yet replaced.
    #[cfg(test)]
    fn len(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, CacheEntry<V>>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, CacheEntry<V>>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> Default for SessionCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TTL: Duration = Duration::from_secs(45 * 60);

    fn counting_factory(
        calls: &AtomicUsize,
    ) -> impl FnOnce() -> std::future::Ready<Result<usize, Infallible>> + '_ {
        move || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            std::future::ready(Ok(n))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_hit_within_ttl_does_not_recompute() {
        let cache: SessionCache<&str, usize> = SessionCache::new();
        let calls = AtomicUsize::new(0);

        let first = cache
            .get_or_compute(&"credentials", TTL, counting_factory(&calls))
            .await
            .unwrap();
        tokio::time::advance(Duration::from_secs(10 * 60)).await;
        let second = cache
            .get_or_compute(&"credentials", TTL, counting_factory(&calls))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_recomputes_once() {
        let cache: SessionCache<&str, usize> = SessionCache::new();
        let calls = AtomicUsize::new(0);

        cache
            .get_or_compute(&"credentials", TTL, counting_factory(&calls))
            .await
            .unwrap();
        tokio::time::advance(TTL).await;

        assert!(cache.get(&"credentials").is_none());
        let recomputed = cache
            .get_or_compute(&"credentials", TTL, counting_factory(&calls))
            .await
            .unwrap();
        let cached = cache
            .get_or_compute(&"credentials", TTL, counting_factory(&calls))
            .await
            .unwrap();

        assert_eq!(recomputed, 2);
        assert_eq!(cached, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalidate_forces_recompute() {
        let cache: SessionCache<&str, usize> = SessionCache::new();
        let calls = AtomicUsize::new(0);

        cache
            .get_or_compute(&"credentials", TTL, counting_factory(&calls))
            .await
            .unwrap();
        assert!(cache.invalidate(&"credentials"));
        assert!(!cache.invalidate(&"credentials"));

        let value = cache
            .get_or_compute(&"credentials", TTL, counting_factory(&calls))
            .await
            .unwrap();
        assert_eq!(value, 2);
    }

    #[tokio::test]
    async fn test_failed_factory_caches_nothing() {
        let cache: SessionCache<&str, usize> = SessionCache::new();

        let result: Result<usize, &str> = cache
            .get_or_compute(&"client", TTL, || async { Err("boom") })
            .await;
        assert_eq!(result, Err("boom"));
        assert_eq!(cache.len(), 0);

        let result: Result<usize, &str> = cache
            .get_or_compute(&"client", TTL, || async { Ok(7) })
            .await;
        assert_eq!(result, Ok(7));
        assert_eq!(cache.get(&"client"), Some(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_keep_independent_ttls() {
        let cache: SessionCache<&str, usize> = SessionCache::new();
        cache.insert("short", 1, Duration::from_secs(60));
        cache.insert("long", 2, TTL);

        tokio::time::advance(Duration::from_secs(120)).await;

        assert_eq!(cache.get(&"short"), None);
        assert_eq!(cache.get(&"long"), Some(2));
        // The stale entry stays stored until it is replaced
        assert_eq!(cache.len(), 2);
        cache.insert("short", 3, Duration::from_secs(60));
        assert_eq!(cache.get(&"short"), Some(3));
    }

    #[tokio::test]
    async fn test_zero_ttl_never_hits() {
        let cache: SessionCache<&str, usize> = SessionCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            cache
                .get_or_compute(&"k", Duration::ZERO, counting_factory(&calls))
                .await
                .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_readers_see_whole_values() {
        let cache: Arc<SessionCache<u8, Arc<Vec<u32>>>> = Arc::new(SessionCache::new());
        let mut handles = Vec::new();

        for _ in 0..16 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move {
                let value = cache
                    .get_or_compute(&1, TTL, || async {
                        tokio::task::yield_now().await;
                        Ok::<_, Infallible>(Arc::new((0..64).collect::<Vec<u32>>()))
                    })
                    .await
                    .unwrap();
                assert_eq!(value.len(), 64);
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(cache.len(), 1);
    }
}
