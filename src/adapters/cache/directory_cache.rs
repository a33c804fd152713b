//! Whole-collection read-through cache for the employee directory.
//!
//! Holds at most one [`DirectorySnapshot`]. Concurrent misses collapse into
//! a single upstream fetch, and an invalidation that races an in-flight
//! fetch prevents the fetched snapshot from being installed.

use std::sync::Arc;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::errors::StoreResult;
use crate::domain::models::DirectorySnapshot;
use crate::domain::ports::EmployeeStore;

/// The one in-flight upstream fetch, cloneable so every waiter of a
/// cache-empty period awaits the same result.
type InflightFetch = Shared<BoxFuture<'static, StoreResult<DirectorySnapshot>>>;

/// State guarded by a single mutex: a read sees the snapshot entirely
/// before or entirely after an invalidation, never a torn view.
struct CacheState {
    snapshot: Option<DirectorySnapshot>,
    inflight: Option<InflightFetch>,
    generation: u64,
}

/// Read-through cache over the full employee collection.
///
/// The query surface is always "the whole directory", so this is a single
/// guarded optional snapshot with whole-collection invalidation, not a
/// per-key cache. Lifecycle: constructed empty, populated on the first
/// `get_all` after start or invalidation, cleared by `invalidate`.
pub struct DirectoryCache<S: EmployeeStore + ?Sized> {
    upstream: Arc<S>,
    state: Mutex<CacheState>,
}

impl<S: EmployeeStore + ?Sized + 'static> DirectoryCache<S> {
    /// Create an empty cache over the given upstream store.
    pub fn new(upstream: Arc<S>) -> Self {
        Self {
            upstream,
            state: Mutex::new(CacheState {
                snapshot: None,
                inflight: None,
                generation: 0,
            }),
        }
    }

    /// Return the current snapshot, fetching it from upstream on a miss.
    ///
    /// Misses are single-flight: concurrent callers during a cache-empty
    /// period share one upstream `fetch_all` and observe the same snapshot
    /// or the same failure. Empty collections are cached like any other.
    /// On failure the cache stays empty and the classified error is
    /// surfaced unchanged.
    pub async fn get_all(&self) -> StoreResult<DirectorySnapshot> {
        let (fetch, started_generation) = {
            let mut state = self.state.lock().await;
            if let Some(snapshot) = &state.snapshot {
                return Ok(snapshot.clone());
            }

            let fetch = match &state.inflight {
                Some(inflight) => inflight.clone(),
                None => {
                    debug!("directory cache miss, fetching from upstream");
                    let upstream = Arc::clone(&self.upstream);
                    let fetch = async move {
                        upstream.fetch_all().await.map(DirectorySnapshot::new)
                    }
                    .boxed()
                    .shared();
                    state.inflight = Some(fetch.clone());
                    fetch
                }
            };
            (fetch, state.generation)
        };

        let result = fetch.await;

        let mut state = self.state.lock().await;
        if state.generation == started_generation {
            state.inflight = None;
            if let Ok(snapshot) = &result {
                state.snapshot = Some(snapshot.clone());
                info!(records = snapshot.len(), "directory cache refreshed");
            }
        }
        // On a generation mismatch the fetch raced an invalidation: the
        // result still answers this call, but it is never installed.
        result
    }

    /// Unconditionally discard the current snapshot. Idempotent, never
    /// fails. Any in-flight fetch is orphaned: its waiters receive its
    /// result, but it will not become the next snapshot.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        state.generation = state.generation.wrapping_add(1);
        state.snapshot = None;
        state.inflight = None;
        debug!("directory cache invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    use crate::domain::errors::{StoreError, StoreResult};
    use crate::domain::models::{Employee, NewEmployee};

    struct CountingStore {
        fetch_all_calls: AtomicUsize,
    }

    impl CountingStore {
        fn new() -> Self {
            Self {
                fetch_all_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl EmployeeStore for CountingStore {
        async fn fetch_all(&self) -> StoreResult<Vec<Employee>> {
            self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn fetch_by_id(&self, id: Uuid) -> StoreResult<Employee> {
            Err(StoreError::NotFound(id))
        }

        async fn create(&self, _payload: &NewEmployee) -> StoreResult<Employee> {
            unimplemented!("not exercised")
        }

        async fn delete_by_name(&self, _name: &str) -> StoreResult<bool> {
            unimplemented!("not exercised")
        }
    }

    #[tokio::test]
    async fn test_empty_collection_is_cached() {
        let store = Arc::new(CountingStore::new());
        let cache = DirectoryCache::new(Arc::clone(&store));

        let first = cache.get_all().await.unwrap();
        let second = cache.get_all().await.unwrap();

        assert!(first.is_empty());
        assert_eq!(first, second);
        assert_eq!(store.fetch_all_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_is_idempotent() {
        let store = Arc::new(CountingStore::new());
        let cache = DirectoryCache::new(Arc::clone(&store));

        cache.get_all().await.unwrap();
        cache.invalidate().await;
        cache.invalidate().await;

        cache.get_all().await.unwrap();
        assert_eq!(store.fetch_all_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_on_cold_cache_is_a_noop() {
        let store = Arc::new(CountingStore::new());
        let cache = DirectoryCache::new(Arc::clone(&store));

        cache.invalidate().await;
        assert_eq!(store.fetch_all_calls.load(Ordering::SeqCst), 0);
    }
}
