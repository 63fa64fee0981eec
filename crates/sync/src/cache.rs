//! Explicit cache service keyed by resource + scoping parameters.
//!
//! Semantics:
//! - `fetch` serves fresh entries from memory and coalesces concurrent
//!   misses for the same key into a single underlying request.
//! - `invalidate` marks a key stale; the value stays readable via `get`
//!   until the next `fetch` replaces it.
//! - `set`/`cancel`/`remove` support the optimistic-update path: a direct
//!   write bumps the key's epoch, and a fetch that was already in flight
//!   when the epoch moved discards its result instead of clobbering the
//!   optimistic value.

use std::{collections::HashMap, future::Future, sync::Arc};

use dashmap::DashMap;
use models::{
    competitor::{Competitor, CompetitorTranslation},
    note::ProjectNote,
    project::{Project, ProjectListQuery, ProjectTranslation},
    service_area::ServiceArea,
};
use tokio::sync::Mutex;
use tracing::debug;

use crate::SyncError;

/// Identity of a cached read query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Projects(ProjectListQuery),
    Project(String),
    ProjectTranslation(String),
    Competitors(String),
    CompetitorTranslations(String),
    ServiceAreas(String),
    Notes(String),
}

/// Cached payload. Variants mirror [`QueryKey`]; `Arc` keeps clones cheap
/// and makes snapshot/rollback referential.
#[derive(Debug, Clone)]
pub enum QueryValue {
    Projects(Arc<Vec<Project>>),
    Project(Arc<Project>),
    ProjectTranslation(Arc<ProjectTranslation>),
    Competitors(Arc<Vec<Competitor>>),
    CompetitorTranslations(Arc<Vec<CompetitorTranslation>>),
    ServiceAreas(Arc<Vec<ServiceArea>>),
    Notes(Arc<Vec<ProjectNote>>),
}

impl QueryValue {
    pub fn projects(&self) -> Option<Arc<Vec<Project>>> {
        match self {
            Self::Projects(v) => Some(Arc::clone(v)),
            _ => None,
        }
    }

    pub fn project(&self) -> Option<Arc<Project>> {
        match self {
            Self::Project(v) => Some(Arc::clone(v)),
            _ => None,
        }
    }

    pub fn project_translation(&self) -> Option<Arc<ProjectTranslation>> {
        match self {
            Self::ProjectTranslation(v) => Some(Arc::clone(v)),
            _ => None,
        }
    }

    pub fn competitors(&self) -> Option<Arc<Vec<Competitor>>> {
        match self {
            Self::Competitors(v) => Some(Arc::clone(v)),
            _ => None,
        }
    }

    pub fn competitor_translations(&self) -> Option<Arc<Vec<CompetitorTranslation>>> {
        match self {
            Self::CompetitorTranslations(v) => Some(Arc::clone(v)),
            _ => None,
        }
    }

    pub fn service_areas(&self) -> Option<Arc<Vec<ServiceArea>>> {
        match self {
            Self::ServiceAreas(v) => Some(Arc::clone(v)),
            _ => None,
        }
    }

    pub fn notes(&self) -> Option<Arc<Vec<ProjectNote>>> {
        match self {
            Self::Notes(v) => Some(Arc::clone(v)),
            _ => None,
        }
    }
}

#[derive(Clone)]
struct CacheEntry {
    value: QueryValue,
    stale: bool,
}

/// Process-wide query cache. Injected into the stores, never ambient.
#[derive(Default)]
pub struct QueryCache {
    entries: DashMap<QueryKey, CacheEntry>,
    /// Write epoch per key. Bumped by `set`, `cancel`, `invalidate` and
    /// `remove`; a fetch only installs its result when the epoch it read
    /// before suspending is still current.
    ///
    /// Epochs are retained even after `remove`: pruning would reset the
    /// key to epoch 0 and a fetch that started before the removal could
    /// install its stale result. The map is bounded by the number of
    /// distinct keys ever queried, same as `inflight`.
    epochs: DashMap<QueryKey, u64>,
    inflight: Mutex<HashMap<QueryKey, Arc<Mutex<()>>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or run `fetch` to fill it.
    /// Concurrent callers for the same key share one underlying request:
    /// later callers wait on the in-flight one and reuse its result.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, fetch: F) -> Result<QueryValue, SyncError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<QueryValue, client::ApiError>>,
    {
        if let Some(value) = self.fresh(&key) {
            return Ok(value);
        }

        let _guard = self.acquire(&key).await;
        if let Some(value) = self.fresh(&key) {
            debug!(?key, "query settled by a shared in-flight fetch");
            return Ok(value);
        }

        let epoch = self.epoch(&key);
        debug!(?key, "cache miss, fetching");
        let value = fetch().await?;

        if self.epoch(&key) == epoch {
            self.entries.insert(
                key,
                CacheEntry {
                    value: value.clone(),
                    stale: false,
                },
            );
            Ok(value)
        } else {
            // A direct write or cancellation raced this fetch. Keep the
            // cache as the writer left it; the entry is reconciled by the
            // next fetch after invalidation.
            debug!(?key, "fetch result suppressed by a concurrent cache write");
            Ok(self
                .entries
                .get(&key)
                .map(|e| e.value.clone())
                .unwrap_or(value))
        }
    }

    /// Current cached value regardless of staleness.
    pub fn get(&self, key: &QueryKey) -> Option<QueryValue> {
        self.entries.get(key).map(|e| e.value.clone())
    }

    /// Direct write (optimistic path). Suppresses any in-flight fetch for
    /// the key.
    pub fn set(&self, key: QueryKey, value: QueryValue) {
        self.bump(&key);
        self.entries.insert(key, CacheEntry { value, stale: false });
    }

    /// Mark the key stale: `get` keeps serving the old value, the next
    /// `fetch` goes to the network.
    pub fn invalidate(&self, key: &QueryKey) {
        self.bump(key);
        if let Some(mut entry) = self.entries.get_mut(key) {
            entry.stale = true;
        }
        debug!(?key, "cache key invalidated");
    }

    /// Suppress any in-flight fetch for the key without touching the value.
    pub fn cancel(&self, key: &QueryKey) {
        self.bump(key);
    }

    /// Drop the entry entirely (rollback of an optimistic write into a
    /// previously empty cache).
    pub fn remove(&self, key: &QueryKey) {
        self.bump(key);
        self.entries.remove(key);
    }

    fn fresh(&self, key: &QueryKey) -> Option<QueryValue> {
        self.entries
            .get(key)
            .filter(|e| !e.stale)
            .map(|e| e.value.clone())
    }

    fn epoch(&self, key: &QueryKey) -> u64 {
        self.epochs.get(key).map(|e| *e).unwrap_or(0)
    }

    fn bump(&self, key: &QueryKey) {
        *self.epochs.entry(key.clone()).or_insert(0) += 1;
    }

    async fn acquire(&self, key: &QueryKey) -> tokio::sync::OwnedMutexGuard<()> {
        let lock = {
            let mut inflight = self.inflight.lock().await;
            Arc::clone(
                inflight
                    .entry(key.clone())
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        lock.lock_owned().await
    }
}
