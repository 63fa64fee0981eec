//! Client-side synchronization layer.
//!
//! Sits between the view models and the resource clients: every read goes
//! through a shared [`cache::QueryCache`] (request deduplication per cache
//! key, refetch after invalidation), every mutation invalidates the keys it
//! touched. Service areas additionally apply optimistic cache writes with
//! rollback, see [`service_area::ServiceAreaStore`].

use client::ApiError;
use thiserror::Error;

pub mod cache;
pub mod competitor;
pub mod note;
pub mod project;
pub mod service_area;

pub use cache::{QueryCache, QueryKey, QueryValue};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A cache entry held a value of the wrong variant for its key. This is
    /// a defect in the store wiring, not a runtime condition.
    #[error("cache entry for {key:?} has unexpected shape")]
    CacheShape { key: QueryKey },
}
