//! Service-area store with optimistic mutations.
//!
//! Create and update write the pending change straight into the cache,
//! roll the snapshot back verbatim on failure, and in all outcomes
//! invalidate the key so a canonical refetch reconciles the placeholder
//! state with server truth.

use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use chrono::Utc;
use client::service_areas::ServiceAreasApi;
use models::service_area::{CreateServiceArea, ServiceArea, UpdateServiceArea};
use tracing::warn;

use crate::{
    SyncError,
    cache::{QueryCache, QueryKey, QueryValue},
};

static LAST_TEMP_ID: AtomicI64 = AtomicI64::new(0);

/// Placeholder id for optimistic rows, clock-derived like the upstream
/// system's record ids but bumped monotonically so two creates within the
/// same millisecond cannot collide.
fn temp_record_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST_TEMP_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(prev + 1);
        match LAST_TEMP_ID.compare_exchange(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(actual) => prev = actual,
        }
    }
}

#[derive(Clone)]
pub struct ServiceAreaStore {
    api: Arc<dyn ServiceAreasApi>,
    cache: Arc<QueryCache>,
}

impl ServiceAreaStore {
    pub fn new(api: Arc<dyn ServiceAreasApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub async fn service_areas(
        &self,
        project_id: &str,
    ) -> Result<Arc<Vec<ServiceArea>>, SyncError> {
        let key = QueryKey::ServiceAreas(project_id.to_string());
        let api = Arc::clone(&self.api);
        let id = project_id.to_string();
        let value = self
            .cache
            .fetch(key.clone(), move || async move {
                Ok(QueryValue::ServiceAreas(Arc::new(api.list(&id).await?)))
            })
            .await?;
        value.service_areas().ok_or(SyncError::CacheShape { key })
    }

    /// Optimistic create: the cached collection grows by one placeholder
    /// row before the request resolves.
    pub async fn create_service_area(
        &self,
        project_id: &str,
        data: CreateServiceArea,
    ) -> Result<ServiceArea, SyncError> {
        let key = QueryKey::ServiceAreas(project_id.to_string());
        self.cache.cancel(&key);
        let snapshot = self.cache.get(&key);

        let mut next: Vec<ServiceArea> = snapshot
            .as_ref()
            .and_then(QueryValue::service_areas)
            .map(|areas| (*areas).clone())
            .unwrap_or_default();
        next.push(data.clone().into_pending(project_id, temp_record_id()));
        self.cache
            .set(key.clone(), QueryValue::ServiceAreas(Arc::new(next)));

        let result = self.api.create(project_id, &data).await;
        if let Err(e) = &result {
            warn!(project_id, error = %e, "service area create failed, rolling back");
            self.rollback(&key, snapshot);
        }
        self.cache.invalidate(&key);
        Ok(result?)
    }

    /// Optimistic update: the matching cached row is field-merged before
    /// the request resolves.
    pub async fn update_service_area(
        &self,
        project_id: &str,
        service_area_id: i64,
        data: UpdateServiceArea,
    ) -> Result<ServiceArea, SyncError> {
        let key = QueryKey::ServiceAreas(project_id.to_string());
        self.cache.cancel(&key);
        let snapshot = self.cache.get(&key);

        if let Some(areas) = snapshot.as_ref().and_then(QueryValue::service_areas) {
            let next: Vec<ServiceArea> = areas
                .iter()
                .map(|area| {
                    if area.record_id == service_area_id {
                        let mut merged = area.clone();
                        data.apply_to(&mut merged);
                        merged
                    } else {
                        area.clone()
                    }
                })
                .collect();
            self.cache
                .set(key.clone(), QueryValue::ServiceAreas(Arc::new(next)));
        }

        let result = self.api.update(project_id, service_area_id, &data).await;
        if let Err(e) = &result {
            warn!(project_id, service_area_id, error = %e, "service area update failed, rolling back");
            self.rollback(&key, snapshot);
        }
        self.cache.invalidate(&key);
        Ok(result?)
    }

    pub async fn delete_service_area(
        &self,
        project_id: &str,
        service_area_id: i64,
    ) -> Result<(), SyncError> {
        self.api.delete(project_id, service_area_id).await?;
        self.cache
            .invalidate(&QueryKey::ServiceAreas(project_id.to_string()));
        Ok(())
    }

    fn rollback(&self, key: &QueryKey, snapshot: Option<QueryValue>) {
        match snapshot {
            Some(previous) => self.cache.set(key.clone(), previous),
            None => self.cache.remove(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::AtomicUsize,
        time::Duration,
    };

    use async_trait::async_trait;
    use client::ApiError;
    use tokio::sync::Mutex;

    use super::*;

    fn area(record_id: i64, county: &str, max_mileage: i32) -> ServiceArea {
        ServiceArea {
            record_id,
            project_id: "P-1".to_string(),
            region: "West".to_string(),
            state: "CA".to_string(),
            county: county.to_string(),
            report_include: true,
            max_mileage,
            project_status: "Active".to_string(),
        }
    }

    /// In-memory stand-in for the remote API. `create_delay` keeps the
    /// request pending long enough for tests to observe the optimistic
    /// cache state.
    struct FakeApi {
        rows: Mutex<Vec<ServiceArea>>,
        list_calls: AtomicUsize,
        fail_writes: bool,
        create_delay: Duration,
    }

    impl FakeApi {
        fn with_rows(rows: Vec<ServiceArea>) -> Self {
            Self {
                rows: Mutex::new(rows),
                list_calls: AtomicUsize::new(0),
                fail_writes: false,
                create_delay: Duration::ZERO,
            }
        }
    }

    #[async_trait]
    impl ServiceAreasApi for FakeApi {
        async fn list(&self, _project_id: &str) -> Result<Vec<ServiceArea>, ApiError> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows.lock().await.clone())
        }

        async fn create(
            &self,
            project_id: &str,
            data: &CreateServiceArea,
        ) -> Result<ServiceArea, ApiError> {
            tokio::time::sleep(self.create_delay).await;
            if self.fail_writes {
                return Err(ApiError::Http {
                    status: 500,
                    body: "write failed".to_string(),
                });
            }
            let mut rows = self.rows.lock().await;
            let created = data.clone().into_pending(project_id, 500 + rows.len() as i64);
            rows.push(created.clone());
            Ok(created)
        }

        async fn update(
            &self,
            _project_id: &str,
            service_area_id: i64,
            data: &UpdateServiceArea,
        ) -> Result<ServiceArea, ApiError> {
            if self.fail_writes {
                return Err(ApiError::Http {
                    status: 500,
                    body: "write failed".to_string(),
                });
            }
            let mut rows = self.rows.lock().await;
            let row = rows
                .iter_mut()
                .find(|r| r.record_id == service_area_id)
                .ok_or(ApiError::Http {
                    status: 404,
                    body: String::new(),
                })?;
            data.apply_to(row);
            Ok(row.clone())
        }

        async fn delete(&self, _project_id: &str, service_area_id: i64) -> Result<(), ApiError> {
            self.rows.lock().await.retain(|r| r.record_id != service_area_id);
            Ok(())
        }
    }

    fn store(api: FakeApi) -> (ServiceAreaStore, Arc<QueryCache>) {
        let cache = Arc::new(QueryCache::new());
        (
            ServiceAreaStore::new(Arc::new(api), Arc::clone(&cache)),
            cache,
        )
    }

    fn cached_ids(cache: &QueryCache) -> Vec<i64> {
        cache
            .get(&QueryKey::ServiceAreas("P-1".to_string()))
            .and_then(|v| v.service_areas())
            .map(|areas| areas.iter().map(|a| a.record_id).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn optimistic_create_appends_placeholder_then_converges() {
        let mut api = FakeApi::with_rows(vec![area(1, "Kern", 20)]);
        api.create_delay = Duration::from_millis(50);
        let (store, cache) = store(api);

        let before = store.service_areas("P-1").await.unwrap();
        assert_eq!(before.len(), 1);

        let pending = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .create_service_area(
                        "P-1",
                        CreateServiceArea {
                            county: Some("Fresno".to_string()),
                            ..Default::default()
                        },
                    )
                    .await
            })
        };

        // While the request is in flight the cached collection already has
        // the placeholder row with a temporary id.
        tokio::time::sleep(Duration::from_millis(15)).await;
        let optimistic = cached_ids(&cache);
        assert_eq!(optimistic.len(), 2);
        assert_eq!(optimistic[0], 1);
        assert!(optimistic[1] > 500, "placeholder id is clock-derived");

        let created = pending.await.unwrap().unwrap();
        assert_eq!(created.record_id, 501);

        // The settle invalidated the key; the next read converges to
        // server truth with the real id.
        let after = store.service_areas("P-1").await.unwrap();
        assert_eq!(
            after.iter().map(|a| a.record_id).collect::<Vec<_>>(),
            vec![1, 501]
        );
    }

    #[tokio::test]
    async fn failed_update_rolls_back_to_the_snapshot_verbatim() {
        let mut api = FakeApi::with_rows(vec![area(1, "Kern", 20), area(2, "Inyo", 35)]);
        api.fail_writes = true;
        let (store, cache) = store(api);

        let snapshot = store.service_areas("P-1").await.unwrap();

        let err = store
            .update_service_area(
                "P-1",
                2,
                UpdateServiceArea {
                    max_mileage: Some(80),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::Api(ApiError::Http { status: 500, .. })));

        let restored = cache
            .get(&QueryKey::ServiceAreas("P-1".to_string()))
            .and_then(|v| v.service_areas())
            .unwrap();
        assert!(
            Arc::ptr_eq(&snapshot, &restored),
            "rollback restores the exact snapshot"
        );
        assert_eq!(restored[1].max_mileage, 35);
    }

    #[tokio::test]
    async fn failed_create_into_empty_cache_removes_the_entry() {
        let mut api = FakeApi::with_rows(vec![]);
        api.fail_writes = true;
        let (store, cache) = store(api);

        // Nothing has been read yet, so the optimistic write lands in an
        // empty cache and the rollback must drop the entry again.
        let err = store
            .create_service_area("P-1", CreateServiceArea::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::Api(_)));
        assert!(cache.get(&QueryKey::ServiceAreas("P-1".to_string())).is_none());
    }

    #[tokio::test]
    async fn optimistic_update_merges_fields_in_place() {
        let api = FakeApi::with_rows(vec![area(1, "Kern", 20)]);
        let (store, _cache) = store(api);

        store.service_areas("P-1").await.unwrap();
        let updated = store
            .update_service_area(
                "P-1",
                1,
                UpdateServiceArea {
                    county: Some("Tulare".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.county, "Tulare");
        assert_eq!(updated.max_mileage, 20, "unset fields survive the merge");

        let after = store.service_areas("P-1").await.unwrap();
        assert_eq!(after[0].county, "Tulare");
    }

    #[tokio::test]
    async fn delete_invalidates_the_collection() {
        let api = FakeApi::with_rows(vec![area(1, "Kern", 20), area(2, "Inyo", 35)]);
        let (store, _cache) = store(api);

        assert_eq!(store.service_areas("P-1").await.unwrap().len(), 2);
        store.delete_service_area("P-1", 1).await.unwrap();
        let after = store.service_areas("P-1").await.unwrap();
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].record_id, 2);
    }

    #[test]
    fn temp_ids_never_collide_within_a_tick() {
        let a = temp_record_id();
        let b = temp_record_id();
        let c = temp_record_id();
        assert!(a < b && b < c);
    }
}
