use std::sync::Arc;

use client::competitors::CompetitorsApi;
use models::competitor::{Competitor, CompetitorTranslation, CreateCompetitor, UpdateCompetitor};

use crate::{
    SyncError,
    cache::{QueryCache, QueryKey, QueryValue},
};

#[derive(Clone)]
pub struct CompetitorStore {
    api: Arc<dyn CompetitorsApi>,
    cache: Arc<QueryCache>,
}

impl CompetitorStore {
    pub fn new(api: Arc<dyn CompetitorsApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub async fn competitors(&self, project_id: &str) -> Result<Arc<Vec<Competitor>>, SyncError> {
        let key = QueryKey::Competitors(project_id.to_string());
        let api = Arc::clone(&self.api);
        let id = project_id.to_string();
        let value = self
            .cache
            .fetch(key.clone(), move || async move {
                Ok(QueryValue::Competitors(Arc::new(api.list(&id).await?)))
            })
            .await?;
        value.competitors().ok_or(SyncError::CacheShape { key })
    }

    pub async fn translations(
        &self,
        project_id: &str,
    ) -> Result<Arc<Vec<CompetitorTranslation>>, SyncError> {
        let key = QueryKey::CompetitorTranslations(project_id.to_string());
        let api = Arc::clone(&self.api);
        let id = project_id.to_string();
        let value = self
            .cache
            .fetch(key.clone(), move || async move {
                Ok(QueryValue::CompetitorTranslations(Arc::new(
                    api.list_translations(&id).await?,
                )))
            })
            .await?;
        value
            .competitor_translations()
            .ok_or(SyncError::CacheShape { key })
    }

    pub async fn create_competitor(
        &self,
        project_id: &str,
        data: CreateCompetitor,
    ) -> Result<Competitor, SyncError> {
        let created = self.api.create(project_id, &data).await?;
        self.cache
            .invalidate(&QueryKey::Competitors(project_id.to_string()));
        Ok(created)
    }

    pub async fn update_competitor(
        &self,
        project_id: &str,
        competitor_id: i64,
        data: UpdateCompetitor,
    ) -> Result<Competitor, SyncError> {
        let updated = self.api.update(project_id, competitor_id, &data).await?;
        self.cache
            .invalidate(&QueryKey::Competitors(project_id.to_string()));
        Ok(updated)
    }
}
