use std::sync::Arc;

use client::projects::ProjectsApi;
use models::project::{
    Project, ProjectListQuery, ProjectTranslation, UpdateProject, UpdateProjectTranslation,
};

use crate::{
    SyncError,
    cache::{QueryCache, QueryKey, QueryValue},
};

/// Cached reads and invalidating writes for projects and their translation
/// records.
#[derive(Clone)]
pub struct ProjectStore {
    api: Arc<dyn ProjectsApi>,
    cache: Arc<QueryCache>,
}

impl ProjectStore {
    pub fn new(api: Arc<dyn ProjectsApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub async fn projects(&self, query: ProjectListQuery) -> Result<Arc<Vec<Project>>, SyncError> {
        let key = QueryKey::Projects(query.clone());
        let api = Arc::clone(&self.api);
        let value = self
            .cache
            .fetch(key.clone(), move || async move {
                Ok(QueryValue::Projects(Arc::new(api.list(&query).await?)))
            })
            .await?;
        value.projects().ok_or(SyncError::CacheShape { key })
    }

    pub async fn project(&self, project_id: &str) -> Result<Arc<Project>, SyncError> {
        let key = QueryKey::Project(project_id.to_string());
        let api = Arc::clone(&self.api);
        let id = project_id.to_string();
        let value = self
            .cache
            .fetch(key.clone(), move || async move {
                Ok(QueryValue::Project(Arc::new(api.get(&id).await?)))
            })
            .await?;
        value.project().ok_or(SyncError::CacheShape { key })
    }

    pub async fn translation(
        &self,
        project_id: &str,
    ) -> Result<Arc<ProjectTranslation>, SyncError> {
        let key = QueryKey::ProjectTranslation(project_id.to_string());
        let api = Arc::clone(&self.api);
        let id = project_id.to_string();
        let value = self
            .cache
            .fetch(key.clone(), move || async move {
                Ok(QueryValue::ProjectTranslation(Arc::new(
                    api.get_translation(&id).await?,
                )))
            })
            .await?;
        value.project_translation().ok_or(SyncError::CacheShape { key })
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        data: UpdateProject,
    ) -> Result<Project, SyncError> {
        let updated = self.api.update(project_id, &data).await?;
        self.cache
            .invalidate(&QueryKey::Project(project_id.to_string()));
        Ok(updated)
    }

    pub async fn update_translation(
        &self,
        project_id: &str,
        data: UpdateProjectTranslation,
    ) -> Result<ProjectTranslation, SyncError> {
        let updated = self.api.update_translation(project_id, &data).await?;
        self.cache
            .invalidate(&QueryKey::ProjectTranslation(project_id.to_string()));
        Ok(updated)
    }
}
