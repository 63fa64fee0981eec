use std::sync::Arc;

use client::notes::ProjectNotesApi;
use models::note::{CreateProjectNote, ProjectNote, UpdateProjectNote};

use crate::{
    SyncError,
    cache::{QueryCache, QueryKey, QueryValue},
};

#[derive(Clone)]
pub struct NoteStore {
    api: Arc<dyn ProjectNotesApi>,
    cache: Arc<QueryCache>,
}

impl NoteStore {
    pub fn new(api: Arc<dyn ProjectNotesApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    pub async fn notes(&self, project_id: &str) -> Result<Arc<Vec<ProjectNote>>, SyncError> {
        let key = QueryKey::Notes(project_id.to_string());
        let api = Arc::clone(&self.api);
        let id = project_id.to_string();
        let value = self
            .cache
            .fetch(key.clone(), move || async move {
                Ok(QueryValue::Notes(Arc::new(api.list(&id).await?)))
            })
            .await?;
        value.notes().ok_or(SyncError::CacheShape { key })
    }

    pub async fn create_note(
        &self,
        project_id: &str,
        data: CreateProjectNote,
    ) -> Result<ProjectNote, SyncError> {
        let created = self.api.create(project_id, &data).await?;
        self.cache
            .invalidate(&QueryKey::Notes(project_id.to_string()));
        Ok(created)
    }

    pub async fn update_note(
        &self,
        project_id: &str,
        note_id: i64,
        data: UpdateProjectNote,
    ) -> Result<ProjectNote, SyncError> {
        let updated = self.api.update(project_id, note_id, &data).await?;
        self.cache
            .invalidate(&QueryKey::Notes(project_id.to_string()));
        Ok(updated)
    }

    pub async fn delete_note(&self, project_id: &str, note_id: i64) -> Result<(), SyncError> {
        self.api.delete(project_id, note_id).await?;
        self.cache
            .invalidate(&QueryKey::Notes(project_id.to_string()));
        Ok(())
    }
}
