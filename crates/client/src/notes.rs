use async_trait::async_trait;
use models::note::{CreateProjectNote, ProjectNote, UpdateProjectNote};

use crate::{ApiClient, ApiError};

#[async_trait]
pub trait ProjectNotesApi: Send + Sync {
    async fn list(&self, project_id: &str) -> Result<Vec<ProjectNote>, ApiError>;
    async fn create(
        &self,
        project_id: &str,
        data: &CreateProjectNote,
    ) -> Result<ProjectNote, ApiError>;
    async fn update(
        &self,
        project_id: &str,
        note_id: i64,
        data: &UpdateProjectNote,
    ) -> Result<ProjectNote, ApiError>;
    async fn delete(&self, project_id: &str, note_id: i64) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ProjectNotesClient {
    api: ApiClient,
}

impl ProjectNotesClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProjectNotesApi for ProjectNotesClient {
    async fn list(&self, project_id: &str) -> Result<Vec<ProjectNote>, ApiError> {
        self.api
            .get_json(&format!("/projects/{project_id}/notes"))
            .await
    }

    async fn create(
        &self,
        project_id: &str,
        data: &CreateProjectNote,
    ) -> Result<ProjectNote, ApiError> {
        self.api
            .post_json(&format!("/projects/{project_id}/notes"), data)
            .await
    }

    async fn update(
        &self,
        project_id: &str,
        note_id: i64,
        data: &UpdateProjectNote,
    ) -> Result<ProjectNote, ApiError> {
        self.api
            .patch_json(&format!("/projects/{project_id}/notes/{note_id}"), data)
            .await
    }

    async fn delete(&self, project_id: &str, note_id: i64) -> Result<(), ApiError> {
        self.api
            .delete(&format!("/projects/{project_id}/notes/{note_id}"))
            .await
    }
}
