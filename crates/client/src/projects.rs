use async_trait::async_trait;
use models::project::{
    Project, ProjectListQuery, ProjectTranslation, UpdateProject, UpdateProjectTranslation,
};

use crate::{ApiClient, ApiError};

/// Seam between the sync layer and the network. Production uses
/// [`ProjectsClient`]; tests substitute fakes.
#[async_trait]
pub trait ProjectsApi: Send + Sync {
    async fn list(&self, query: &ProjectListQuery) -> Result<Vec<Project>, ApiError>;
    async fn get(&self, project_id: &str) -> Result<Project, ApiError>;
    async fn get_translation(&self, project_id: &str) -> Result<ProjectTranslation, ApiError>;
    async fn update(&self, project_id: &str, data: &UpdateProject) -> Result<Project, ApiError>;
    async fn update_translation(
        &self,
        project_id: &str,
        data: &UpdateProjectTranslation,
    ) -> Result<ProjectTranslation, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ProjectsClient {
    api: ApiClient,
}

impl ProjectsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProjectsApi for ProjectsClient {
    async fn list(&self, query: &ProjectListQuery) -> Result<Vec<Project>, ApiError> {
        self.api
            .get_json_query("/projects", &list_params(query))
            .await
    }

    async fn get(&self, project_id: &str) -> Result<Project, ApiError> {
        self.api.get_json(&format!("/projects/{project_id}")).await
    }

    async fn get_translation(&self, project_id: &str) -> Result<ProjectTranslation, ApiError> {
        self.api
            .get_json(&format!("/projects/{project_id}/translation"))
            .await
    }

    async fn update(&self, project_id: &str, data: &UpdateProject) -> Result<Project, ApiError> {
        self.api
            .patch_json(&format!("/projects/{project_id}"), data)
            .await
    }

    async fn update_translation(
        &self,
        project_id: &str,
        data: &UpdateProjectTranslation,
    ) -> Result<ProjectTranslation, ApiError> {
        self.api
            .patch_json(&format!("/projects/{project_id}/translation"), data)
            .await
    }
}

fn list_params(query: &ProjectListQuery) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(region) = &query.region {
        params.push(("region", region.clone()));
    }
    if let Some(status) = query.status {
        params.push(("status", status.to_string()));
    }
    if let Some(created_by) = &query.created_by {
        params.push(("created_by", created_by.clone()));
    }
    if let Some(sort) = query.sort {
        params.push(("sort", sort.field.to_string()));
        params.push(("order", if sort.descending { "desc" } else { "asc" }.to_string()));
    }
    params
}
