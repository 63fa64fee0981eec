use async_trait::async_trait;
use models::competitor::{Competitor, CompetitorTranslation, CreateCompetitor, UpdateCompetitor};

use crate::{ApiClient, ApiError};

#[async_trait]
pub trait CompetitorsApi: Send + Sync {
    async fn list(&self, project_id: &str) -> Result<Vec<Competitor>, ApiError>;
    async fn list_translations(
        &self,
        project_id: &str,
    ) -> Result<Vec<CompetitorTranslation>, ApiError>;
    async fn create(
        &self,
        project_id: &str,
        data: &CreateCompetitor,
    ) -> Result<Competitor, ApiError>;
    async fn update(
        &self,
        project_id: &str,
        competitor_id: i64,
        data: &UpdateCompetitor,
    ) -> Result<Competitor, ApiError>;
}

#[derive(Debug, Clone)]
pub struct CompetitorsClient {
    api: ApiClient,
}

impl CompetitorsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CompetitorsApi for CompetitorsClient {
    async fn list(&self, project_id: &str) -> Result<Vec<Competitor>, ApiError> {
        self.api
            .get_json(&format!("/projects/{project_id}/competitors"))
            .await
    }

    async fn list_translations(
        &self,
        project_id: &str,
    ) -> Result<Vec<CompetitorTranslation>, ApiError> {
        self.api
            .get_json(&format!("/projects/{project_id}/competitor-translations"))
            .await
    }

    async fn create(
        &self,
        project_id: &str,
        data: &CreateCompetitor,
    ) -> Result<Competitor, ApiError> {
        self.api
            .post_json(&format!("/projects/{project_id}/competitors"), data)
            .await
    }

    async fn update(
        &self,
        project_id: &str,
        competitor_id: i64,
        data: &UpdateCompetitor,
    ) -> Result<Competitor, ApiError> {
        self.api
            .patch_json(
                &format!("/projects/{project_id}/competitors/{competitor_id}"),
                data,
            )
            .await
    }
}
