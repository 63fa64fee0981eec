use async_trait::async_trait;
use models::service_area::{CreateServiceArea, ServiceArea, UpdateServiceArea};

use crate::{ApiClient, ApiError};

#[async_trait]
pub trait ServiceAreasApi: Send + Sync {
    async fn list(&self, project_id: &str) -> Result<Vec<ServiceArea>, ApiError>;
    async fn create(
        &self,
        project_id: &str,
        data: &CreateServiceArea,
    ) -> Result<ServiceArea, ApiError>;
    async fn update(
        &self,
        project_id: &str,
        service_area_id: i64,
        data: &UpdateServiceArea,
    ) -> Result<ServiceArea, ApiError>;
    async fn delete(&self, project_id: &str, service_area_id: i64) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct ServiceAreasClient {
    api: ApiClient,
}

impl ServiceAreasClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ServiceAreasApi for ServiceAreasClient {
    async fn list(&self, project_id: &str) -> Result<Vec<ServiceArea>, ApiError> {
        self.api
            .get_json(&format!("/projects/{project_id}/service-areas"))
            .await
    }

    async fn create(
        &self,
        project_id: &str,
        data: &CreateServiceArea,
    ) -> Result<ServiceArea, ApiError> {
        self.api
            .post_json(&format!("/projects/{project_id}/service-areas"), data)
            .await
    }

    async fn update(
        &self,
        project_id: &str,
        service_area_id: i64,
        data: &UpdateServiceArea,
    ) -> Result<ServiceArea, ApiError> {
        self.api
            .patch_json(
                &format!("/projects/{project_id}/service-areas/{service_area_id}"),
                data,
            )
            .await
    }

    async fn delete(&self, project_id: &str, service_area_id: i64) -> Result<(), ApiError> {
        self.api
            .delete(&format!(
                "/projects/{project_id}/service-areas/{service_area_id}"
            ))
            .await
    }
}
