use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ts_rs::TS;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS, EnumString, Display,
    Default,
)]
pub enum ProjectStatus {
    Active,
    #[default]
    Pending,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct Project {
    pub id: i64,
    pub project_id: String,
    pub region: String,
    pub status: ProjectStatus,
    pub workflow_entity_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

/// Legacy extension record for a project, keyed by `ProjectID`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectTranslation {
    #[serde(rename = "RecordID")]
    pub record_id: i64,
    #[serde(rename = "ProjectID")]
    pub project_id: String,
    #[serde(rename = "BenchmarkFileID")]
    pub benchmark_file_id: String,
    pub project_type: String,
    pub project_desc: String,
    pub analyst: String,
    #[serde(rename = "PM")]
    pub pm: String,
    pub go_live_date: Option<DateTime<Utc>>,
    pub max_mileage: i32,
    pub status: String,
    pub new_market: String,
    pub prov_ref: String,
    pub data_load_date: Option<DateTime<Utc>>,
    pub last_edit_date: Option<DateTime<Utc>>,
    #[serde(rename = "LastEditMSID")]
    pub last_edit_msid: String,
    #[serde(rename = "NDB_LOB")]
    pub ndb_lob: String,
    pub refresh_ind: i32,
}

/// Partial update for the primary project record. Unset fields are left
/// untouched by the server and omitted from the request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

/// Partial update for the translation record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProjectTranslation {
    #[serde(rename = "BenchmarkFileID", skip_serializing_if = "Option::is_none")]
    pub benchmark_file_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyst: Option<String>,
    #[serde(rename = "PM", skip_serializing_if = "Option::is_none")]
    pub pm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_live_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_mileage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prov_ref: Option<String>,
}

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProjectSortField {
    ProjectId,
    Region,
    Status,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
pub struct ProjectSort {
    pub field: ProjectSortField,
    pub descending: bool,
}

/// Filter and sort state of the project list. The whole query forms part
/// of the projects cache key, so changing any field triggers a fresh fetch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
pub struct ProjectListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<ProjectSort>,
}

impl ProjectListQuery {
    pub fn sorted_by(mut self, field: ProjectSortField, descending: bool) -> Self {
        self.sort = Some(ProjectSort { field, descending });
        self
    }
}
