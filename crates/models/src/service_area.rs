use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceArea {
    #[serde(rename = "RecordID")]
    pub record_id: i64,
    #[serde(rename = "ProjectID")]
    pub project_id: String,
    pub region: String,
    pub state: String,
    pub county: String,
    pub report_include: bool,
    pub max_mileage: i32,
    pub project_status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
pub struct CreateServiceArea {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_include: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_mileage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_status: Option<String>,
}

impl CreateServiceArea {
    /// Build the optimistic placeholder row that stands in for this create
    /// until the server responds. `record_id` is a client-side temporary id,
    /// replaced by the canonical refetch.
    pub fn into_pending(self, project_id: &str, record_id: i64) -> ServiceArea {
        ServiceArea {
            record_id,
            project_id: project_id.to_string(),
            region: self.region.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            county: self.county.unwrap_or_default(),
            report_include: self.report_include.unwrap_or(false),
            max_mileage: self.max_mileage.unwrap_or_default(),
            project_status: self.project_status.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateServiceArea {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_include: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_mileage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_status: Option<String>,
}

impl From<UpdateServiceArea> for CreateServiceArea {
    fn from(patch: UpdateServiceArea) -> Self {
        Self {
            region: patch.region,
            state: patch.state,
            county: patch.county,
            report_include: patch.report_include,
            max_mileage: patch.max_mileage,
            project_status: patch.project_status,
        }
    }
}

impl UpdateServiceArea {
    /// Field-merge this patch into an existing row (the optimistic-update
    /// shape of a PATCH: unset fields keep their current value).
    pub fn apply_to(&self, area: &mut ServiceArea) {
        if let Some(region) = &self.region {
            area.region = region.clone();
        }
        if let Some(state) = &self.state {
            area.state = state.clone();
        }
        if let Some(county) = &self.county {
            area.county = county.clone();
        }
        if let Some(report_include) = self.report_include {
            area.report_include = report_include;
        }
        if let Some(max_mileage) = self.max_mileage {
            area.max_mileage = max_mileage;
        }
        if let Some(project_status) = &self.project_status {
            area.project_status = project_status.clone();
        }
    }
}
