use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ts_rs::TS;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS, EnumString, Display,
    Default,
)]
pub enum CompetitorStatus {
    #[default]
    Draft,
    Submitted,
    Approved,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct Competitor {
    pub id: i64,
    pub project_id: String,
    pub product: String,
    pub status: CompetitorStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

/// Legacy extension fields per competitor-project pairing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "PascalCase")]
pub struct CompetitorTranslation {
    #[serde(rename = "RecordID")]
    pub record_id: i64,
    #[serde(rename = "ProjectID")]
    pub project_id: String,
    pub project_status: String,
    pub strenuus_product_code: String,
    pub payor: String,
    pub product: String,
    #[serde(rename = "EI")]
    pub ei: bool,
    #[serde(rename = "CS")]
    pub cs: bool,
    #[serde(rename = "MR")]
    pub mr: bool,
    pub data_load_date: Option<DateTime<Utc>>,
    #[serde(rename = "LastEditMSID")]
    pub last_edit_msid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateCompetitor {
    pub product: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CompetitorStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct UpdateCompetitor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CompetitorStatus>,
}
