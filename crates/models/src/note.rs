use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectNote {
    #[serde(rename = "RecordID")]
    pub record_id: i64,
    #[serde(rename = "ProjectID")]
    pub project_id: String,
    pub notes: String,
    pub action_item: String,
    pub project_status: String,
    pub data_load_date: Option<DateTime<Utc>>,
    pub last_edit_date: Option<DateTime<Utc>>,
    #[serde(rename = "OrigNoteMSID")]
    pub orig_note_msid: String,
    #[serde(rename = "LastEditMSID")]
    pub last_edit_msid: String,
    pub project_category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProjectNote {
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_category: Option<String>,
    #[serde(rename = "OrigNoteMSID", skip_serializing_if = "Option::is_none")]
    pub orig_note_msid: Option<String>,
}

impl CreateProjectNote {
    pub fn from_text(notes: impl Into<String>) -> Self {
        Self {
            notes: notes.into(),
            action_item: None,
            project_status: None,
            project_category: None,
            orig_note_msid: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProjectNote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_category: Option<String>,
    #[serde(rename = "LastEditMSID", skip_serializing_if = "Option::is_none")]
    pub last_edit_msid: Option<String>,
}
