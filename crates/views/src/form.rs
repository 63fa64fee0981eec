//! Form view models for the edit dialogs.
//!
//! A form owns its draft payloads and a small state machine:
//! `Idle -> Editing -> Submitting -> Idle` on success, back to `Editing`
//! (with field errors recorded) when validation rejects the draft.

use models::{
    project::{Project, ProjectTranslation, UpdateProject, UpdateProjectTranslation},
    service_area::{CreateServiceArea, ServiceArea, UpdateServiceArea},
};
use sync::{SyncError, project::ProjectStore, service_area::ServiceAreaStore};
use tracing::debug;

use crate::validation::{FieldErrors, validate_project, validate_translation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Editing,
    Submitting,
    EditingWithErrors,
}

/// Edit dialog for a project and its translation record. The two drafts
/// submit as separate PATCH requests; validation gates both before either
/// request is sent.
#[derive(Debug, Clone)]
pub struct ProjectEditForm {
    project_id: String,
    state: FormState,
    pub project: UpdateProject,
    pub translation: UpdateProjectTranslation,
    project_errors: FieldErrors,
    translation_errors: FieldErrors,
}

impl ProjectEditForm {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            state: FormState::Idle,
            project: UpdateProject::default(),
            translation: UpdateProjectTranslation::default(),
            project_errors: FieldErrors::new(),
            translation_errors: FieldErrors::new(),
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn project_errors(&self) -> &FieldErrors {
        &self.project_errors
    }

    pub fn translation_errors(&self) -> &FieldErrors {
        &self.translation_errors
    }

    /// Populate the drafts from the currently loaded records and enter
    /// editing. The translation may not have loaded; its draft stays empty
    /// then and only the primary record is editable.
    pub fn open(&mut self, project: &Project, translation: Option<&ProjectTranslation>) {
        self.project = UpdateProject {
            region: Some(project.region.clone()),
            status: Some(project.status),
        };
        self.translation = match translation {
            Some(t) => UpdateProjectTranslation {
                benchmark_file_id: Some(t.benchmark_file_id.clone()),
                project_type: Some(t.project_type.clone()),
                project_desc: Some(t.project_desc.clone()),
                analyst: Some(t.analyst.clone()),
                pm: Some(t.pm.clone()),
                go_live_date: t.go_live_date,
                max_mileage: Some(t.max_mileage),
                status: Some(t.status.clone()),
                new_market: Some(t.new_market.clone()),
                prov_ref: Some(t.prov_ref.clone()),
            },
            None => UpdateProjectTranslation::default(),
        };
        self.project_errors.clear();
        self.translation_errors.clear();
        self.state = FormState::Editing;
    }

    pub fn cancel(&mut self) {
        self.state = FormState::Idle;
        self.project_errors.clear();
        self.translation_errors.clear();
    }

    /// Validate and submit both drafts. Returns `Ok(true)` when the records
    /// were saved, `Ok(false)` when nothing was sent (form not open, or
    /// validation rejected the drafts). Transport and server errors bubble
    /// up and leave the form in `Editing` so the user can retry.
    pub async fn submit(&mut self, store: &ProjectStore) -> Result<bool, SyncError> {
        if !matches!(self.state, FormState::Editing | FormState::EditingWithErrors) {
            return Ok(false);
        }

        self.project_errors = validate_project(&self.project);
        self.translation_errors = validate_translation(&self.translation);
        if !self.project_errors.is_empty() || !self.translation_errors.is_empty() {
            debug!(
                project_id = %self.project_id,
                errors = self.project_errors.len() + self.translation_errors.len(),
                "edit form rejected by validation"
            );
            self.state = FormState::EditingWithErrors;
            return Ok(false);
        }

        self.state = FormState::Submitting;
        let saved = async {
            store
                .update_project(&self.project_id, self.project.clone())
                .await?;
            store
                .update_translation(&self.project_id, self.translation.clone())
                .await
        }
        .await;

        match saved {
            Ok(_) => {
                self.state = FormState::Idle;
                Ok(true)
            }
            Err(e) => {
                self.state = FormState::Editing;
                Err(e)
            }
        }
    }
}

/// Create/edit dialog for a single service area row. `record_id` decides
/// whether submit creates or patches.
#[derive(Debug, Clone)]
pub struct ServiceAreaForm {
    project_id: String,
    record_id: Option<i64>,
    state: FormState,
    pub draft: UpdateServiceArea,
}

impl ServiceAreaForm {
    pub fn create(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            record_id: None,
            state: FormState::Editing,
            draft: UpdateServiceArea::default(),
        }
    }

    pub fn edit(project_id: impl Into<String>, area: &ServiceArea) -> Self {
        Self {
            project_id: project_id.into(),
            record_id: Some(area.record_id),
            state: FormState::Editing,
            draft: UpdateServiceArea {
                region: Some(area.region.clone()),
                state: Some(area.state.clone()),
                county: Some(area.county.clone()),
                report_include: Some(area.report_include),
                max_mileage: Some(area.max_mileage),
                project_status: Some(area.project_status.clone()),
            },
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_create(&self) -> bool {
        self.record_id.is_none()
    }

    pub fn cancel(&mut self) {
        self.state = FormState::Idle;
    }

    pub async fn submit(&mut self, store: &ServiceAreaStore) -> Result<bool, SyncError> {
        if self.state != FormState::Editing {
            return Ok(false);
        }
        self.state = FormState::Submitting;

        let saved = match self.record_id {
            None => {
                store
                    .create_service_area(
                        &self.project_id,
                        CreateServiceArea::from(self.draft.clone()),
                    )
                    .await
            }
            Some(record_id) => {
                store
                    .update_service_area(&self.project_id, record_id, self.draft.clone())
                    .await
            }
        };

        match saved {
            Ok(_) => {
                self.state = FormState::Idle;
                Ok(true)
            }
            Err(e) => {
                self.state = FormState::Editing;
                Err(e)
            }
        }
    }
}
