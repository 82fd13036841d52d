use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;

use crate::assessment::collector::AnswerCollector;
use crate::assessment::domain::{
    Classification, Project, ProjectId, RoomDraft, RoomId, ValidationError,
};
use crate::assessment::export::{self, ConversionRequest, ExportError};
use crate::assessment::geometry::derive_geometry;
use crate::assessment::lineitems::{generate, ItemScope};
use crate::assessment::repository::{ProjectRepository, ProjectSummary, RepositoryError};
use crate::knowledge::ReferenceDataset;

/// Service composing the reference dataset, classification engine,
/// line-item generator, and project store. The core functions stay pure;
/// this is where their outputs meet the two designated write points.
pub struct AssessmentService<R> {
    dataset: Arc<ReferenceDataset>,
    repository: Arc<R>,
}

impl<R> AssessmentService<R>
where
    R: ProjectRepository + 'static,
{
    pub fn new(dataset: Arc<ReferenceDataset>, repository: Arc<R>) -> Self {
        Self {
            dataset,
            repository,
        }
    }

    pub fn dataset(&self) -> &ReferenceDataset {
        &self.dataset
    }

    /// Fresh answer collector bound to this service's dataset.
    pub fn collector(&self) -> AnswerCollector<'_> {
        AnswerCollector::new(&self.dataset)
    }

    /// Create and persist an empty project. A name is generated from the
    /// assessment date when none is supplied.
    pub fn start_project(&self, name: Option<String>) -> Result<Project, ServiceError> {
        let now = Utc::now();
        let project = Project {
            id: ProjectId::generate(),
            name: name.unwrap_or_else(|| format!("Assessment {}", now.format("%Y-%m-%d"))),
            created_at: now,
            updated_at: now,
            damage_type: None,
            classification: None,
            rooms: Vec::new(),
            line_items: BTreeMap::new(),
            photos: Vec::new(),
            notes: String::new(),
        };
        self.repository.save(project.clone())?;
        tracing::info!(project = %project.id.0, "assessment started");
        Ok(project)
    }

    pub fn project(&self, id: &ProjectId) -> Result<Project, ServiceError> {
        let project = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(project)
    }

    pub fn list_projects(&self) -> Result<Vec<ProjectSummary>, ServiceError> {
        Ok(self.repository.list()?)
    }

    /// Record a completed classification on the project and replace its
    /// project-level estimate items with a freshly generated rough set.
    pub fn apply_classification(
        &self,
        project_id: &ProjectId,
        classification: Classification,
    ) -> Result<Project, ServiceError> {
        let mut project = self.project(project_id)?;

        let items = generate(&self.dataset, &classification, ItemScope::Estimate);
        project.clear_estimate_items();
        for item in items {
            project.upsert_line_item(item);
        }

        project.damage_type = Some(classification.damage_type());
        project.classification = Some(classification);
        project.updated_at = Utc::now();
        self.repository.save(project.clone())?;

        tracing::info!(
            project = %project.id.0,
            items = project.line_items.len(),
            "classification applied"
        );
        Ok(project)
    }

    /// Validate and persist a room, regenerating its scoped line items.
    ///
    /// Validation happens before any mutation, so a rejected draft leaves
    /// the stored project untouched. Regeneration replaces this room's
    /// prior items and leaves every other room's entries alone.
    pub fn save_room(
        &self,
        project_id: &ProjectId,
        draft: RoomDraft,
    ) -> Result<Project, ServiceError> {
        draft.validate()?;
        let mut project = self.project(project_id)?;

        let id = draft.id.clone().unwrap_or_else(RoomId::generate);
        let room = draft.into_room(id);
        let geometry = derive_geometry(&room);

        if let Some(classification) = project.classification.clone() {
            let items = generate(
                &self.dataset,
                &classification,
                ItemScope::Room {
                    room: &room,
                    geometry: &geometry,
                },
            );
            project.clear_room_items(&room.id);
            for item in items {
                project.upsert_line_item(item);
            }
        } else {
            tracing::warn!(
                project = %project.id.0,
                room = %room.id.0,
                "room saved before classification; no line items generated"
            );
        }

        project.upsert_room(room);
        project.updated_at = Utc::now();
        self.repository.save(project.clone())?;
        Ok(project)
    }

    /// Shape the project into the conversion collaborator's request payload.
    pub fn export_payload(&self, project_id: &ProjectId) -> Result<ConversionRequest, ServiceError> {
        let project = self.project(project_id)?;
        Ok(export::conversion_request(&project))
    }

    /// Render the project's line items as a spreadsheet-friendly CSV.
    pub fn export_csv(&self, project_id: &ProjectId) -> Result<String, ServiceError> {
        let project = self.project(project_id)?;
        Ok(export::write_csv(&project)?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
