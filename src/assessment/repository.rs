use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::assessment::domain::{DamageType, Project, ProjectId};

/// Storage abstraction for the project aggregate. Implementations must
/// provide read-your-writes consistency within a session; the storage
/// format itself is theirs to choose.
pub trait ProjectRepository: Send + Sync {
    fn save(&self, project: Project) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError>;
    fn list(&self) -> Result<Vec<ProjectSummary>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("project not found")]
    NotFound,
    #[error("project store unavailable: {0}")]
    Unavailable(String),
}

/// Dashboard-level view of a stored project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub name: String,
    pub damage_type: Option<DamageType>,
    pub room_count: usize,
    pub item_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl ProjectSummary {
    fn of(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            damage_type: project.damage_type,
            room_count: project.rooms.len(),
            item_count: project.line_items.len(),
            updated_at: project.updated_at,
        }
    }
}

/// In-memory store backing the single-user, client-resident deployment and
/// the test suites.
#[derive(Default)]
pub struct MemoryProjectRepository {
    projects: Mutex<BTreeMap<ProjectId, Project>>,
}

impl MemoryProjectRepository {
    fn guard(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<ProjectId, Project>>, RepositoryError> {
        self.projects
            .lock()
            .map_err(|_| RepositoryError::Unavailable("project store poisoned".to_string()))
    }
}

impl ProjectRepository for MemoryProjectRepository {
    fn save(&self, project: Project) -> Result<(), RepositoryError> {
        self.guard()?.insert(project.id.clone(), project);
        Ok(())
    }

    fn fetch(&self, id: &ProjectId) -> Result<Option<Project>, RepositoryError> {
        Ok(self.guard()?.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<ProjectSummary>, RepositoryError> {
        Ok(self.guard()?.values().map(ProjectSummary::of).collect())
    }
}
