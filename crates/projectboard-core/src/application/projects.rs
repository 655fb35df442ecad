//! Project use cases
//!
//! One struct per operation, each orchestrating a single repository call
//! against a shared store. Use cases never translate errors; mapping them to
//! HTTP statuses is the controllers' concern.

use std::sync::Arc;

use crate::domain::projects::{Project, ProjectDraft, ProjectRepository};
use crate::error::Result;

/// Create a project from a draft and store it
pub struct CreateProjectUseCase {
    repository: Arc<dyn ProjectRepository>,
}

impl CreateProjectUseCase {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, draft: ProjectDraft) -> Result<Project> {
        let project = Project::new(draft);
        self.repository.insert(&project).await?;
        Ok(project)
    }
}

/// List every stored project
pub struct ListProjectsUseCase {
    repository: Arc<dyn ProjectRepository>,
}

impl ListProjectsUseCase {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Project>> {
        self.repository.get_all().await
    }
}

/// Look up a single project by id
pub struct FindProjectUseCase {
    repository: Arc<dyn ProjectRepository>,
}

impl FindProjectUseCase {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> Result<Project> {
        self.repository.get_by_id(id).await
    }
}

/// Apply a draft to a stored project, or create one when the id is unknown
pub struct UpdateProjectUseCase {
    repository: Arc<dyn ProjectRepository>,
}

impl UpdateProjectUseCase {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str, draft: ProjectDraft) -> Result<Project> {
        self.repository.update(id, draft).await
    }
}

/// Remove a project by id
pub struct DeleteProjectUseCase {
    repository: Arc<dyn ProjectRepository>,
}

impl DeleteProjectUseCase {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> Result<Project> {
        self.repository.delete(id).await
    }
}
