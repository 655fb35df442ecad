//! Project repository trait

use async_trait::async_trait;

use super::entity::{Project, ProjectDraft};
use crate::error::Result;

/// Storage contract for projects, keyed by id
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// List all stored projects, in no particular order
    async fn get_all(&self) -> Result<Vec<Project>>;

    /// Get the project stored under `id`, or `Error::ProjectNotFound`
    async fn get_by_id(&self, id: &str) -> Result<Project>;

    /// Store `project` under its own id, replacing any previous entry
    async fn insert(&self, project: &Project) -> Result<()>;

    /// Apply `draft` to the project stored under `id` and return the result
    ///
    /// When `id` is unknown a brand-new project is created from the draft
    /// instead, stored under a freshly generated id; the supplied one is
    /// discarded. Callers can tell the two outcomes apart by comparing the
    /// returned timestamps. Never fails.
    async fn update(&self, id: &str, draft: ProjectDraft) -> Result<Project>;

    /// Remove and return the project stored under `id`, or
    /// `Error::ProjectNotFound`
    async fn delete(&self, id: &str) -> Result<Project>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The repository is shared behind a pointer, so the trait must stay
    // object-safe.
    fn _assert_object_safe(_: &dyn ProjectRepository) {}
}
