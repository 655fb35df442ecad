//! In-memory project store
//!
//! A `HashMap` guarded by a `tokio` `RwLock`. Every operation takes the lock
//! exactly once, so each call sees a consistent snapshot and writes are
//! atomic whole-entry replacements. State lives and dies with the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::projects::{Project, ProjectDraft, ProjectRepository};
use crate::error::{Error, Result};

/// Map-backed repository with last-writer-wins semantics per id
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    db: RwLock<HashMap<String, Project>>,
}

impl InMemoryProjectRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn get_all(&self) -> Result<Vec<Project>> {
        let db = self.db.read().await;
        Ok(db.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Project> {
        let db = self.db.read().await;
        db.get(id)
            .cloned()
            .ok_or_else(|| Error::ProjectNotFound(id.to_string()))
    }

    async fn insert(&self, project: &Project) -> Result<()> {
        let mut db = self.db.write().await;
        db.insert(project.id.clone(), project.clone());
        debug!(project_id = %project.id, "Project stored");
        Ok(())
    }

    async fn update(&self, id: &str, draft: ProjectDraft) -> Result<Project> {
        let mut db = self.db.write().await;

        // Known id: replace the entry with its updated successor. Unknown
        // id: store a brand-new project under its own generated id.
        let project = match db.get(id) {
            Some(existing) => existing.updated(draft),
            None => Project::new(draft),
        };

        db.insert(project.id.clone(), project.clone());
        debug!(project_id = %project.id, "Project stored");
        Ok(project)
    }

    async fn delete(&self, id: &str) -> Result<Project> {
        let mut db = self.db.write().await;
        let removed = db
            .remove(id)
            .ok_or_else(|| Error::ProjectNotFound(id.to_string()))?;
        debug!(project_id = %removed.id, "Project removed");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn sample_project(title: &str) -> Project {
        Project::new(ProjectDraft {
            title: Some(title.to_string()),
            ..ProjectDraft::default()
        })
    }

    #[tokio::test]
    async fn test_insert_then_get_by_id_round_trips() {
        let repo = InMemoryProjectRepository::new();
        let project = sample_project("Orbital");

        repo.insert(&project).await.expect("Should insert");
        let stored = repo
            .get_by_id(&project.id)
            .await
            .expect("Should find stored project");

        assert_eq!(stored, project);
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_id_fails() {
        let repo = InMemoryProjectRepository::new();

        let err = repo
            .get_by_id("missing")
            .await
            .expect_err("Should not find anything");

        assert!(matches!(err, Error::ProjectNotFound(ref id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_insert_same_id_replaces_entry() {
        let repo = InMemoryProjectRepository::new();
        let first = sample_project("First");
        let mut second = first.clone();
        second.title = "Second".to_string();

        repo.insert(&first).await.expect("Should insert");
        repo.insert(&second).await.expect("Should insert");

        let stored = repo.get_by_id(&first.id).await.expect("Should find");
        assert_eq!(stored.title, "Second");
        assert_eq!(repo.get_all().await.expect("Should list").len(), 1);
    }

    #[tokio::test]
    async fn test_get_all_returns_every_project() {
        let repo = InMemoryProjectRepository::new();
        let a = sample_project("A");
        let b = sample_project("B");

        repo.insert(&a).await.expect("Should insert");
        repo.insert(&b).await.expect("Should insert");

        let mut titles: Vec<String> = repo
            .get_all()
            .await
            .expect("Should list")
            .into_iter()
            .map(|p| p.title)
            .collect();
        titles.sort();

        assert_eq!(titles, vec!["A".to_string(), "B".to_string()]);
    }

    #[tokio::test]
    async fn test_get_all_empty_store() {
        let repo = InMemoryProjectRepository::new();

        let projects = repo.get_all().await.expect("Should list");

        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_update_known_id_keeps_identity() {
        let repo = InMemoryProjectRepository::new();
        let project = sample_project("Orbital");
        repo.insert(&project).await.expect("Should insert");

        // Wall-clock timestamps, so give the update a later instant.
        tokio::time::sleep(Duration::from_millis(2)).await;

        let updated = repo
            .update(
                &project.id,
                ProjectDraft {
                    title: Some("Orbital 2".to_string()),
                    ..ProjectDraft::default()
                },
            )
            .await
            .expect("Should update");

        assert_eq!(updated.id, project.id);
        assert_eq!(updated.title, "Orbital 2");
        assert_eq!(updated.time_created, project.time_created);
        assert!(updated.time_updated > updated.time_created);

        let stored = repo.get_by_id(&project.id).await.expect("Should find");
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_creates_fresh_project() {
        let repo = InMemoryProjectRepository::new();

        let created = repo
            .update(
                "no-such-id",
                ProjectDraft {
                    title: Some("Salvaged".to_string()),
                    ..ProjectDraft::default()
                },
            )
            .await
            .expect("Should create");

        // The supplied id is discarded in favor of a generated one.
        assert_ne!(created.id, "no-such-id");
        assert_eq!(created.title, "Salvaged");
        assert_eq!(created.time_created, created.time_updated);

        repo.get_by_id("no-such-id")
            .await
            .expect_err("Supplied id should not be stored");
        let stored = repo.get_by_id(&created.id).await.expect("Should find");
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn test_delete_removes_and_returns_project() {
        let repo = InMemoryProjectRepository::new();
        let project = sample_project("Orbital");
        repo.insert(&project).await.expect("Should insert");

        let removed = repo.delete(&project.id).await.expect("Should delete");

        assert_eq!(removed, project);
        repo.get_by_id(&project.id)
            .await
            .expect_err("Deleted project should be gone");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_fails_and_changes_nothing() {
        let repo = InMemoryProjectRepository::new();
        let project = sample_project("Orbital");
        repo.insert(&project).await.expect("Should insert");

        let err = repo
            .delete("missing")
            .await
            .expect_err("Should not delete anything");

        assert!(matches!(err, Error::ProjectNotFound(ref id) if id == "missing"));
        assert_eq!(repo.get_all().await.expect("Should list").len(), 1);
    }
}
