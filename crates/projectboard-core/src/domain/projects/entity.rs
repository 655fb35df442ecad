//! Project entity
//!
//! Construction and update rules for the `Project` value type. Updates never
//! mutate in place: both constructors hand back a fresh value, so a caller
//! holding an older snapshot can never observe a half-applied change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to projects created without one
pub const DEFAULT_TITLE: &str = "New Project";

/// A tracked project
///
/// Timestamps serialize as milliseconds since the Unix epoch, which is the
/// wire precision; in memory they keep full precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier, generated at creation and never changed
    pub id: String,
    /// Human-readable project title
    pub title: String,
    /// Free-text project description
    pub description: String,
    /// Owning identity, if any; no referential integrity is enforced
    pub owner_id: Option<String>,
    /// Creation timestamp
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time_created: DateTime<Utc>,
    /// Last write timestamp; equals `time_created` until the first update
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time_updated: DateTime<Utc>,
    /// Member identities
    pub members: Vec<String>,
    /// Issue identifiers
    pub issues: Vec<String>,
}

/// Caller-settable project fields, all optional
///
/// Serves both construction, where absent fields take their defaults, and
/// updates, where absent fields keep their current values. `owner_id` is
/// doubly optional: the outer `Option` is the field's presence, the inner
/// one the owner itself, so `Some(None)` clears the owner on update while
/// `None` leaves it alone.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner_id: Option<Option<String>>,
    pub members: Option<Vec<String>>,
    pub issues: Option<Vec<String>>,
}

impl Project {
    /// Create a new project from a draft
    ///
    /// Generates a fresh id and stamps both timestamps from the same instant,
    /// so `time_created == time_updated` holds on every new project.
    pub fn new(draft: ProjectDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: draft.description.unwrap_or_default(),
            owner_id: draft.owner_id.flatten(),
            time_created: now,
            time_updated: now,
            members: draft.members.unwrap_or_default(),
            issues: draft.issues.unwrap_or_default(),
        }
    }

    /// Build the updated successor of this project
    ///
    /// Fields present in the draft override, everything else carries over;
    /// a present `owner_id` applies whatever it holds, so `Some(None)`
    /// clears the owner. `id` and `time_created` are pinned for the
    /// project's lifetime while `time_updated` is refreshed; `self` stays
    /// untouched.
    pub fn updated(&self, draft: ProjectDraft) -> Self {
        Self {
            id: self.id.clone(),
            title: draft.title.unwrap_or_else(|| self.title.clone()),
            description: draft
                .description
                .unwrap_or_else(|| self.description.clone()),
            owner_id: draft.owner_id.unwrap_or_else(|| self.owner_id.clone()),
            time_created: self.time_created,
            time_updated: Utc::now(),
            members: draft.members.unwrap_or_else(|| self.members.clone()),
            issues: draft.issues.unwrap_or_else(|| self.issues.clone()),
        }
    }
}
