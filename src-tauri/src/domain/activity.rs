//! Activity Log Entity
//!
//! Append-only history entries attached to a project.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// What kind of user action produced the entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ProjectOpened,
    TaskCompleted,
    ProgressUpdated,
    LinkAdded,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::ProjectOpened => "project_opened",
            ActivityKind::TaskCompleted => "task_completed",
            ActivityKind::ProgressUpdated => "progress_updated",
            ActivityKind::LinkAdded => "link_added",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "task_completed" => ActivityKind::TaskCompleted,
            "progress_updated" => ActivityKind::ProgressUpdated,
            "link_added" => ActivityKind::LinkAdded,
            _ => ActivityKind::ProjectOpened,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: u32,
    pub project_id: u32,
    pub kind: ActivityKind,
    pub description: String,
    /// ISO-8601, assigned by the client at write time
    pub timestamp: String,
}

impl Entity for ActivityLog {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(ActivityKind::ProgressUpdated.as_str(), "progress_updated");
        assert_eq!(ActivityKind::from_str("link_added"), ActivityKind::LinkAdded);
    }
}
