//! Project Entity
//!
//! A tracked development project with a completion percentage and
//! owned links, tasks and activity log entries.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::{ActivityLog, Link, Task};

/// Progress moves in fixed steps via the +/- controls
pub const PROGRESS_STEP: u8 = 5;

/// A tracked project row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    pub id: u32,
    /// Owning user ID
    pub owner: u32,
    pub name: String,
    pub description: String,
    /// Completion percentage, always within [0, 100]
    pub progress: u8,
    /// Accent color used by the UI (hex string)
    pub color: String,
    /// ISO-8601, assigned by the client at write time
    pub created_at: String,
    pub updated_at: String,
}

impl Project {
    /// Create a new project at 0% progress
    pub fn new(id: u32, owner: u32, name: String, description: String, color: String, timestamp: String) -> Self {
        Self {
            id,
            owner,
            name,
            description,
            progress: 0,
            color,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }

    /// Step progress up or down by [`PROGRESS_STEP`], clamped to [0, 100]
    pub fn step_progress(current: u8, up: bool) -> u8 {
        if up {
            current.saturating_add(PROGRESS_STEP).min(100)
        } else {
            current.saturating_sub(PROGRESS_STEP)
        }
    }

    /// Clamp an arbitrary value into the valid progress range
    pub fn clamp_progress(value: i64) -> u8 {
        value.clamp(0, 100) as u8
    }
}

impl Entity for Project {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A project together with its owned child rows, as the frontend consumes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub links: Vec<Link>,
    pub tasks: Vec<Task>,
    pub activity_logs: Vec<ActivityLog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = Project::new(
            1,
            7,
            "Demo".to_string(),
            "desc".to_string(),
            "#8B5CF6".to_string(),
            "2026-08-06T12:00:00Z".to_string(),
        );
        assert_eq!(project.id(), 1);
        assert_eq!(project.owner, 7);
        assert_eq!(project.progress, 0);
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn test_step_progress_moves_in_fives() {
        assert_eq!(Project::step_progress(0, true), 5);
        assert_eq!(Project::step_progress(45, true), 50);
        assert_eq!(Project::step_progress(45, false), 40);
    }

    #[test]
    fn test_step_progress_clamps_at_bounds() {
        assert_eq!(Project::step_progress(0, false), 0);
        assert_eq!(Project::step_progress(100, true), 100);
        assert_eq!(Project::step_progress(98, true), 100);
    }

    #[test]
    fn test_step_sequence_stays_in_range() {
        let mut progress = 0;
        for up in [true, true, false, true, false, false, false, true] {
            progress = Project::step_progress(progress, up);
            assert!(progress <= 100);
            assert_eq!(progress % PROGRESS_STEP, 0);
        }
    }

    #[test]
    fn test_clamp_progress() {
        assert_eq!(Project::clamp_progress(-10), 0);
        assert_eq!(Project::clamp_progress(55), 55);
        assert_eq!(Project::clamp_progress(250), 100);
    }
}
