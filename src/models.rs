//! Frontend Models
//!
//! Data structures matching backend entities, plus the small pure
//! helpers the dashboard widgets compute with.

use serde::{Deserialize, Serialize};

/// Progress moves in fixed steps via the +/- controls
pub const PROGRESS_STEP: u8 = 5;

/// Project data structure (matches backend nested fetch)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub owner: u32,
    pub name: String,
    pub description: String,
    pub progress: u8,
    pub color: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub activity_logs: Vec<ActivityLog>,
}

/// Link data structure (matches backend)
///
/// `kind` is one of "file" | "url" | "llm"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub id: u32,
    pub project_id: u32,
    pub kind: String,
    pub path: String,
    pub timestamp: String,
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub project_id: u32,
    pub content: String,
    pub completed: bool,
    pub timestamp: String,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Activity log entry (matches backend)
///
/// `kind` is one of "project_opened" | "task_completed" |
/// "progress_updated" | "link_added"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: u32,
    pub project_id: u32,
    pub kind: String,
    pub description: String,
    pub timestamp: String,
}

/// Quick access bookmark (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickLink {
    pub id: u32,
    #[serde(default)]
    pub owner: Option<u32>,
    pub title: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Ad-hoc todo item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub owner: u32,
    pub content: String,
    pub completed: bool,
    pub timestamp: String,
}

/// Operator account row (matches backend; credential digest never leaves it)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub created_at: String,
}

/// Resolved operator session (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: u32,
    pub email: String,
    pub signed_in_at: String,
}

/// Configured sign-in pair returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorCredentials {
    pub email: String,
    pub token: String,
}

/// Step progress up or down by [`PROGRESS_STEP`], clamped to [0, 100]
pub fn step_progress(current: u8, up: bool) -> u8 {
    if up {
        current.saturating_add(PROGRESS_STEP).min(100)
    } else {
        current.saturating_sub(PROGRESS_STEP)
    }
}

/// Rounded mean completion across all projects, 0 when there are none
pub fn overall_progress(projects: &[Project]) -> u8 {
    if projects.is_empty() {
        return 0;
    }
    let total: u32 = projects.iter().map(|p| p.progress as u32).sum();
    (total as f64 / projects.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_at(progress: u8) -> Project {
        Project {
            id: 1,
            owner: 1,
            name: "p".to_string(),
            description: String::new(),
            progress,
            color: "#8B5CF6".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
            links: vec![],
            tasks: vec![],
            activity_logs: vec![],
        }
    }

    #[test]
    fn test_step_progress_bounds() {
        assert_eq!(step_progress(0, true), 5);
        assert_eq!(step_progress(0, false), 0);
        assert_eq!(step_progress(100, true), 100);
        assert_eq!(step_progress(100, false), 95);
    }

    #[test]
    fn test_overall_progress() {
        assert_eq!(overall_progress(&[]), 0);
        assert_eq!(overall_progress(&[project_at(50)]), 50);
        assert_eq!(overall_progress(&[project_at(0), project_at(5)]), 3);
        assert_eq!(overall_progress(&[project_at(10), project_at(20), project_at(30)]), 20);
    }
}
