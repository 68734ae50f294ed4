//! Project Commands
//!
//! CRUD over projects plus the nested owner-scoped fetch. Timestamps
//! arrive from the client; every mutation broadcasts a change event.

use tauri::{AppHandle, State};

use crate::domain::{DomainError, Project, ProjectDetail};
use crate::events::{emit_change, ChangeKind};
use crate::repository::Repository;
use crate::AppState;

/// Full fetch for one owner: projects with nested links/tasks/logs
#[tauri::command]
pub async fn list_projects(state: State<'_, AppState>, owner: u32) -> Result<Vec<ProjectDetail>, String> {
    state.projects.list_detailed_by_owner(owner).await.map_err(|e| e.to_string())
}

/// Create a project at 0% progress
#[tauri::command]
pub async fn create_project(
    app: AppHandle,
    state: State<'_, AppState>,
    owner: u32,
    name: String,
    description: String,
    color: String,
    timestamp: String,
) -> Result<Project, String> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidInput("project name must not be empty".to_string()).to_string());
    }

    let project = Project::new(0, owner, name, description, color, timestamp);
    let created = state.projects.create(&project).await.map_err(|e| e.to_string())?;

    emit_change(&app, "projects", ChangeKind::Insert, created.id, Some(created.owner));
    Ok(created)
}

/// Update name and description
#[tauri::command]
pub async fn update_project(
    app: AppHandle,
    state: State<'_, AppState>,
    id: u32,
    name: String,
    description: String,
    timestamp: String,
) -> Result<Project, String> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidInput("project name must not be empty".to_string()).to_string());
    }

    let existing = state
        .projects
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| DomainError::NotFound(format!("project {}", id)).to_string())?;

    let updated = Project {
        name,
        description,
        updated_at: timestamp,
        ..existing
    };
    let updated = state.projects.update(&updated).await.map_err(|e| e.to_string())?;

    emit_change(&app, "projects", ChangeKind::Update, updated.id, Some(updated.owner));
    Ok(updated)
}

/// Set progress, clamped into [0, 100]
#[tauri::command]
pub async fn set_project_progress(
    app: AppHandle,
    state: State<'_, AppState>,
    id: u32,
    progress: i64,
    timestamp: String,
) -> Result<Project, String> {
    let existing = state
        .projects
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| DomainError::NotFound(format!("project {}", id)).to_string())?;

    let updated = Project {
        progress: Project::clamp_progress(progress),
        updated_at: timestamp,
        ..existing
    };
    let updated = state.projects.update(&updated).await.map_err(|e| e.to_string())?;

    emit_change(&app, "projects", ChangeKind::Update, updated.id, Some(updated.owner));
    Ok(updated)
}

/// Delete a project (cascades to links/tasks/activity logs)
#[tauri::command]
pub async fn delete_project(app: AppHandle, state: State<'_, AppState>, id: u32) -> Result<(), String> {
    let existing = state
        .projects
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| DomainError::NotFound(format!("project {}", id)).to_string())?;

    state.projects.delete(id).await.map_err(|e| e.to_string())?;

    emit_change(&app, "projects", ChangeKind::Delete, id, Some(existing.owner));
    Ok(())
}
