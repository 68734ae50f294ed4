//! Task Commands

use tauri::{AppHandle, State};

use crate::domain::{DomainError, Task};
use crate::events::{emit_change, ChangeKind};
use crate::AppState;

/// Add a task to a project
#[tauri::command]
pub async fn add_task(
    app: AppHandle,
    state: State<'_, AppState>,
    project_id: u32,
    content: String,
    timestamp: String,
    due_date: Option<String>,
) -> Result<Task, String> {
    if content.trim().is_empty() {
        return Err(DomainError::InvalidInput("task content must not be empty".to_string()).to_string());
    }

    let task = Task {
        id: 0,
        project_id,
        content,
        completed: false,
        timestamp,
        due_date,
    };
    let created = state.tasks.create(&task).await.map_err(|e| e.to_string())?;

    emit_change(&app, "tasks", ChangeKind::Insert, created.id, None);
    Ok(created)
}

/// Set a task's completion flag
#[tauri::command]
pub async fn set_task_completed(
    app: AppHandle,
    state: State<'_, AppState>,
    id: u32,
    completed: bool,
) -> Result<Task, String> {
    let updated = state.tasks.set_completed(id, completed).await.map_err(|e| e.to_string())?;

    emit_change(&app, "tasks", ChangeKind::Update, updated.id, None);
    Ok(updated)
}
