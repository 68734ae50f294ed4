//! Todo Commands

use tauri::{AppHandle, State};

use crate::domain::{DomainError, TodoItem};
use crate::events::{emit_change, ChangeKind};
use crate::repository::{OwnedRepository, Repository};
use crate::AppState;

#[tauri::command]
pub async fn list_todos(state: State<'_, AppState>, owner: u32) -> Result<Vec<TodoItem>, String> {
    state.todos.list_by_owner(owner).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn add_todo(
    app: AppHandle,
    state: State<'_, AppState>,
    owner: u32,
    content: String,
    timestamp: String,
) -> Result<TodoItem, String> {
    if content.trim().is_empty() {
        return Err(DomainError::InvalidInput("todo content must not be empty".to_string()).to_string());
    }

    let todo = TodoItem {
        id: 0,
        owner,
        content,
        completed: false,
        timestamp,
    };
    let created = state.todos.create(&todo).await.map_err(|e| e.to_string())?;

    emit_change(&app, "todos", ChangeKind::Insert, created.id, Some(created.owner));
    Ok(created)
}

#[tauri::command]
pub async fn set_todo_completed(
    app: AppHandle,
    state: State<'_, AppState>,
    id: u32,
    completed: bool,
) -> Result<TodoItem, String> {
    let updated = state.todos.set_completed(id, completed).await.map_err(|e| e.to_string())?;

    emit_change(&app, "todos", ChangeKind::Update, updated.id, Some(updated.owner));
    Ok(updated)
}
