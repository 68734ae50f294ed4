//! Link Commands

use tauri::{AppHandle, State};

use crate::domain::{DomainError, Link, LinkKind};
use crate::events::{emit_change, ChangeKind};
use crate::AppState;

/// Attach a link to a project
#[tauri::command]
pub async fn add_link(
    app: AppHandle,
    state: State<'_, AppState>,
    project_id: u32,
    kind: String,
    path: String,
    timestamp: String,
) -> Result<Link, String> {
    if path.trim().is_empty() {
        return Err(DomainError::InvalidInput("link path must not be empty".to_string()).to_string());
    }

    let link = Link {
        id: 0,
        project_id,
        kind: LinkKind::from_str(&kind),
        path,
        timestamp,
    };
    let created = state.links.create(&link).await.map_err(|e| e.to_string())?;

    emit_change(&app, "links", ChangeKind::Insert, created.id, None);
    Ok(created)
}

/// Remove a link from its project
#[tauri::command]
pub async fn delete_link(app: AppHandle, state: State<'_, AppState>, id: u32) -> Result<(), String> {
    state.links.delete(id).await.map_err(|e| e.to_string())?;

    emit_change(&app, "links", ChangeKind::Delete, id, None);
    Ok(())
}
