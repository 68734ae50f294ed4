//! Quick Link Commands

use tauri::{AppHandle, State};

use crate::domain::{DomainError, QuickLink};
use crate::events::{emit_change, ChangeKind};
use crate::repository::{OwnedRepository, Repository};
use crate::AppState;

#[tauri::command]
pub async fn list_quick_links(state: State<'_, AppState>, owner: u32) -> Result<Vec<QuickLink>, String> {
    state.quick_links.list_by_owner(owner).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn add_quick_link(
    app: AppHandle,
    state: State<'_, AppState>,
    owner: u32,
    title: String,
    url: String,
    icon: String,
    color: String,
    timestamp: String,
) -> Result<QuickLink, String> {
    if title.trim().is_empty() || url.trim().is_empty() {
        return Err(DomainError::InvalidInput("quick link needs a title and a URL".to_string()).to_string());
    }

    let link = QuickLink {
        id: 0,
        owner: Some(owner),
        title,
        url,
        icon,
        color,
        timestamp: Some(timestamp),
    };
    let created = state.quick_links.create(&link).await.map_err(|e| e.to_string())?;

    emit_change(&app, "quick_links", ChangeKind::Insert, created.id, created.owner);
    Ok(created)
}

/// Edit title and URL in place
#[tauri::command]
pub async fn update_quick_link(
    app: AppHandle,
    state: State<'_, AppState>,
    id: u32,
    title: String,
    url: String,
) -> Result<QuickLink, String> {
    if title.trim().is_empty() || url.trim().is_empty() {
        return Err(DomainError::InvalidInput("quick link needs a title and a URL".to_string()).to_string());
    }

    let existing = state
        .quick_links
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| DomainError::NotFound(format!("quick link {}", id)).to_string())?;

    let updated = QuickLink { title, url, ..existing };
    let updated = state.quick_links.update(&updated).await.map_err(|e| e.to_string())?;

    emit_change(&app, "quick_links", ChangeKind::Update, updated.id, updated.owner);
    Ok(updated)
}

#[tauri::command]
pub async fn delete_quick_link(app: AppHandle, state: State<'_, AppState>, id: u32) -> Result<(), String> {
    let existing = state
        .quick_links
        .find_by_id(id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| DomainError::NotFound(format!("quick link {}", id)).to_string())?;

    state.quick_links.delete(id).await.map_err(|e| e.to_string())?;

    emit_change(&app, "quick_links", ChangeKind::Delete, id, existing.owner);
    Ok(())
}

/// One-time bootstrap step: adopt any ownerless rows
#[tauri::command]
pub async fn claim_quick_links(
    app: AppHandle,
    state: State<'_, AppState>,
    owner: u32,
) -> Result<usize, String> {
    let claimed = state.quick_links.claim_unowned(owner).await.map_err(|e| e.to_string())?;

    if claimed > 0 {
        tracing::info!(owner, claimed, "adopted ownerless quick links");
        emit_change(&app, "quick_links", ChangeKind::Update, 0, Some(owner));
    }
    Ok(claimed)
}
