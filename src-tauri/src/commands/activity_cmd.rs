//! Activity Log Commands

use tauri::{AppHandle, State};

use crate::domain::{ActivityKind, ActivityLog};
use crate::events::{emit_change, ChangeKind};
use crate::AppState;

/// Append a history entry to a project's activity log
#[tauri::command]
pub async fn add_activity_log(
    app: AppHandle,
    state: State<'_, AppState>,
    project_id: u32,
    kind: String,
    description: String,
    timestamp: String,
) -> Result<ActivityLog, String> {
    let log = ActivityLog {
        id: 0,
        project_id,
        kind: ActivityKind::from_str(&kind),
        description,
        timestamp,
    };
    let created = state.activity.append(&log).await.map_err(|e| e.to_string())?;

    emit_change(&app, "activity_logs", ChangeKind::Insert, created.id, None);
    Ok(created)
}
