//! Activity Log Repository
//!
//! Append-only history rows per project. No update or single delete;
//! rows go away only when their project is deleted.

use rusqlite::{params, Connection};

use crate::domain::{ActivityKind, ActivityLog, DomainError, DomainResult};
use super::db::SharedConnection;

pub struct ActivityLogRepository {
    conn: SharedConnection,
}

impl ActivityLogRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Append an entry; the ID is assigned by the database
    pub async fn append(&self, log: &ActivityLog) -> DomainResult<ActivityLog> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "INSERT INTO activity_logs (project_id, kind, description, timestamp) VALUES (?, ?, ?, ?)",
            params![log.project_id, log.kind.as_str(), log.description, log.timestamp],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        Ok(ActivityLog { id, ..log.clone() })
    }

    pub async fn list_by_project(&self, project_id: u32) -> DomainResult<Vec<ActivityLog>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;
        logs_for(conn, project_id)
    }
}

/// Activity log entries for one project, newest first
pub(super) fn logs_for(conn: &Connection, project_id: u32) -> DomainResult<Vec<ActivityLog>> {
    let mut stmt = conn
        .prepare("SELECT id, project_id, kind, description, timestamp FROM activity_logs WHERE project_id = ? ORDER BY timestamp DESC, id DESC")
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut rows = stmt.query(params![project_id])
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut logs = Vec::new();
    while let Ok(Some(row)) = rows.next() {
        logs.push(row_to_log(row)?);
    }
    Ok(logs)
}

/// Convert a database row to ActivityLog
pub(super) fn row_to_log(row: &rusqlite::Row) -> DomainResult<ActivityLog> {
    Ok(ActivityLog {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        project_id: row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?,
        kind: ActivityKind::from_str(&row.get::<_, String>(2).unwrap_or_else(|_| "project_opened".to_string())),
        description: row.get(3).map_err(|e| DomainError::Internal(e.to_string()))?,
        timestamp: row.get(4).map_err(|e| DomainError::Internal(e.to_string()))?,
    })
}
