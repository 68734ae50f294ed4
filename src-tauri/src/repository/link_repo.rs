//! Link Repository
//!
//! SQLite-backed operations for project links.

use rusqlite::{params, Connection};

use crate::domain::{DomainError, DomainResult, Link, LinkKind};
use super::db::SharedConnection;

pub struct LinkRepository {
    conn: SharedConnection,
}

impl LinkRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Insert a link; the ID is assigned by the database
    pub async fn create(&self, link: &Link) -> DomainResult<Link> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "INSERT INTO links (project_id, kind, path, timestamp) VALUES (?, ?, ?, ?)",
            params![link.project_id, link.kind.as_str(), link.path, link.timestamp],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        Ok(Link { id, ..link.clone() })
    }

    pub async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM links WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }

    pub async fn list_by_project(&self, project_id: u32) -> DomainResult<Vec<Link>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;
        links_for(conn, project_id)
    }
}

/// Links for one project, newest first
pub(super) fn links_for(conn: &Connection, project_id: u32) -> DomainResult<Vec<Link>> {
    let mut stmt = conn
        .prepare("SELECT id, project_id, kind, path, timestamp FROM links WHERE project_id = ? ORDER BY timestamp DESC, id DESC")
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut rows = stmt.query(params![project_id])
        .map_err(|e| DomainError::Internal(e.to_string()))?;

    let mut links = Vec::new();
    while let Ok(Some(row)) = rows.next() {
        links.push(row_to_link(row)?);
    }
    Ok(links)
}

/// Convert a database row to Link
pub(super) fn row_to_link(row: &rusqlite::Row) -> DomainResult<Link> {
    Ok(Link {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        project_id: row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?,
        kind: LinkKind::from_str(&row.get::<_, String>(2).unwrap_or_else(|_| "url".to_string())),
        path: row.get(3).map_err(|e| DomainError::Internal(e.to_string()))?,
        timestamp: row.get(4).map_err(|e| DomainError::Internal(e.to_string()))?,
    })
}
