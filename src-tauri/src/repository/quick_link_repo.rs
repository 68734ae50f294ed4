//! Quick Link Repository
//!
//! SQLite-backed CRUD for user-scoped bookmarks, plus the one-time
//! adoption of ownerless rows performed during session bootstrap.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::{DomainError, DomainResult, QuickLink};
use super::db::SharedConnection;
use super::traits::{OwnedRepository, Repository};

pub struct QuickLinkRepository {
    conn: SharedConnection,
}

impl QuickLinkRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Assign every ownerless row to `owner`, returning how many changed
    pub async fn claim_unowned(&self, owner: u32) -> DomainResult<usize> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("UPDATE quick_links SET owner = ? WHERE owner IS NULL", params![owner])
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

#[async_trait]
impl Repository<QuickLink> for QuickLinkRepository {
    async fn create(&self, entity: &QuickLink) -> DomainResult<QuickLink> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "INSERT INTO quick_links (owner, title, url, icon, color, timestamp) VALUES (?, ?, ?, ?, ?, ?)",
            params![
                entity.owner,
                entity.title,
                entity.url,
                entity.icon,
                entity.color,
                entity.timestamp
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        Ok(QuickLink { id, ..entity.clone() })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<QuickLink>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, owner, title, url, icon, color, timestamp FROM quick_links WHERE id = ?")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt.query(params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            Ok(Some(row_to_quick_link(row)?))
        } else {
            Ok(None)
        }
    }

    async fn update(&self, entity: &QuickLink) -> DomainResult<QuickLink> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let changed = conn
            .execute(
                "UPDATE quick_links SET title = ?, url = ?, icon = ?, color = ? WHERE id = ?",
                params![entity.title, entity.url, entity.icon, entity.color, entity.id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("quick link {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM quick_links WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl OwnedRepository<QuickLink> for QuickLinkRepository {
    async fn list_by_owner(&self, owner: u32) -> DomainResult<Vec<QuickLink>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, owner, title, url, icon, color, timestamp FROM quick_links WHERE owner = ? ORDER BY id")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt.query(params![owner])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut links = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            links.push(row_to_quick_link(row)?);
        }
        Ok(links)
    }
}

/// Convert a database row to QuickLink
fn row_to_quick_link(row: &rusqlite::Row) -> DomainResult<QuickLink> {
    Ok(QuickLink {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        owner: row.get::<_, Option<u32>>(1).ok().flatten(),
        title: row.get(2).map_err(|e| DomainError::Internal(e.to_string()))?,
        url: row.get(3).map_err(|e| DomainError::Internal(e.to_string()))?,
        icon: row.get(4).unwrap_or_else(|_| "external-link".to_string()),
        color: row.get(5).unwrap_or_else(|_| "#64748B".to_string()),
        timestamp: row.get::<_, Option<String>>(6).ok().flatten(),
    })
}
