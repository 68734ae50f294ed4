//! Todo Repository
//!
//! SQLite-backed CRUD for user-scoped to-do items.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::{DomainError, DomainResult, TodoItem};
use super::db::SharedConnection;
use super::traits::{OwnedRepository, Repository};

pub struct TodoRepository {
    conn: SharedConnection,
}

impl TodoRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Set the completion flag, returning the updated row
    pub async fn set_completed(&self, id: u32, completed: bool) -> DomainResult<TodoItem> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let changed = conn
            .execute(
                "UPDATE todos SET completed = ? WHERE id = ?",
                params![if completed { 1 } else { 0 }, id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("todo {}", id)));
        }

        let mut stmt = conn
            .prepare("SELECT id, owner, content, completed, timestamp FROM todos WHERE id = ?")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt.query(params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            row_to_todo(row)
        } else {
            Err(DomainError::NotFound(format!("todo {}", id)))
        }
    }
}

#[async_trait]
impl Repository<TodoItem> for TodoRepository {
    async fn create(&self, entity: &TodoItem) -> DomainResult<TodoItem> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "INSERT INTO todos (owner, content, completed, timestamp) VALUES (?, ?, ?, ?)",
            params![
                entity.owner,
                entity.content,
                if entity.completed { 1 } else { 0 },
                entity.timestamp
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        Ok(TodoItem { id, ..entity.clone() })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<TodoItem>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, owner, content, completed, timestamp FROM todos WHERE id = ?")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt.query(params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            Ok(Some(row_to_todo(row)?))
        } else {
            Ok(None)
        }
    }

    async fn update(&self, entity: &TodoItem) -> DomainResult<TodoItem> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let changed = conn
            .execute(
                "UPDATE todos SET content = ?, completed = ? WHERE id = ?",
                params![entity.content, if entity.completed { 1 } else { 0 }, entity.id],
            )
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("todo {}", entity.id)));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute("DELETE FROM todos WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl OwnedRepository<TodoItem> for TodoRepository {
    async fn list_by_owner(&self, owner: u32) -> DomainResult<Vec<TodoItem>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, owner, content, completed, timestamp FROM todos WHERE owner = ? ORDER BY timestamp DESC, id DESC")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt.query(params![owner])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut todos = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            todos.push(row_to_todo(row)?);
        }
        Ok(todos)
    }
}

/// Convert a database row to TodoItem
fn row_to_todo(row: &rusqlite::Row) -> DomainResult<TodoItem> {
    Ok(TodoItem {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        owner: row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?,
        content: row.get(2).map_err(|e| DomainError::Internal(e.to_string()))?,
        completed: row.get::<_, i32>(3).unwrap_or(0) != 0,
        timestamp: row.get(4).map_err(|e| DomainError::Internal(e.to_string()))?,
    })
}
