//! Project Repository
//!
//! SQLite-backed CRUD for projects, plus the nested fetch the dashboard
//! consumes (each project with its links, tasks and activity logs).
//! Deleting a project cascades to its child rows.

use async_trait::async_trait;
use rusqlite::params;

use crate::domain::{DomainError, DomainResult, Project, ProjectDetail};
use super::db::SharedConnection;
use super::traits::{OwnedRepository, Repository};

pub struct ProjectRepository {
    conn: SharedConnection,
}

impl ProjectRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    /// Full owner-scoped fetch with nested child rows, newest project first
    pub async fn list_detailed_by_owner(&self, owner: u32) -> DomainResult<Vec<ProjectDetail>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, owner, name, description, progress, color, created_at, updated_at FROM projects WHERE owner = ? ORDER BY created_at DESC, id DESC")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt.query(params![owner])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut projects = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            projects.push(row_to_project(row)?);
        }

        let mut details = Vec::with_capacity(projects.len());
        for project in projects {
            let links = super::link_repo::links_for(conn, project.id)?;
            let tasks = super::task_repo::tasks_for(conn, project.id)?;
            let activity_logs = super::activity_repo::logs_for(conn, project.id)?;
            details.push(ProjectDetail { project, links, tasks, activity_logs });
        }
        Ok(details)
    }
}

#[async_trait]
impl Repository<Project> for ProjectRepository {
    async fn create(&self, entity: &Project) -> DomainResult<Project> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "INSERT INTO projects (owner, name, description, progress, color, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                entity.owner,
                entity.name,
                entity.description,
                entity.progress,
                entity.color,
                entity.created_at,
                entity.updated_at
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let id = conn.last_insert_rowid() as u32;
        Ok(Project { id, ..entity.clone() })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Project>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, owner, name, description, progress, color, created_at, updated_at FROM projects WHERE id = ?")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt.query(params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        if let Ok(Some(row)) = rows.next() {
            Ok(Some(row_to_project(row)?))
        } else {
            Ok(None)
        }
    }

    async fn update(&self, entity: &Project) -> DomainResult<Project> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        conn.execute(
            "UPDATE projects SET name = ?, description = ?, progress = ?, color = ?, updated_at = ? WHERE id = ?",
            params![
                entity.name,
                entity.description,
                entity.progress,
                entity.color,
                entity.updated_at,
                entity.id
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        // Cascade to owned child rows first
        conn.execute("DELETE FROM links WHERE project_id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        conn.execute("DELETE FROM tasks WHERE project_id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        conn.execute("DELETE FROM activity_logs WHERE project_id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        conn.execute("DELETE FROM projects WHERE id = ?", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl OwnedRepository<Project> for ProjectRepository {
    async fn list_by_owner(&self, owner: u32) -> DomainResult<Vec<Project>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, owner, name, description, progress, color, created_at, updated_at FROM projects WHERE owner = ? ORDER BY created_at DESC, id DESC")
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut rows = stmt.query(params![owner])
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut projects = Vec::new();
        while let Ok(Some(row)) = rows.next() {
            projects.push(row_to_project(row)?);
        }
        Ok(projects)
    }
}

/// Convert a database row to Project
pub(super) fn row_to_project(row: &rusqlite::Row) -> DomainResult<Project> {
    Ok(Project {
        id: row.get(0).map_err(|e| DomainError::Internal(e.to_string()))?,
        owner: row.get(1).map_err(|e| DomainError::Internal(e.to_string()))?,
        name: row.get(2).map_err(|e| DomainError::Internal(e.to_string()))?,
        description: row.get(3).unwrap_or_default(),
        progress: row.get::<_, i64>(4).map(Project::clamp_progress).unwrap_or(0),
        color: row.get(5).unwrap_or_else(|_| "#8B5CF6".to_string()),
        created_at: row.get(6).map_err(|e| DomainError::Internal(e.to_string()))?,
        updated_at: row.get(7).map_err(|e| DomainError::Internal(e.to_string()))?,
    })
}
