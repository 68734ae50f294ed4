//! Database Connection and Setup
//!
//! Opens the SQLite database and runs migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Connection handle shared by all repositories.
/// `None` until the database has been initialized.
pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Open the database at `db_path` (":memory:" for tests) and migrate it
pub fn init_db(db_path: &Path) -> Result<Connection, String> {
    let db_path_str = db_path.to_str().ok_or("Invalid DB path")?;

    let conn = Connection::open(db_path_str)
        .map_err(|e| format!("Failed to open db: {}", e))?;

    run_migrations(&conn)?;

    Ok(conn)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            credential TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner INTEGER NOT NULL,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            progress INTEGER NOT NULL DEFAULT 0,
            color TEXT NOT NULL DEFAULT '#8B5CF6',
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS links (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL,
            kind TEXT NOT NULL DEFAULT 'url',
            path TEXT NOT NULL,
            timestamp TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL,
            content TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            timestamp TEXT NOT NULL,
            due_date TEXT
        );

        CREATE TABLE IF NOT EXISTS activity_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id INTEGER NOT NULL,
            kind TEXT NOT NULL,
            description TEXT NOT NULL,
            timestamp TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS quick_links (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner INTEGER,
            title TEXT NOT NULL,
            url TEXT NOT NULL,
            icon TEXT NOT NULL DEFAULT 'external-link',
            color TEXT NOT NULL DEFAULT '#64748B',
            timestamp TEXT
        );

        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            owner INTEGER NOT NULL,
            content TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            timestamp TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_projects_owner ON projects(owner);
        CREATE INDEX IF NOT EXISTS idx_links_project ON links(project_id);
        CREATE INDEX IF NOT EXISTS idx_tasks_project ON tasks(project_id);
        CREATE INDEX IF NOT EXISTS idx_activity_logs_project ON activity_logs(project_id);
        CREATE INDEX IF NOT EXISTS idx_quick_links_owner ON quick_links(owner);
        CREATE INDEX IF NOT EXISTS idx_todos_owner ON todos(owner);",
    )
    .map_err(|e| format!("Failed to run migrations: {}", e))?;

    Ok(())
}

/// Wrap an initialized connection for sharing across repositories
pub fn share(conn: Connection) -> SharedConnection {
    Arc::new(Mutex::new(Some(conn)))
}
