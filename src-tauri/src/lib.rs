//! Devboard Backend
//!
//! Plays the remote store and auth collaborator for the dashboard UI.
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers
//!
//! Every successful mutation broadcasts a row-level change event
//! (see `events`), which the frontend subscriptions re-fetch on.

use tauri::Manager;
use tracing_subscriber::EnvFilter;

mod auth;
mod config;
mod domain;
mod events;
mod repository;
mod commands;

use auth::SessionState;
use config::OperatorConfig;
use repository::{
    ActivityLogRepository, LinkRepository, ProjectRepository, QuickLinkRepository, TaskRepository,
    TodoRepository, UserRepository,
};

/// Application state shared across commands
pub struct AppState {
    pub config: OperatorConfig,
    pub session: SessionState,
    pub users: UserRepository,
    pub projects: ProjectRepository,
    pub links: LinkRepository,
    pub tasks: TaskRepository,
    pub activity: ActivityLogRepository,
    pub quick_links: QuickLinkRepository,
    pub todos: TodoRepository,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devboard=info")),
                )
                .init();

            let app_dir = app.path().app_data_dir()?;
            std::fs::create_dir_all(&app_dir)?;

            let db_path = app_dir.join("devboard.db");
            let conn = repository::share(repository::init_db(&db_path)?);

            let config = OperatorConfig::load_or_create(&app_dir)?;
            let session = SessionState::load(&app_dir);

            app.manage(AppState {
                config,
                session,
                users: UserRepository::new(conn.clone()),
                projects: ProjectRepository::new(conn.clone()),
                links: LinkRepository::new(conn.clone()),
                tasks: TaskRepository::new(conn.clone()),
                activity: ActivityLogRepository::new(conn.clone()),
                quick_links: QuickLinkRepository::new(conn.clone()),
                todos: TodoRepository::new(conn),
            });

            tracing::info!(db = %db_path.display(), "devboard backend ready");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Auth collaborator
            commands::current_session,
            commands::operator_credentials,
            commands::sign_in,
            commands::sign_up,
            commands::sign_out,
            commands::upsert_user,
            // Projects (with nested links/tasks/logs)
            commands::list_projects,
            commands::create_project,
            commands::update_project,
            commands::set_project_progress,
            commands::delete_project,
            // Links
            commands::add_link,
            commands::delete_link,
            // Tasks
            commands::add_task,
            commands::set_task_completed,
            // Activity logs
            commands::add_activity_log,
            // Quick links
            commands::list_quick_links,
            commands::add_quick_link,
            commands::update_quick_link,
            commands::delete_quick_link,
            commands::claim_quick_links,
            // Todos
            commands::list_todos,
            commands::add_todo,
            commands::set_todo_completed,
            // Shell
            commands::open_external,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
