//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store
//! is the single local projection of remote truth; mutation handlers
//! merge into it optimistically and the subscription-driven fetchers
//! overwrite whole collections.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{Project, QuickLink, TodoItem};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All projects of the signed-in owner, newest first
    pub projects: Vec<Project>,
    /// Quick access bookmarks
    pub quick_links: Vec<QuickLink>,
    /// Ad-hoc todos
    pub todos: Vec<TodoItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Prepend a freshly created project
pub fn store_insert_project(store: &AppStore, project: Project) {
    store.projects().write().insert(0, project);
}

/// Replace a project in the store by ID
pub fn store_update_project(store: &AppStore, updated: Project) {
    store.projects().write().iter_mut()
        .find(|project| project.id == updated.id)
        .map(|project| *project = updated);
}

/// Apply a targeted merge to one project (progress, links, tasks, logs)
pub fn store_apply_project(store: &AppStore, id: u32, apply: impl FnOnce(&mut Project)) {
    store.projects().write().iter_mut()
        .find(|project| project.id == id)
        .map(apply);
}

/// Remove a project from the store by ID
pub fn store_remove_project(store: &AppStore, id: u32) {
    store.projects().write().retain(|project| project.id != id);
}

/// Append a quick link to the store
pub fn store_insert_quick_link(store: &AppStore, link: QuickLink) {
    store.quick_links().write().push(link);
}

/// Update a quick link in the store by ID
pub fn store_update_quick_link(store: &AppStore, updated: QuickLink) {
    store.quick_links().write().iter_mut()
        .find(|link| link.id == updated.id)
        .map(|link| *link = updated);
}

/// Remove a quick link from the store by ID
pub fn store_remove_quick_link(store: &AppStore, id: u32) {
    store.quick_links().write().retain(|link| link.id != id);
}

/// Prepend a freshly created todo
pub fn store_insert_todo(store: &AppStore, todo: TodoItem) {
    store.todos().write().insert(0, todo);
}

/// Update a todo in the store by ID
pub fn store_update_todo(store: &AppStore, updated: TodoItem) {
    store.todos().write().iter_mut()
        .find(|todo| todo.id == updated.id)
        .map(|todo| *todo = updated);
}
