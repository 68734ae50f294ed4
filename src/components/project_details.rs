//! Project Details Component
//!
//! Modal over one project: editable name/description, stepped progress
//! controls, links, tasks and the activity log. Reads the project
//! through the store so optimistic merges and subscription re-fetches
//! both show up immediately.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::clipboard;
use crate::commands;
use crate::context::AppContext;
use crate::models::step_progress;
use crate::store::{store_apply_project, use_app_store, AppStateStoreFields};
use crate::time::{now_iso, time_ago};
use super::ProgressBar;

#[component]
pub fn ProjectDetails(project_id: u32, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let project = Memo::new(move |_| {
        store.projects().get().into_iter().find(|p| p.id == project_id)
    });

    let (new_url_path, set_new_url_path) = signal(String::new());
    let (new_file_path, set_new_file_path) = signal(String::new());
    let (new_task, set_new_task) = signal(String::new());
    let (is_editing, set_is_editing) = signal(false);
    let (edited_name, set_edited_name) = signal(String::new());
    let (edited_description, set_edited_description) = signal(String::new());

    // Close when the project disappears under us (deleted elsewhere)
    Effect::new(move |_| {
        if project.get().is_none() {
            on_close.run(());
        }
    });

    // Opening the details counts as project activity (best effort:
    // a failed log write is only logged, the dialog stays usable)
    Effect::new(move |_| {
        spawn_local(async move {
            let ts = now_iso();
            match commands::add_activity_log(project_id, "project_opened", "Project opened", &ts).await {
                Ok(log) => store_apply_project(&store, project_id, |p| p.activity_logs.insert(0, log)),
                Err(e) => web_sys::console::warn_1(&format!("project_opened log failed: {}", e).into()),
            }
        });
    });

    // Remote write, then the activity log write, then the local merge.
    // A failed log write aborts the merge; the next re-fetch converges.
    let change_progress = move |up: bool| {
        let current = match project.get_untracked() {
            Some(p) => p.progress,
            None => return,
        };
        let new_progress = step_progress(current, up);

        spawn_local(async move {
            let ts = now_iso();
            let updated = match commands::set_project_progress(project_id, new_progress as i64, &ts).await {
                Ok(p) => p,
                Err(e) => {
                    ctx.notify_error("Failed to update progress", &e);
                    return;
                }
            };

            let description = format!(
                "Progress {} to {}%",
                if up { "increased" } else { "decreased" },
                new_progress
            );
            let log = match commands::add_activity_log(project_id, "progress_updated", &description, &ts).await {
                Ok(log) => log,
                Err(e) => {
                    ctx.notify_error("Failed to log progress update", &e);
                    return;
                }
            };

            store_apply_project(&store, project_id, |p| {
                p.progress = updated.progress;
                p.updated_at = updated.updated_at.clone();
                p.activity_logs.insert(0, log);
            });
            ctx.notify("Progress Updated", &format!("Project progress is now {}%", new_progress));
        });
    };

    let toggle_edit = move |_| {
        if is_editing.get() {
            let name = edited_name.get();
            let description = edited_description.get();
            if name.trim().is_empty() {
                ctx.notify_error("Invalid name", "Project name must not be empty");
                return;
            }
            spawn_local(async move {
                let ts = now_iso();
                match commands::update_project(project_id, &name, &description, &ts).await {
                    Ok(updated) => {
                        store_apply_project(&store, project_id, |p| {
                            p.name = updated.name.clone();
                            p.description = updated.description.clone();
                            p.updated_at = updated.updated_at.clone();
                        });
                        ctx.notify("Project Updated", "Project details have been updated successfully.");
                    }
                    Err(e) => ctx.notify_error("Failed to update project", &e),
                }
            });
            set_is_editing.set(false);
        } else {
            if let Some(p) = project.get_untracked() {
                set_edited_name.set(p.name);
                set_edited_description.set(p.description);
            }
            set_is_editing.set(true);
        }
    };

    let add_links = move |_| {
        let url_path = new_url_path.get();
        let file_path = new_file_path.get();
        if url_path.trim().is_empty() && file_path.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            let ts = now_iso();
            let mut added = Vec::new();
            for (kind, path) in [("url", url_path), ("file", file_path)] {
                if path.trim().is_empty() {
                    continue;
                }
                let args = commands::AddLinkArgs { project_id, kind, path: &path, timestamp: &ts };
                match commands::add_link(&args).await {
                    Ok(link) => added.push(link),
                    Err(e) => {
                        ctx.notify_error("Failed to add links", &e);
                        return;
                    }
                }
            }

            let description = format!("Added {} new link(s)", added.len());
            let log = match commands::add_activity_log(project_id, "link_added", &description, &ts).await {
                Ok(log) => log,
                Err(e) => {
                    ctx.notify_error("Failed to log link addition", &e);
                    return;
                }
            };

            store_apply_project(&store, project_id, |p| {
                for link in added.into_iter().rev() {
                    p.links.insert(0, link);
                }
                p.activity_logs.insert(0, log);
                p.updated_at = ts.clone();
            });
            set_new_url_path.set(String::new());
            set_new_file_path.set(String::new());
            ctx.notify("Links Added", "Project links have been updated");
        });
    };

    let add_task = move |_| {
        let content = new_task.get();
        if content.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            let ts = now_iso();
            match commands::add_task(project_id, &content, &ts).await {
                Ok(task) => {
                    store_apply_project(&store, project_id, |p| {
                        p.tasks.insert(0, task);
                        p.updated_at = ts.clone();
                    });
                    set_new_task.set(String::new());
                    ctx.notify("Task Added", "New task has been added to the project");
                }
                Err(e) => ctx.notify_error("Failed to add task", &e),
            }
        });
    };

    let toggle_task = move |task_id: u32, completed_now: bool| {
        spawn_local(async move {
            match commands::set_task_completed(task_id, !completed_now).await {
                Ok(updated) => {
                    let ts = now_iso();
                    let content = updated.content.clone();
                    store_apply_project(&store, project_id, |p| {
                        if let Some(task) = p.tasks.iter_mut().find(|t| t.id == task_id) {
                            *task = updated;
                        }
                        p.updated_at = ts.clone();
                    });
                    ctx.notify(
                        "Task Updated",
                        &format!("Task marked as {}", if completed_now { "incomplete" } else { "complete" }),
                    );

                    // Completing a task lands in the activity log (best effort)
                    if !completed_now {
                        let description = format!("Completed task: {}", content);
                        match commands::add_activity_log(project_id, "task_completed", &description, &ts).await {
                            Ok(log) => store_apply_project(&store, project_id, |p| p.activity_logs.insert(0, log)),
                            Err(e) => web_sys::console::warn_1(&format!("task_completed log failed: {}", e).into()),
                        }
                    }
                }
                Err(e) => ctx.notify_error("Failed to update task", &e),
            }
        });
    };

    let delete_link = move |link_id: u32| {
        spawn_local(async move {
            match commands::delete_link(link_id).await {
                Ok(()) => {
                    let ts = now_iso();
                    store_apply_project(&store, project_id, |p| {
                        p.links.retain(|l| l.id != link_id);
                        p.updated_at = ts.clone();
                    });
                    ctx.notify("Link Removed", "Link has been removed from the project");
                }
                Err(e) => ctx.notify_error("Failed to delete link", &e),
            }
        });
    };

    let open_link = move |kind: String, path: String| {
        spawn_local(async move {
            match kind.as_str() {
                "url" => {
                    if let Err(e) = commands::open_external(&path).await {
                        ctx.notify_error("Failed to open link", &e);
                    }
                }
                "file" => match clipboard::copy_text(&path).await {
                    Ok(()) => ctx.notify("Path Copied", "Project directory path has been copied to clipboard"),
                    Err(e) => ctx.notify_error("Clipboard error", &e),
                },
                _ => {}
            }
        });
    };

    let color = move || project.get().map(|p| p.color).unwrap_or_else(|| "#8B5CF6".to_string());
    let progress = move || project.get().map(|p| p.progress).unwrap_or(0);

    view! {
        <div class="dialog-overlay" on:click=move |_| on_close.run(())>
            <div class="dialog project-details" on:click=|ev| ev.stop_propagation()>
                <div class="details-header">
                    <Show
                        when=move || is_editing.get()
                        fallback=move || view! {
                            <h2 style=move || format!("color: {};", color())>
                                {move || project.get().map(|p| p.name).unwrap_or_default()}
                            </h2>
                        }
                    >
                        <input
                            type="text"
                            prop:value=move || edited_name.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_edited_name.set(input.value());
                            }
                        />
                    </Show>
                    <div class="details-header-actions">
                        <button class="edit-btn" on:click=toggle_edit>
                            {move || if is_editing.get() { "Save" } else { "Edit" }}
                        </button>
                        <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                </div>

                <Show when=move || is_editing.get()>
                    <div class="details-section">
                        <h3>"Description"</h3>
                        <textarea
                            prop:value=move || edited_description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_edited_description.set(input.value());
                            }
                        ></textarea>
                    </div>
                </Show>

                <div class="details-section">
                    <h3>"Progress"</h3>
                    <div class="progress-controls">
                        <button
                            prop:disabled=move || progress() == 0
                            on:click=move |_| change_progress(false)
                        >
                            "−"
                        </button>
                        <ProgressBar value=Signal::derive(progress) />
                        <button
                            prop:disabled=move || progress() >= 100
                            on:click=move |_| change_progress(true)
                        >
                            "+"
                        </button>
                        <span class="progress-value">{move || format!("{}%", progress())}</span>
                    </div>
                </div>

                <div class="details-section">
                    <h3>"Project Links"</h3>
                    <input
                        type="text"
                        placeholder="URL (e.g., documentation, research)"
                        prop:value=move || new_url_path.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_new_url_path.set(input.value());
                        }
                    />
                    <input
                        type="text"
                        placeholder="Project Directory Path"
                        prop:value=move || new_file_path.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_new_file_path.set(input.value());
                        }
                    />
                    <button class="primary-btn" on:click=add_links>"Add Links"</button>

                    <For
                        each=move || project.get().map(|p| p.links).unwrap_or_default()
                        key=|link| (link.id, link.path.clone())
                        children=move |link| {
                            let link_id = link.id;
                            let kind = link.kind.clone();
                            let path = link.path.clone();
                            let ago = time_ago(&link.timestamp);
                            let glyph = if kind == "file" { "📁" } else { "↗" };
                            view! {
                                <div class="link-row">
                                    <button
                                        class="link-open"
                                        on:click=move |_| open_link(kind.clone(), path.clone())
                                    >
                                        <span class="link-glyph">{glyph}</span>
                                        <span class="link-path">{link.path.clone()}</span>
                                    </button>
                                    <span class="row-note">{ago} " ago"</span>
                                    <Show when=move || is_editing.get()>
                                        <button class="delete-btn" on:click=move |_| delete_link(link_id)>
                                            "−"
                                        </button>
                                    </Show>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="details-section">
                    <h3>"Tasks"</h3>
                    <form
                        class="task-add-row"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            add_task(());
                        }
                    >
                        <input
                            type="text"
                            placeholder="Add a new task..."
                            prop:value=move || new_task.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_new_task.set(input.value());
                            }
                        />
                        <button type="submit">"Add Task"</button>
                    </form>
                    <For
                        each=move || project.get().map(|p| p.tasks).unwrap_or_default()
                        key=|task| (task.id, task.completed)
                        children=move |task| {
                            let task_id = task.id;
                            let completed = task.completed;
                            let ago = time_ago(&task.timestamp);
                            view! {
                                <div class="task-row" on:click=move |_| toggle_task(task_id, completed)>
                                    <span class=if completed { "todo-check done" } else { "todo-check" }>
                                        {if completed { "✓" } else { "" }}
                                    </span>
                                    <div class="task-body">
                                        <p class=if completed { "todo-content done" } else { "todo-content" }>
                                            {task.content}
                                        </p>
                                        <p class="row-note">"Added " {ago} " ago"</p>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="details-section">
                    <h3>"Activity Log"</h3>
                    <For
                        each=move || project.get().map(|p| p.activity_logs).unwrap_or_default()
                        key=|log| log.id
                        children=move |log| {
                            let ago = time_ago(&log.timestamp);
                            view! {
                                <div class="activity-row">
                                    <p>{log.description}</p>
                                    <p class="row-note">{ago} " ago"</p>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
