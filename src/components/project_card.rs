//! Project Card Component
//!
//! One project in the grid: name, description, progress, updated-at,
//! per-link shortcut buttons and delete with inline confirm.
//! File links copy their path to the clipboard, URL links open in the
//! system browser.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clipboard;
use crate::commands;
use crate::context::AppContext;
use crate::models::Project;
use crate::store::{store_remove_project, use_app_store};
use crate::time::time_ago;
use super::{DeleteConfirmButton, ProgressBar};

#[component]
pub fn ProjectCard(project: Project, #[prop(into)] on_select: Callback<u32>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = project.id;
    let progress = project.progress;
    let updated_ago = time_ago(&project.updated_at);

    let delete_project = move |_: ()| {
        spawn_local(async move {
            match commands::delete_project(id).await {
                Ok(()) => {
                    store_remove_project(&store, id);
                    ctx.notify("Project Deleted", "The project has been successfully deleted.");
                }
                Err(e) => ctx.notify_error("Failed to delete project", &e),
            }
        });
    };

    let link_buttons = project
        .links
        .iter()
        .map(|link| {
            let kind = link.kind.clone();
            let path = link.path.clone();
            let glyph = if kind == "file" { "📁" } else { "↗" };
            view! {
                <button
                    class="link-shortcut-btn"
                    title=path.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let kind = kind.clone();
                        let path = path.clone();
                        spawn_local(async move {
                            match kind.as_str() {
                                "file" => match clipboard::copy_text(&path).await {
                                    Ok(()) => ctx.notify("Path Copied!", "Project directory path copied to clipboard."),
                                    Err(e) => ctx.notify_error("Clipboard error", &e),
                                },
                                "url" => {
                                    if let Err(e) = commands::open_external(&path).await {
                                        ctx.notify_error("Failed to open link", &e);
                                    }
                                }
                                _ => {}
                            }
                        });
                    }
                >
                    {glyph}
                </button>
            }
        })
        .collect_view();

    view! {
        <div
            class="card project-card"
            style=format!("border-left: 4px solid {};", project.color)
            on:click=move |_| on_select.run(id)
        >
            <div class="project-card-header">
                <div>
                    <p class="card-kicker">"Project"</p>
                    <h3 class="project-card-name">{project.name.clone()}</h3>
                </div>
                <div class="project-card-actions">
                    {link_buttons}
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        on_confirm=Callback::new(delete_project)
                    />
                </div>
            </div>
            <p class="project-card-description">{project.description.clone()}</p>
            <div class="progress-row">
                <span class="progress-label">"Progress"</span>
                <span class="progress-value">{format!("{}%", progress)}</span>
            </div>
            <ProgressBar value=Signal::derive(move || progress) color=project.color.clone() />
            <p class="updated-note">"Updated " {updated_ago} " ago"</p>
        </div>
    }
}
