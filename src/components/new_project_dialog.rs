//! New Project Dialog Component
//!
//! Modal form for creating a project: name, description, directory
//! path and an accent color. The path becomes the project's first
//! file link.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, AddLinkArgs, CreateProjectArgs};
use crate::context::AppContext;
use crate::store::{store_insert_project, use_app_store};
use crate::time::now_iso;

/// Accent colors offered by the picker
const PROJECT_COLORS: &[&str] = &[
    "#8B5CF6", // Vivid Purple
    "#D946EF", // Magenta Pink
    "#F97316", // Bright Orange
    "#0EA5E9", // Ocean Blue
    "#10B981", // Emerald
    "#F43F5E", // Rose
    "#6366F1", // Indigo
    "#FBBF24", // Amber
];

#[component]
pub fn NewProjectDialog(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (project_path, set_project_path) = signal(String::new());
    let (selected_color, set_selected_color) = signal(PROJECT_COLORS[0].to_string());

    let create_project = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let owner = match ctx.owner.get() {
            Some(o) => o,
            None => return,
        };
        let name_value = name.get();
        let description_value = description.get();
        let path_value = project_path.get();
        if name_value.trim().is_empty() || description_value.trim().is_empty() || path_value.trim().is_empty() {
            return;
        }
        let color = selected_color.get();

        spawn_local(async move {
            let ts = now_iso();
            let args = CreateProjectArgs {
                owner,
                name: &name_value,
                description: &description_value,
                color: &color,
                timestamp: &ts,
            };
            let mut project = match commands::create_project(&args).await {
                Ok(p) => p,
                Err(e) => {
                    ctx.notify_error("Failed to create project", &e);
                    return;
                }
            };

            // Every new project starts with one file link to its directory
            let link_args = AddLinkArgs {
                project_id: project.id,
                kind: "file",
                path: &path_value,
                timestamp: &ts,
            };
            match commands::add_link(&link_args).await {
                Ok(link) => project.links = vec![link],
                Err(e) => {
                    ctx.notify_error("Failed to add link", &e);
                    return;
                }
            }

            let project_name = project.name.clone();
            store_insert_project(&store, project);
            ctx.notify("Project Created", &format!("{} has been created successfully.", project_name));

            set_name.set(String::new());
            set_description.set(String::new());
            set_project_path.set(String::new());
            set_selected_color.set(PROJECT_COLORS[0].to_string());
            set_open.set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay" on:click=move |_| set_open.set(false)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <form on:submit=create_project>
                        <h2>"Create New Project"</h2>
                        <p class="dialog-description">"Add a new project to track your development progress."</p>

                        <input
                            type="text"
                            placeholder="Project name"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_name.set(input.value());
                            }
                        />
                        <textarea
                            placeholder="Project description"
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_description.set(input.value());
                            }
                        ></textarea>
                        <input
                            type="text"
                            placeholder="Project directory path"
                            prop:value=move || project_path.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_project_path.set(input.value());
                            }
                        />

                        <label class="color-label">"Project Color"</label>
                        <div class="color-row">
                            {PROJECT_COLORS.iter().map(|color| {
                                let value = color.to_string();
                                let value_clone = value.clone();
                                let is_selected = move || selected_color.get() == value;
                                view! {
                                    <button
                                        type="button"
                                        class=move || if is_selected() { "color-swatch selected" } else { "color-swatch" }
                                        style=format!("background-color: {};", color)
                                        on:click=move |_| set_selected_color.set(value_clone.clone())
                                    ></button>
                                }
                            }).collect_view()}
                        </div>

                        <div class="dialog-footer">
                            <button type="button" on:click=move |_| set_open.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" class="primary-btn">"Create Project"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
