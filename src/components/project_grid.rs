//! Project Grid Component
//!
//! Responsive card grid over the projects collection.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use super::ProjectCard;

#[component]
pub fn ProjectGrid(#[prop(into)] on_select: Callback<u32>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="project-grid">
            <For
                each=move || store.projects().get()
                // updated_at is part of the key so edits re-render the card
                key=|project| (project.id, project.updated_at.clone())
                children=move |project| {
                    view! { <ProjectCard project=project on_select=on_select /> }
                }
            />
            <Show when=move || store.projects().get().is_empty()>
                <p class="empty-grid">"No projects yet"</p>
            </Show>
        </div>
    }
}
