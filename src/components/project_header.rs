//! Project Header Component
//!
//! Page title block with the New Project action.

use leptos::prelude::*;

#[component]
pub fn ProjectHeader(#[prop(into)] on_new_project: Callback<()>) -> impl IntoView {
    view! {
        <div class="project-header">
            <div>
                <h1>"Projects"</h1>
                <p class="subtitle">"Track and manage your development projects"</p>
            </div>
            <button class="primary-btn" on:click=move |_| on_new_project.run(())>
                "+ New Project"
            </button>
        </div>
    }
}
