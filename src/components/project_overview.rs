//! Project Overview Component
//!
//! Headline numbers: total projects, overall average progress, and the
//! first few active projects.

use leptos::prelude::*;

use crate::models::overall_progress;
use crate::store::{use_app_store, AppStateStoreFields};
use super::ProgressBar;

#[component]
pub fn ProjectOverview() -> impl IntoView {
    let store = use_app_store();

    let overall = Signal::derive(move || overall_progress(&store.projects().get()));

    let active_projects = move || store.projects().get().into_iter().take(3).collect::<Vec<_>>();

    view! {
        <div class="project-overview">
            <h2>"Project Overview"</h2>
            <div class="overview-grid">
                <div class="card">
                    <h3>"Total Projects"</h3>
                    <p class="stat">{move || store.projects().get().len()}</p>
                </div>
                <div class="card">
                    <h3>"Overall Progress"</h3>
                    <ProgressBar value=overall />
                    <p class="stat-note">{move || format!("{}%", overall.get())}</p>
                </div>
                <div class="card">
                    <h3>"Active Projects"</h3>
                    <For
                        each=active_projects
                        key=|project| (project.id, project.progress)
                        children=move |project| {
                            view! {
                                <div class="active-project-row">
                                    <span class="active-project-name">{project.name}</span>
                                    <span class="active-project-progress">{format!("{}%", project.progress)}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
