//! Devboard Frontend App
//!
//! The synchronization core lives here: session bootstrap, one entity
//! fetcher and one change subscription per collection. Components get
//! their data through the store and context.
//!
//! Two independent paths update the store: mutation handlers merge
//! optimistically after a confirmed write, and change subscriptions
//! re-run the fetchers. Both project the same remote truth, so the
//! last completed one wins.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    LetterReversal, NewProjectDialog, NoticeStack, ProjectDetails, ProjectGrid, ProjectHeader,
    ProjectOverview, QuickAccess, QuickTasks,
};
use crate::context::AppContext;
use crate::events::Subscription;
use crate::models::Session;
use crate::store::{AppState, AppStateStoreFields};
use crate::time::now_iso;

/// Where the session bootstrap currently stands
#[derive(Clone, PartialEq)]
enum AuthPhase {
    Checking,
    Ready(Session),
    Failed(String),
}

/// Resolve an identity with no login form: existing session, else
/// sign-in with the configured operator pair, else sign-up. On success,
/// best-effort user upsert and adoption of ownerless quick links.
async fn bootstrap_session() -> Result<Session, String> {
    if let Some(session) = commands::current_session().await? {
        web_sys::console::log_1(&format!("[AUTH] existing session: {}", session.email).into());
        return Ok(session);
    }

    let creds = commands::operator_credentials().await?;
    let session = match commands::sign_in(&creds.email, &creds.token).await {
        Ok(session) => session,
        Err(e) if e.contains("invalid credentials") => {
            web_sys::console::log_1(&"[AUTH] unknown credentials, provisioning operator".into());
            commands::sign_up(&creds.email, &creds.token)
                .await
                .map_err(|e| format!("Failed to create user: {}", e))?
        }
        Err(e) => return Err(format!("Authentication error: {}", e)),
    };

    // Best effort only; a failure here never blocks the session
    let now = now_iso();
    if let Err(e) = commands::upsert_user(&session.email, &now).await {
        web_sys::console::warn_1(&format!("[AUTH] user upsert failed: {}", e).into());
    }
    if let Err(e) = commands::claim_quick_links(session.user_id).await {
        web_sys::console::warn_1(&format!("[AUTH] quick link claim failed: {}", e).into());
    }

    Ok(session)
}

#[component]
pub fn App() -> impl IntoView {
    let (auth_phase, set_auth_phase) = signal(AuthPhase::Checking);
    let (bootstrap_attempt, set_bootstrap_attempt) = signal(0u32);

    let store = Store::new(AppState::default());
    provide_context(store);

    let owner = Memo::new(move |_| match auth_phase.get() {
        AuthPhase::Ready(session) => Some(session.user_id),
        _ => None,
    });
    let ctx = AppContext::new(owner);
    provide_context(ctx);

    // Session bootstrap; re-runs on manual retry only
    Effect::new(move |_| {
        let _ = bootstrap_attempt.get();
        set_auth_phase.set(AuthPhase::Checking);
        spawn_local(async move {
            match bootstrap_session().await {
                Ok(session) => {
                    web_sys::console::log_1(
                        &format!("[AUTH] signed in as {} (id {})", session.email, session.user_id).into(),
                    );
                    set_auth_phase.set(AuthPhase::Ready(session));
                }
                Err(e) => set_auth_phase.set(AuthPhase::Failed(e)),
            }
        });
    });

    // Auth collaborator state stream: a dropped session blocks the view
    let auth_sub = StoredValue::new_local(None::<Subscription>);
    Effect::new(move |_| {
        spawn_local(async move {
            let result = Subscription::auth_state(move |session| {
                if session.is_none() {
                    set_auth_phase.set(AuthPhase::Failed("Session expired".to_string()));
                }
            })
            .await;
            match result {
                Ok(sub) => auth_sub.set_value(Some(sub)),
                Err(e) => web_sys::console::warn_1(&e.into()),
            }
        });
    });
    on_cleanup(move || auth_sub.set_value(None));

    // Entity fetchers: full owner-scoped re-fetch per collection.
    // On error the previous local state stays untouched.
    Effect::new(move |_| {
        let _ = ctx.projects_rev.get();
        let owner_id = match ctx.owner.get() {
            Some(o) => o,
            None => return,
        };
        spawn_local(async move {
            match commands::list_projects(owner_id).await {
                Ok(loaded) => *store.projects().write() = loaded,
                Err(e) => ctx.notify_error("Failed to load projects", &e),
            }
        });
    });

    Effect::new(move |_| {
        let _ = ctx.quick_links_rev.get();
        let owner_id = match ctx.owner.get() {
            Some(o) => o,
            None => return,
        };
        spawn_local(async move {
            match commands::list_quick_links(owner_id).await {
                Ok(loaded) => *store.quick_links().write() = loaded,
                Err(e) => ctx.notify_error("Failed to load quick links", &e),
            }
        });
    });

    Effect::new(move |_| {
        let _ = ctx.todos_rev.get();
        let owner_id = match ctx.owner.get() {
            Some(o) => o,
            None => return,
        };
        spawn_local(async move {
            match commands::list_todos(owner_id).await {
                Ok(loaded) => *store.todos().write() = loaded,
                Err(e) => ctx.notify_error("Failed to load todos", &e),
            }
        });
    });

    // Change subscriptions: one channel per collection, child tables
    // funnel into the projects fetcher. Re-subscribes when the owner
    // changes; guards from the previous identity are dropped first.
    let change_subs = StoredValue::new_local(Vec::<Subscription>::new());
    Effect::new(move |_| {
        let owner_id = match ctx.owner.get() {
            Some(o) => o,
            None => return,
        };
        change_subs.set_value(Vec::new());
        spawn_local(async move {
            let mut subs = Vec::new();

            for table in ["projects", "links", "tasks", "activity_logs"] {
                let result = Subscription::changes(table, move |change| {
                    if change.owner.is_none() || change.owner == Some(owner_id) {
                        ctx.reload_projects();
                    }
                })
                .await;
                match result {
                    Ok(sub) => subs.push(sub),
                    Err(e) => ctx.notify_error("Subscription failed", &e),
                }
            }

            match Subscription::changes("quick_links", move |change| {
                if change.owner.is_none() || change.owner == Some(owner_id) {
                    ctx.reload_quick_links();
                }
            })
            .await
            {
                Ok(sub) => subs.push(sub),
                Err(e) => ctx.notify_error("Subscription failed", &e),
            }

            match Subscription::changes("todos", move |change| {
                if change.owner == Some(owner_id) {
                    ctx.reload_todos();
                }
            })
            .await
            {
                Ok(sub) => subs.push(sub),
                Err(e) => ctx.notify_error("Subscription failed", &e),
            }

            change_subs.set_value(subs);
        });
    });
    on_cleanup(move || change_subs.set_value(Vec::new()));

    view! {
        <div class="app">
            {move || match auth_phase.get() {
                AuthPhase::Checking => view! {
                    <div class="auth-screen">"Authenticating..."</div>
                }.into_any(),
                AuthPhase::Failed(error) => view! {
                    <div class="auth-screen auth-error">
                        <p>"Error: " {error}</p>
                        <button on:click=move |_| set_bootstrap_attempt.update(|v| *v += 1)>
                            "Retry"
                        </button>
                    </div>
                }.into_any(),
                AuthPhase::Ready(_) => view! { <Dashboard /> }.into_any(),
            }}
            <NoticeStack />
        </div>
    }
}

/// Main dashboard layout, rendered once a session is resolved
#[component]
fn Dashboard() -> impl IntoView {
    let (new_project_open, set_new_project_open) = signal(false);
    let (selected_project, set_selected_project) = signal::<Option<u32>>(None);

    view! {
        <div class="dashboard">
            <LetterReversal />
            <ProjectHeader on_new_project=Callback::new(move |_: ()| set_new_project_open.set(true)) />
            <ProjectOverview />
            <QuickAccess />
            <QuickTasks />
            <ProjectGrid on_select=Callback::new(move |id: u32| set_selected_project.set(Some(id))) />

            <NewProjectDialog open=new_project_open set_open=set_new_project_open />

            {move || selected_project.get().map(|id| view! {
                <ProjectDetails
                    project_id=id
                    on_close=Callback::new(move |_: ()| set_selected_project.set(None))
                />
            })}
        </div>
    }
}
