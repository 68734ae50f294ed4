//! Quick Tasks Component
//!
//! Ad-hoc to-do list, independent of any project. Add with Enter or
//! the button, click a row to toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::AppContext;
use crate::store::{store_insert_todo, store_update_todo, use_app_store, AppStateStoreFields};
use crate::time::now_iso;

#[component]
pub fn QuickTasks() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (new_todo, set_new_todo) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let owner = match ctx.owner.get() {
            Some(o) => o,
            None => return,
        };
        let content = new_todo.get();
        if content.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            let ts = now_iso();
            match commands::add_todo(owner, &content, &ts).await {
                Ok(todo) => {
                    store_insert_todo(&store, todo);
                    set_new_todo.set(String::new());
                    ctx.notify("Task Added", "New task has been added to your list.");
                }
                Err(e) => ctx.notify_error("Failed to add task", &e),
            }
        });
    };

    view! {
        <div class="quick-tasks">
            <h2>"Quick Tasks"</h2>
            <div class="card">
                <form class="quick-task-form" on:submit=add_todo>
                    <input
                        type="text"
                        placeholder="Add a new task..."
                        prop:value=move || new_todo.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_new_todo.set(input.value());
                        }
                    />
                    <button type="submit">"Add Task"</button>
                </form>
                <For
                    each=move || store.todos().get()
                    key=|todo| (todo.id, todo.completed)
                    children=move |todo| {
                        let id = todo.id;
                        let completed = todo.completed;
                        let toggle = move |_| {
                            spawn_local(async move {
                                match commands::set_todo_completed(id, !completed).await {
                                    Ok(updated) => {
                                        store_update_todo(&store, updated);
                                        ctx.notify("Task Updated", "Task status has been updated.");
                                    }
                                    Err(e) => ctx.notify_error("Failed to update task", &e),
                                }
                            });
                        };
                        view! {
                            <div class="todo-row" on:click=toggle>
                                <span class=if completed { "todo-check done" } else { "todo-check" }>
                                    {if completed { "✓" } else { "" }}
                                </span>
                                <p class=if completed { "todo-content done" } else { "todo-content" }>
                                    {todo.content}
                                </p>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
