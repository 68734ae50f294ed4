//! Quick Access Component
//!
//! Horizontally scrolled strip of user-scoped bookmarks with inline
//! edit, delete and an add form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, AddQuickLinkArgs};
use crate::context::AppContext;
use crate::store::{
    store_insert_quick_link, store_remove_quick_link, store_update_quick_link, use_app_store,
    AppStateStoreFields,
};
use crate::time::now_iso;
use super::DeleteConfirmButton;

fn icon_glyph(tag: &str) -> &'static str {
    match tag {
        "link" => "🔗",
        "github" => "🐙",
        "youtube" => "▶",
        "message-square" => "💬",
        "code" => "⌨",
        "book" => "📖",
        "briefcase" => "💼",
        _ => "↗",
    }
}

#[component]
pub fn QuickAccess() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (show_new_form, set_show_new_form) = signal(false);
    let (new_title, set_new_title) = signal(String::new());
    let (new_url, set_new_url) = signal(String::new());
    let (editing_id, set_editing_id) = signal::<Option<u32>>(None);
    let (editing_title, set_editing_title) = signal(String::new());
    let (editing_url, set_editing_url) = signal(String::new());

    let add_link = move |_| {
        let owner = match ctx.owner.get() {
            Some(o) => o,
            None => return,
        };
        let title = new_title.get();
        let url = new_url.get();
        if title.trim().is_empty() || url.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            let ts = now_iso();
            let args = AddQuickLinkArgs {
                owner,
                title: &title,
                url: &url,
                icon: "external-link",
                color: "#64748B",
                timestamp: &ts,
            };
            match commands::add_quick_link(&args).await {
                Ok(link) => {
                    store_insert_quick_link(&store, link);
                    set_new_title.set(String::new());
                    set_new_url.set(String::new());
                    set_show_new_form.set(false);
                    ctx.notify("Link Added", "Quick access link has been added successfully.");
                }
                Err(e) => ctx.notify_error("Failed to add quick link", &e),
            }
        });
    };

    let save_edit = move |_| {
        let id = match editing_id.get() {
            Some(id) => id,
            None => return,
        };
        let title = editing_title.get();
        let url = editing_url.get();
        if title.trim().is_empty() || url.trim().is_empty() {
            return;
        }

        spawn_local(async move {
            match commands::update_quick_link(id, &title, &url).await {
                Ok(link) => {
                    store_update_quick_link(&store, link);
                    set_editing_id.set(None);
                    ctx.notify("Link Updated", "Quick access link has been updated successfully.");
                }
                Err(e) => ctx.notify_error("Failed to update quick link", &e),
            }
        });
    };

    view! {
        <div class="quick-access">
            <h2>"Quick Access"</h2>
            <div class="quick-link-strip">
                <For
                    each=move || store.quick_links().get()
                    key=|link| (link.id, link.title.clone(), link.url.clone())
                    children=move |link| {
                        let id = link.id;
                        let url = link.url.clone();
                        let edit_title = link.title.clone();
                        let edit_url = link.url.clone();

                        let delete_link = move |_: ()| {
                            spawn_local(async move {
                                match commands::delete_quick_link(id).await {
                                    Ok(()) => {
                                        store_remove_quick_link(&store, id);
                                        ctx.notify("Link Removed", "Quick access link has been removed.");
                                    }
                                    Err(e) => ctx.notify_error("Failed to delete quick link", &e),
                                }
                            });
                        };

                        view! {
                            <Show
                                when=move || editing_id.get() == Some(id)
                                fallback=move || {
                                    let url = url.clone();
                                    let edit_title = edit_title.clone();
                                    let edit_url = edit_url.clone();
                                    let link = link.clone();
                                    view! {
                                        <div class="quick-link-card" style=format!("border-color: {}30;", link.color)>
                                            <button
                                                class="quick-link-open"
                                                on:click=move |_| {
                                                    let url = url.clone();
                                                    spawn_local(async move {
                                                        if let Err(e) = commands::open_external(&url).await {
                                                            ctx.notify_error("Failed to open link", &e);
                                                        }
                                                    });
                                                }
                                            >
                                                <span
                                                    class="quick-link-icon"
                                                    style=format!("background-color: {}10; color: {};", link.color, link.color)
                                                >
                                                    {icon_glyph(&link.icon)}
                                                </span>
                                                <span class="quick-link-title">{link.title.clone()}</span>
                                            </button>
                                            <div class="quick-link-actions">
                                                <button
                                                    class="edit-btn"
                                                    on:click=move |_| {
                                                        set_editing_title.set(edit_title.clone());
                                                        set_editing_url.set(edit_url.clone());
                                                        set_editing_id.set(Some(id));
                                                    }
                                                >
                                                    "✎"
                                                </button>
                                                <DeleteConfirmButton
                                                    button_class="delete-btn"
                                                    on_confirm=Callback::new(delete_link)
                                                />
                                            </div>
                                        </div>
                                    }
                                }
                            >
                                <div class="quick-link-card editing">
                                    <input
                                        type="text"
                                        placeholder="Link Title"
                                        prop:value=move || editing_title.get()
                                        on:input=move |ev| {
                                            let target = ev.target().unwrap();
                                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                            set_editing_title.set(input.value());
                                        }
                                    />
                                    <input
                                        type="text"
                                        placeholder="URL"
                                        prop:value=move || editing_url.get()
                                        on:input=move |ev| {
                                            let target = ev.target().unwrap();
                                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                            set_editing_url.set(input.value());
                                        }
                                    />
                                    <div class="quick-link-edit-actions">
                                        <button on:click=save_edit>"Save"</button>
                                        <button on:click=move |_| set_editing_id.set(None)>"Cancel"</button>
                                    </div>
                                </div>
                            </Show>
                        }
                    }
                />
                <button class="quick-link-add-card" on:click=move |_| set_show_new_form.set(true)>
                    "+ Add Link"
                </button>
            </div>

            <Show when=move || show_new_form.get()>
                <div class="quick-link-new-form">
                    <input
                        type="text"
                        placeholder="Link Title"
                        prop:value=move || new_title.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_new_title.set(input.value());
                        }
                    />
                    <input
                        type="text"
                        placeholder="URL"
                        prop:value=move || new_url.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_new_url.set(input.value());
                        }
                    />
                    <div class="quick-link-edit-actions">
                        <button on:click=add_link>"Add Link"</button>
                        <button on:click=move |_| set_show_new_form.set(false)>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
