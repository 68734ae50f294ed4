//! Notice Stack Component
//!
//! Transient toast-style notices; backend error text is shown verbatim.

use leptos::prelude::*;

use crate::context::{AppContext, NoticeLevel};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="notice-stack">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = match notice.level {
                        NoticeLevel::Info => "notice",
                        NoticeLevel::Error => "notice notice-error",
                    };
                    view! {
                        <div class=class on:click=move |_| ctx.dismiss(id)>
                            <p class="notice-title">{notice.title}</p>
                            <p class="notice-message">{notice.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
