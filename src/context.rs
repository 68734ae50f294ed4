//! Application Context
//!
//! Shared state provided via Leptos Context API: the resolved owner
//! identity, per-collection reload triggers driven by the change
//! subscriptions, and the transient notice stack.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays on screen
const NOTICE_MILLIS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient toast-style message
#[derive(Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owner identity resolved by the session bootstrap
    pub owner: Memo<Option<u32>>,
    /// Re-fetch trigger per collection - read
    pub projects_rev: ReadSignal<u32>,
    set_projects_rev: WriteSignal<u32>,
    pub quick_links_rev: ReadSignal<u32>,
    set_quick_links_rev: WriteSignal<u32>,
    pub todos_rev: ReadSignal<u32>,
    set_todos_rev: WriteSignal<u32>,
    /// Transient notices - read
    pub notices: ReadSignal<Vec<Notice>>,
    set_notices: WriteSignal<Vec<Notice>>,
    notice_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(owner: Memo<Option<u32>>) -> Self {
        let (projects_rev, set_projects_rev) = signal(0u32);
        let (quick_links_rev, set_quick_links_rev) = signal(0u32);
        let (todos_rev, set_todos_rev) = signal(0u32);
        let (notices, set_notices) = signal(Vec::new());
        Self {
            owner,
            projects_rev,
            set_projects_rev,
            quick_links_rev,
            set_quick_links_rev,
            todos_rev,
            set_todos_rev,
            notices,
            set_notices,
            notice_seq: StoredValue::new(0),
        }
    }

    /// Trigger a re-fetch of the projects collection
    pub fn reload_projects(&self) {
        self.set_projects_rev.update(|v| *v += 1);
    }

    /// Trigger a re-fetch of the quick links collection
    pub fn reload_quick_links(&self) {
        self.set_quick_links_rev.update(|v| *v += 1);
    }

    /// Trigger a re-fetch of the todos collection
    pub fn reload_todos(&self) {
        self.set_todos_rev.update(|v| *v += 1);
    }

    /// Show an informational notice
    pub fn notify(&self, title: &str, message: &str) {
        self.push_notice(NoticeLevel::Info, title, message);
    }

    /// Show an error notice; `message` is the backend text verbatim
    pub fn notify_error(&self, title: &str, message: &str) {
        self.push_notice(NoticeLevel::Error, title, message);
    }

    pub fn dismiss(&self, id: u32) {
        self.set_notices.update(|notices| notices.retain(|n| n.id != id));
    }

    fn push_notice(&self, level: NoticeLevel, title: &str, message: &str) {
        let id = self.notice_seq.get_value() + 1;
        self.notice_seq.set_value(id);

        self.set_notices.update(|notices| {
            notices.push(Notice {
                id,
                level,
                title: title.to_string(),
                message: message.to_string(),
            })
        });

        let set_notices = self.set_notices;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MILLIS).await;
            set_notices.update(|notices| notices.retain(|n| n.id != id));
        });
    }
}
