//! UI Components
//!
//! Reusable Leptos components.

mod notice_stack;
mod progress_bar;
mod delete_confirm_button;
mod letter_reversal;
mod project_header;
mod project_overview;
mod project_grid;
mod project_card;
mod project_details;
mod new_project_dialog;
mod quick_access;
mod quick_tasks;

pub use notice_stack::NoticeStack;
pub use progress_bar::ProgressBar;
pub use delete_confirm_button::DeleteConfirmButton;
pub use letter_reversal::LetterReversal;
pub use project_header::ProjectHeader;
pub use project_overview::ProjectOverview;
pub use project_grid::ProjectGrid;
pub use project_card::ProjectCard;
pub use project_details::ProjectDetails;
pub use new_project_dialog::NewProjectDialog;
pub use quick_access::QuickAccess;
pub use quick_tasks::QuickTasks;
