//! UI Components
//!
//! Leptos components reading from the UI store.

mod auth_screen;
mod header;
mod new_task_form;
mod notice;
mod stats_panel;
mod task_list;

pub use auth_screen::AuthScreen;
pub use header::Header;
pub use new_task_form::NewTaskForm;
pub use notice::{FormMessage, LoadingSpinner, ToastHost};
pub use stats_panel::StatsPanel;
pub use task_list::TaskList;
