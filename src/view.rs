//! View Capability
//!
//! Everything the controller needs from a rendering target. The browser
//! implementation lives in `store`; tests record calls instead.

use async_trait::async_trait;

use crate::filter::FilterMode;
use crate::models::{Task, User};
use crate::stats::TaskStats;

/// Top-level screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Auth,
    App,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

/// Inline message locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageSlot {
    Login,
    Signup,
    CreateTask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// A user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    #[cfg(test)]
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

#[async_trait(?Send)]
pub trait View {
    /// Show `screen`, with the signed-in profile when there is one
    fn render_auth(&self, screen: Screen, user: Option<&User>);

    /// Full rebuild of the task list from the already-filtered tasks
    fn render_tasks(&self, filter: FilterMode, tasks: &[Task]);

    fn render_stats(&self, stats: TaskStats);

    fn show_message(&self, slot: MessageSlot, notice: Notice);

    fn hide_message(&self, slot: MessageSlot);

    /// Transient notification; the view hides it on its own
    fn show_toast(&self, notice: Notice);

    fn set_loading(&self, loading: bool);

    fn switch_auth_tab(&self, tab: AuthTab);

    fn clear_auth_forms(&self);

    fn reset_task_form(&self);

    /// Blocking yes/no prompt
    fn confirm(&self, prompt: &str) -> bool;

    /// Suspend the calling handler for `millis`
    async fn wait(&self, millis: u32);
}
