//! UI State Store
//!
//! Reactive mirror of what the screen shows, built on `reactive_stores` for
//! field-level reactivity. `StoreView` is the browser `View`: the controller
//! writes into the store and components read from it.

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::TOAST_MS;
use crate::controller::TaskInput;
use crate::filter::FilterMode;
use crate::models::{Task, User};
use crate::render::{render_cards, TaskCard};
use crate::stats::TaskStats;
use crate::view::{AuthTab, MessageSlot, Notice, Screen, View};

/// Navigation tab in the header
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavTab {
    #[default]
    Home,
    Tasks,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// A toast with the id its hide timer checks against
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Everything the components render
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    pub screen: Screen,
    pub auth_tab: AuthTab,
    pub nav: NavTab,
    /// Signed-in profile
    pub user: Option<User>,
    /// Active filter, for the filter bar highlight
    pub filter: FilterMode,
    /// Visible task cards, rebuilt on every render
    pub cards: Vec<TaskCard>,
    pub stats: TaskStats,
    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    pub task_form: TaskInput,
    pub login_message: Option<Notice>,
    pub signup_message: Option<Notice>,
    pub create_message: Option<Notice>,
    pub toast: Option<Toast>,
    pub next_toast_id: u64,
    /// Requests in flight; the spinner shows while non-zero
    pub pending_requests: u32,
}

pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// `View` writing into the UI store
#[derive(Clone, Copy)]
pub struct StoreView {
    store: UiStore,
}

impl StoreView {
    pub fn new(store: UiStore) -> Self {
        Self { store }
    }

    fn set_message(&self, slot: MessageSlot, notice: Option<Notice>) {
        match slot {
            MessageSlot::Login => self.store.login_message().set(notice),
            MessageSlot::Signup => self.store.signup_message().set(notice),
            MessageSlot::CreateTask => self.store.create_message().set(notice),
        }
    }
}

#[async_trait(?Send)]
impl View for StoreView {
    fn render_auth(&self, screen: Screen, user: Option<&User>) {
        self.store.screen().set(screen);
        self.store.user().set(user.cloned());
    }

    fn render_tasks(&self, filter: FilterMode, tasks: &[Task]) {
        self.store.filter().set(filter);
        self.store.cards().set(render_cards(tasks));
    }

    fn render_stats(&self, stats: TaskStats) {
        self.store.stats().set(stats);
    }

    fn show_message(&self, slot: MessageSlot, notice: Notice) {
        self.set_message(slot, Some(notice));
    }

    fn hide_message(&self, slot: MessageSlot) {
        self.set_message(slot, None);
    }

    fn show_toast(&self, notice: Notice) {
        let id = self.store.next_toast_id().get_untracked() + 1;
        self.store.next_toast_id().set(id);
        self.store.toast().set(Some(Toast { id, notice }));

        // Only hide the toast this call put up
        let store = self.store;
        Timeout::new(TOAST_MS, move || {
            store.toast().update(|toast| {
                if toast.as_ref().map(|t| t.id) == Some(id) {
                    *toast = None;
                }
            });
        })
        .forget();
    }

    fn set_loading(&self, loading: bool) {
        self.store.pending_requests().update(|n| {
            if loading {
                *n += 1;
            } else {
                *n = n.saturating_sub(1);
            }
        });
    }

    fn switch_auth_tab(&self, tab: AuthTab) {
        self.store.auth_tab().set(tab);
    }

    fn clear_auth_forms(&self) {
        self.store.login_form().set(LoginForm::default());
        self.store.signup_form().set(SignupForm::default());
        self.store.login_message().set(None);
        self.store.signup_message().set(None);
    }

    fn reset_task_form(&self) {
        self.store.task_form().set(TaskInput::default());
    }

    fn confirm(&self, prompt: &str) -> bool {
        window().confirm_with_message(prompt).unwrap_or(false)
    }

    async fn wait(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
