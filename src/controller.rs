//! Application Controller
//!
//! Owns the application state and runs every user action:
//! validate → one request → apply the response → re-render.
//!
//! State sits behind a `RefCell` and is only borrowed between awaits, never
//! across one. Responses are applied in completion order; a slow response
//! can overwrite a newer one.

use std::cell::RefCell;

use crate::commands::Backend;
use crate::config::{CREATE_MESSAGE_MS, SIGNUP_REDIRECT_MS};
use crate::error::{AppError, AppResult};
use crate::filter::{filter_tasks, FilterMode};
use crate::models::{Credentials, NewTask, SignupRequest, TaskPatch, User, FALLBACK_OWNER_ID};
#[cfg(test)]
use crate::models::{Session, Task};
use crate::session::SessionStore;
#[cfg(test)]
use crate::stats::TaskStats;
use crate::storage::KeyValueStore;
use crate::tasks::TaskStore;
use crate::view::{AuthTab, MessageSlot, Notice, Screen, View};

// ========================
// User-facing Messages
// ========================

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const ENTER_TITLE: &str = "Please enter a task title";
pub const CONNECTION_RETRY: &str = "Connection error. Please try again.";
pub const CONNECTION_LOAD: &str = "Connection error. Could not load tasks.";
pub const CONNECTION: &str = "Connection error";

pub const LOGIN_SUCCESS: &str = "Welcome! Login successful.";
pub const LOGIN_FAILED: &str = "Invalid email or password";
pub const SIGNUP_SUCCESS: &str = "Account created! Please sign in.";
pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";
pub const LOGOUT_SUCCESS: &str = "Logged out successfully.";

pub const LOAD_FAILED: &str = "Failed to load tasks";
pub const CREATE_SUCCESS: &str = "Task created successfully!";
pub const CREATE_FAILED: &str = "Failed to create task";
pub const MARKED_COMPLETED: &str = "Task marked as completed!";
pub const MARKED_PENDING: &str = "Task marked as pending.";
pub const UPDATE_FAILED: &str = "Failed to update task";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";
pub const DELETE_SUCCESS: &str = "Task deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete task";

/// Raw input of the create-task form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
}

/// Everything the client knows
pub struct AppState<S> {
    pub session: SessionStore<S>,
    pub tasks: TaskStore,
    pub filter: FilterMode,
}

pub struct Controller<B, S, V> {
    backend: B,
    view: V,
    state: RefCell<AppState<S>>,
}

impl<B, S, V> Controller<B, S, V>
where
    B: Backend,
    S: KeyValueStore,
    V: View,
{
    pub fn new(backend: B, storage: S, view: V) -> Self {
        Self {
            backend,
            view,
            state: RefCell::new(AppState {
                session: SessionStore::new(storage),
                tasks: TaskStore::new(),
                filter: FilterMode::default(),
            }),
        }
    }

    // ========================
    // Startup
    // ========================

    /// Restore a persisted session and pick the initial screen
    pub async fn start(&self) {
        let user = self.state.borrow_mut().session.restore().map(|s| s.user.clone());
        match user {
            Some(user) => {
                self.view.render_auth(Screen::App, Some(&user));
                self.render();
                self.load_all().await;
            }
            None => {
                self.view.render_auth(Screen::Auth, None);
                self.view.switch_auth_tab(AuthTab::Login);
            }
        }
    }

    // ========================
    // Auth Flow
    // ========================

    pub fn switch_auth_tab(&self, tab: AuthTab) {
        self.view.switch_auth_tab(tab);
    }

    pub async fn login(&self, email: &str, password: &str) {
        let credentials = match validate_login(email, password) {
            Ok(credentials) => credentials,
            Err(e) => {
                self.view.show_message(MessageSlot::Login, Notice::error(e.to_string()));
                return;
            }
        };

        self.view.set_loading(true);
        let result = self
            .backend
            .login(&credentials)
            .await
            .and_then(|response| {
                let token = response.bearer().ok_or(AppError::MissingToken)?.to_string();
                let user = response.user.unwrap_or_else(|| {
                    // Compatibility shim: some deployments omit the profile
                    log::warn!("[AUTH] login response has no user, synthesizing one from the email");
                    User::from_email(&credentials.email)
                });
                Ok((token, user))
            });
        self.view.set_loading(false);

        match result {
            Ok((token, user)) => {
                let persisted = self.state.borrow_mut().session.establish(token, user.clone());
                if let Err(e) = persisted {
                    log::error!("[AUTH] could not persist session: {}", e);
                }
                self.view.clear_auth_forms();
                self.view.render_auth(Screen::App, Some(&user));
                self.view.show_toast(Notice::success(LOGIN_SUCCESS));
                self.load_all().await;
            }
            Err(e) => {
                log::warn!("[AUTH] login failed: {}", e);
                let text = e.user_message(LOGIN_FAILED, CONNECTION_RETRY);
                self.view.show_message(MessageSlot::Login, Notice::error(text));
            }
        }
    }

    pub async fn signup(&self, first_name: &str, last_name: &str, email: &str, password: &str) {
        let request = match validate_signup(first_name, last_name, email, password) {
            Ok(request) => request,
            Err(e) => {
                self.view.show_message(MessageSlot::Signup, Notice::error(e.to_string()));
                return;
            }
        };

        self.view.set_loading(true);
        let result = self.backend.signup(&request).await;
        self.view.set_loading(false);

        match result {
            Ok(()) => {
                log::info!("[AUTH] account created for {}", request.email);
                self.view.show_message(MessageSlot::Signup, Notice::success(SIGNUP_SUCCESS));
                self.view.wait(SIGNUP_REDIRECT_MS).await;
                self.view.clear_auth_forms();
                self.view.switch_auth_tab(AuthTab::Login);
            }
            Err(e) => {
                log::warn!("[AUTH] signup failed: {}", e);
                let text = e.user_message(SIGNUP_FAILED, CONNECTION_RETRY);
                self.view.show_message(MessageSlot::Signup, Notice::error(text));
            }
        }
    }

    pub fn logout(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.session.clear();
            state.tasks.clear();
        }
        self.view.clear_auth_forms();
        self.view.render_auth(Screen::Auth, None);
        self.render();
        self.view.show_toast(Notice::success(LOGOUT_SUCCESS));
    }

    // ========================
    // Task Sync
    // ========================

    /// Replace the list with the server's
    pub async fn load_all(&self) {
        let Some(token) = self.token() else {
            log::warn!("[TASKS] load skipped: not signed in");
            return;
        };

        self.view.set_loading(true);
        let result = self.backend.list_tasks(&token).await;
        self.view.set_loading(false);

        match result {
            Ok(tasks) => {
                log::debug!("[TASKS] loaded {} tasks", tasks.len());
                self.state.borrow_mut().tasks.replace_all(tasks);
                self.render();
            }
            Err(e) => {
                log::warn!("[TASKS] load failed: {}", e);
                self.view.show_toast(Notice::error(e.user_message(LOAD_FAILED, CONNECTION_LOAD)));
            }
        }
    }

    pub async fn create_task(&self, input: TaskInput) {
        let Some(title) = required(&input.title) else {
            self.view.show_message(MessageSlot::CreateTask, Notice::error(ENTER_TITLE));
            return;
        };
        let Some((token, owner_id)) = self.token_and_owner() else {
            log::warn!("[TASKS] create skipped: not signed in");
            return;
        };

        let new_task = NewTask {
            title,
            description: required(&input.description),
            owner_id,
            date: required(&input.date),
            time: required(&input.time),
            completed: false,
        };

        self.view.set_loading(true);
        let result = self.backend.create_task(&token, &new_task).await;
        self.view.set_loading(false);

        match result {
            Ok(task) => {
                log::debug!("[TASKS] created task {}", task.id);
                self.state.borrow_mut().tasks.push(task);
                self.render();
                self.view.reset_task_form();
                self.view.show_message(MessageSlot::CreateTask, Notice::success(CREATE_SUCCESS));
                self.view.wait(CREATE_MESSAGE_MS).await;
                self.view.hide_message(MessageSlot::CreateTask);
            }
            Err(e) => {
                log::warn!("[TASKS] create failed: {}", e);
                let text = e.user_message(CREATE_FAILED, CONNECTION_RETRY);
                self.view.show_message(MessageSlot::CreateTask, Notice::error(text));
            }
        }
    }

    pub async fn toggle_completion(&self, id: u32, completed: bool) {
        let Some(token) = self.token() else {
            log::warn!("[TASKS] toggle skipped: not signed in");
            return;
        };

        self.view.set_loading(true);
        let result = self
            .backend
            .update_task(&token, id, &TaskPatch::completed(completed))
            .await;
        self.view.set_loading(false);

        match result {
            Ok(task) => {
                let found = self.state.borrow_mut().tasks.update(task);
                if found {
                    self.render();
                    let text = if completed { MARKED_COMPLETED } else { MARKED_PENDING };
                    self.view.show_toast(Notice::success(text));
                } else {
                    log::debug!("[TASKS] task {} no longer listed, update dropped", id);
                }
            }
            Err(e) => {
                log::warn!("[TASKS] update of {} failed: {}", id, e);
                self.view.show_toast(Notice::error(e.user_message(UPDATE_FAILED, CONNECTION)));
                // Snap the checkbox back to the stored state
                self.render();
            }
        }
    }

    pub async fn delete_task(&self, id: u32) {
        if !self.view.confirm(DELETE_PROMPT) {
            log::debug!("[TASKS] delete of {} cancelled", id);
            return;
        }
        let Some(token) = self.token() else {
            log::warn!("[TASKS] delete skipped: not signed in");
            return;
        };

        self.view.set_loading(true);
        let result = self.backend.delete_task(&token, id).await;
        self.view.set_loading(false);

        match result {
            Ok(()) => {
                self.state.borrow_mut().tasks.remove(id);
                self.render();
                self.view.show_toast(Notice::success(DELETE_SUCCESS));
            }
            Err(e) => {
                log::warn!("[TASKS] delete of {} failed: {}", id, e);
                self.view.show_toast(Notice::error(e.user_message(DELETE_FAILED, CONNECTION)));
            }
        }
    }

    // ========================
    // Filter / Render
    // ========================

    pub fn set_filter(&self, mode: FilterMode) {
        log::debug!("[TASKS] filter -> {}", mode);
        self.state.borrow_mut().filter = mode;
        self.render();
    }

    /// Re-derive the visible list and the stats
    fn render(&self) {
        let (filter, visible, stats) = {
            let state = self.state.borrow();
            let filter = state.filter;
            (filter, filter_tasks(state.tasks.tasks(), filter), state.tasks.stats())
        };
        self.view.render_tasks(filter, &visible);
        self.view.render_stats(stats);
    }

    fn token(&self) -> Option<String> {
        self.state.borrow().session.token().map(str::to_string)
    }

    fn token_and_owner(&self) -> Option<(String, u32)> {
        let state = self.state.borrow();
        let session = state.session.current()?;
        Some((session.token.clone(), session.user.id.unwrap_or(FALLBACK_OWNER_ID)))
    }
}

// ========================
// Accessors
// ========================

#[cfg(test)]
impl<B, S, V> Controller<B, S, V>
where
    B: Backend,
    S: KeyValueStore,
    V: View,
{
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn session(&self) -> Option<Session> {
        self.state.borrow().session.current().cloned()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.borrow().session.is_active()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.state.borrow().tasks.tasks().to_vec()
    }

    pub fn filter(&self) -> FilterMode {
        self.state.borrow().filter
    }

    pub fn stats(&self) -> TaskStats {
        self.state.borrow().tasks.stats()
    }
}

// ========================
// Validation
// ========================

/// Trimmed value, or None when blank
fn required(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn validate_login(email: &str, password: &str) -> AppResult<Credentials> {
    match (required(email), required(password)) {
        (Some(email), Some(password)) => Ok(Credentials { email, password }),
        _ => Err(AppError::validation(FILL_ALL_FIELDS)),
    }
}

pub fn validate_signup(first_name: &str, last_name: &str, email: &str, password: &str) -> AppResult<SignupRequest> {
    match (required(first_name), required(last_name), required(email), required(password)) {
        (Some(first_name), Some(last_name), Some(email), Some(password)) => Ok(SignupRequest {
            first_name,
            last_name,
            email,
            password,
        }),
        _ => Err(AppError::validation(FILL_ALL_FIELDS)),
    }
}
