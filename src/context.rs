//! Application Context
//!
//! Handles provided via Leptos Context API. Components call these methods;
//! each spawns the matching controller operation on the event loop.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpBackend;
use crate::controller::{Controller, TaskInput};
use crate::filter::FilterMode;
use crate::storage::BrowserStorage;
use crate::store::{StoreView, UiStore};
use crate::view::AuthTab;

pub type AppController = Controller<HttpBackend, BrowserStorage, StoreView>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// UI state the components render
    pub store: UiStore,
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl AppContext {
    pub fn new(store: UiStore, controller: AppController) -> Self {
        Self {
            store,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<AppController>) -> Fut + 'static,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        let controller = self.controller.get_value();
        spawn_local(op(controller));
    }

    /// Restore the session and show the first screen
    pub fn start(&self) {
        self.spawn(|c| async move { c.start().await });
    }

    pub fn login(&self, email: String, password: String) {
        self.spawn(move |c| async move { c.login(&email, &password).await });
    }

    pub fn signup(&self, first_name: String, last_name: String, email: String, password: String) {
        self.spawn(move |c| async move { c.signup(&first_name, &last_name, &email, &password).await });
    }

    pub fn logout(&self) {
        self.controller.with_value(|c| c.logout());
    }

    pub fn switch_auth_tab(&self, tab: AuthTab) {
        self.controller.with_value(|c| c.switch_auth_tab(tab));
    }

    /// Reload the task list from the server
    pub fn refresh(&self) {
        self.spawn(|c| async move { c.load_all().await });
    }

    pub fn create_task(&self, input: TaskInput) {
        self.spawn(move |c| async move { c.create_task(input).await });
    }

    pub fn toggle_task(&self, id: u32, completed: bool) {
        self.spawn(move |c| async move { c.toggle_completion(id, completed).await });
    }

    pub fn delete_task(&self, id: u32) {
        self.spawn(move |c| async move { c.delete_task(id).await });
    }

    pub fn set_filter(&self, mode: FilterMode) {
        self.controller.with_value(|c| c.set_filter(mode));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
