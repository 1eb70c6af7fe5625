//! Task Board App
//!
//! Root component: wires the controller to the UI store and switches
//! between the auth screen and the task screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::HttpBackend;
use crate::components::{AuthScreen, Header, LoadingSpinner, NewTaskForm, StatsPanel, TaskList, ToastHost};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::controller::Controller;
use crate::storage::BrowserStorage;
use crate::store::{StoreView, UiState, UiStateStoreFields};
use crate::view::Screen;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(UiState::default());
    let config = ApiConfig::from_env();
    log::info!("[APP] using API at {}", config.base_url());

    let controller = Controller::new(HttpBackend::new(config), BrowserStorage, StoreView::new(store));
    let ctx = AppContext::new(store, controller);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Restore the session once on mount
    Effect::new(move |_| ctx.start());

    view! {
        <Header />

        <main class="container">
            <Show
                when=move || store.screen().get() == Screen::App
                fallback=|| view! { <AuthScreen /> }
            >
                <section class="app-screen">
                    <StatsPanel />
                    <NewTaskForm />
                    <TaskList />
                </section>
            </Show>
        </main>

        <ToastHost />
        <LoadingSpinner />
    }
}
