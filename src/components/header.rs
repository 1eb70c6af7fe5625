//! Header Component
//!
//! Brand, navigation tabs, signed-in profile and logout.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{NavTab, UiStateStoreFields};
use crate::view::Screen;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let signed_in = move || store.screen().get() == Screen::App;
    let nav_class = move |tab: NavTab| {
        if store.nav().get() == tab { "nav-link active" } else { "nav-link" }
    };

    view! {
        <header class="app-header">
            <span class="brand">"Task Board"</span>

            <Show when=signed_in>
                <nav class="nav-tabs">
                    <button class=move || nav_class(NavTab::Home) on:click=move |_| store.nav().set(NavTab::Home)>
                        "Home"
                    </button>
                    <button
                        class=move || nav_class(NavTab::Tasks)
                        on:click=move |_| {
                            store.nav().set(NavTab::Tasks);
                            ctx.refresh();
                        }
                    >
                        "Tasks"
                    </button>
                </nav>

                <div class="user-profile">
                    <span class="display-name">
                        {move || store.user().get().map(|u| u.display_name()).unwrap_or_default()}
                    </span>
                    <span class="display-email">
                        {move || store.user().get().map(|u| u.email).unwrap_or_default()}
                    </span>
                </div>

                <button class="btn btn-secondary logout" on:click=move |_| ctx.logout()>"Logout"</button>
            </Show>
        </header>
    }
}
