//! Stats Panel Component

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

/// Total / completed / pending counters
#[component]
pub fn StatsPanel() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="stats">
            <div class="stat-card">
                <span class="stat-value">{move || store.stats().get().total}</span>
                <span class="stat-label">"Total"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || store.stats().get().completed}</span>
                <span class="stat-label">"Completed"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || store.stats().get().pending}</span>
                <span class="stat-label">"Pending"</span>
            </div>
        </div>
    }
}
