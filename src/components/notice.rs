//! Notices
//!
//! Inline form messages, the toast host and the loading overlay.

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};
use crate::view::Notice;

/// Inline message under a form; renders nothing when empty
#[component]
pub fn FormMessage(notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! { <div class=format!("form-message {}", n.kind.css())>{n.text}</div> }
        })
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_ui_store();

    move || {
        store.toast().get().map(|toast| {
            view! {
                <div class=format!("toast show {}", toast.notice.kind.css()) role="status">
                    {toast.notice.text}
                </div>
            }
        })
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <Show when=move || { store.pending_requests().get() > 0 }>
            <div class="loading-spinner">
                <div class="spinner"></div>
            </div>
        </Show>
    }
}
