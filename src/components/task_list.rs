//! Task List Component
//!
//! Filter bar plus the visible task cards. The list is rebuilt from the
//! store on every render; card bodies arrive pre-escaped from `render`.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::FilterMode;
use crate::render::TaskCard;
use crate::store::UiStateStoreFields;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <section class="tasks-section">
            <FilterBar />

            <Show
                when=move || !store.cards().read().is_empty()
                fallback=|| view! { <p class="no-tasks">"No tasks here yet."</p> }
            >
                <div class="tasks-list">
                    {move || store.cards().get().into_iter().map(|card| view! { <TaskCardView card=card /> }).collect_view()}
                </div>
            </Show>
        </section>
    }
}

/// All / Pending / Completed buttons
#[component]
fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="filter-bar">
            {FilterMode::ALL.iter().map(|&mode| {
                let is_active = move || store.filter().get() == mode;
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| ctx.set_filter(mode)
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// One card: completion toggle, escaped body, delete action
#[component]
fn TaskCardView(card: TaskCard) -> impl IntoView {
    let ctx = use_app_context();
    let id = card.id;

    view! {
        <div class=card.class>
            <div class="task-header">
                <input
                    type="checkbox"
                    class="task-checkbox"
                    prop:checked=card.completed
                    on:change=move |ev| ctx.toggle_task(id, event_target_checked(&ev))
                />
                <div class="task-body" inner_html=card.body_html></div>
            </div>
            <div class="task-actions">
                <button class="btn btn-danger" on:click=move |_| ctx.delete_task(id)>"Delete"</button>
            </div>
        </div>
    }
}
