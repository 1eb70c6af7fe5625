//! New Task Form Component
//!
//! Title, optional description, date and time.

use leptos::prelude::*;

use crate::components::FormMessage;
use crate::context::use_app_context;
use crate::store::UiStateStoreFields;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.create_task(store.task_form().get_untracked());
    };

    view! {
        <form class="create-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Task title"
                prop:value=move || store.task_form().read().title.clone()
                on:input=move |ev| store.task_form().write().title = event_target_value(&ev)
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || store.task_form().read().description.clone()
                on:input=move |ev| store.task_form().write().description = event_target_value(&ev)
            ></textarea>
            <div class="schedule-row">
                <input
                    type="date"
                    prop:value=move || store.task_form().read().date.clone()
                    on:input=move |ev| store.task_form().write().date = event_target_value(&ev)
                />
                <input
                    type="time"
                    prop:value=move || store.task_form().read().time.clone()
                    on:input=move |ev| store.task_form().write().time = event_target_value(&ev)
                />
            </div>
            <button type="submit" class="btn btn-primary">"Add Task"</button>
            <FormMessage notice=Signal::derive(move || store.create_message().get()) />
        </form>
    }
}
