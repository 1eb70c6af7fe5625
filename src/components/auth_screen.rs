//! Auth Screen Component
//!
//! Login / signup tabs and their forms.

use leptos::prelude::*;

use crate::components::FormMessage;
use crate::context::use_app_context;
use crate::store::UiStateStoreFields;
use crate::view::AuthTab;

#[component]
pub fn AuthScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let tab_class = move |tab: AuthTab| {
        if store.auth_tab().get() == tab { "auth-tab active" } else { "auth-tab" }
    };

    view! {
        <section class="auth-screen">
            <div class="auth-tabs">
                <button class=move || tab_class(AuthTab::Login) on:click=move |_| ctx.switch_auth_tab(AuthTab::Login)>
                    "Sign In"
                </button>
                <button class=move || tab_class(AuthTab::Signup) on:click=move |_| ctx.switch_auth_tab(AuthTab::Signup)>
                    "Sign Up"
                </button>
            </div>

            <Show
                when=move || store.auth_tab().get() == AuthTab::Login
                fallback=|| view! { <SignupForm /> }
            >
                <LoginForm />
            </Show>
        </section>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = store.login_form().get_untracked();
        ctx.login(form.email, form.password);
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || store.login_form().read().email.clone()
                on:input=move |ev| store.login_form().write().email = event_target_value(&ev)
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || store.login_form().read().password.clone()
                on:input=move |ev| store.login_form().write().password = event_target_value(&ev)
            />
            <button type="submit" class="btn btn-primary">"Sign In"</button>
            <FormMessage notice=Signal::derive(move || store.login_message().get()) />
        </form>
    }
}

#[component]
fn SignupForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = store.signup_form().get_untracked();
        ctx.signup(form.first_name, form.last_name, form.email, form.password);
    };

    view! {
        <form class="auth-form" on:submit=submit>
            <div class="name-row">
                <input
                    type="text"
                    placeholder="First name"
                    prop:value=move || store.signup_form().read().first_name.clone()
                    on:input=move |ev| store.signup_form().write().first_name = event_target_value(&ev)
                />
                <input
                    type="text"
                    placeholder="Last name"
                    prop:value=move || store.signup_form().read().last_name.clone()
                    on:input=move |ev| store.signup_form().write().last_name = event_target_value(&ev)
                />
            </div>
            <input
                type="email"
                placeholder="Email"
                prop:value=move || store.signup_form().read().email.clone()
                on:input=move |ev| store.signup_form().write().email = event_target_value(&ev)
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || store.signup_form().read().password.clone()
                on:input=move |ev| store.signup_form().write().password = event_target_value(&ev)
            />
            <button type="submit" class="btn btn-primary">"Create Account"</button>
            <FormMessage notice=Signal::derive(move || store.signup_message().get()) />
        </form>
    }
}
