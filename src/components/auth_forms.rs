//! Auth Form Components
//!
//! Login and registration forms. Both report through the shared auth
//! status line; a successful login also kicks off the dashboard load.

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::state::{load_dashboard, AppState};

#[component]
pub fn LoginForm() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = email.get();
        let password = password.get();

        state.auth_message.set(Some("Logging in...".to_string()));
        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::client::login(&email, &password).await {
                Ok(token) => {
                    state_clone.complete_login(&token);
                    load_dashboard(state_clone).await;
                }
                Err(e) => {
                    state_clone
                        .auth_message
                        .set(Some(e.user_message("Login failed.")));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form id="login-form" on:submit=on_submit>
            <h2>"Login"</h2>
            <input
                id="login-email"
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                id="login-password"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || submitting.get()>
                "Login"
            </button>
        </form>
    }
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = email.get();
        let password = password.get();

        state.auth_message.set(Some("Registering...".to_string()));
        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::client::register(&email, &password).await {
                Ok(()) => {
                    state_clone
                        .auth_message
                        .set(Some("Registration successful. Please login.".to_string()));
                }
                Err(e) => {
                    state_clone
                        .auth_message
                        .set(Some(e.user_message("Registration failed.")));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form id="register-form" on:submit=on_submit>
            <h2>"Register"</h2>
            <input
                id="register-email"
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <input
                id="register-password"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || submitting.get()>
                "Register"
            </button>
        </form>
    }
}
