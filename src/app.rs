//! App Root Component
//!
//! Provides global state and hosts the two top-level views. On mount,
//! a stored session goes straight to the dashboard and its fetch; with
//! no token the auth view shows and no request is made.

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::pages::{AuthPage, DashboardPage};
use crate::state::{load_dashboard, provide_app_state, AppState};

#[component]
pub fn App() -> impl IntoView {
    provide_app_state();

    let state = use_context::<AppState>().expect("AppState not found");

    // Bootstrap fetch. Reads no signals, so it runs once on mount.
    let boot_state = state.clone();
    create_effect(move |_| {
        if boot_state.tokens.is_present() {
            let state = boot_state.clone();
            spawn_local(async move {
                load_dashboard(state).await;
            });
        }
    });

    view! {
        <main class="app">
            <AuthPage />
            <DashboardPage />
        </main>
    }
}
