//! Auth View
//!
//! Login and registration side by side, sharing one status line. All
//! auth flows report here and nowhere else.

use leptos::*;

use crate::components::{LoginForm, RegisterForm};
use crate::state::{AppState, View};

#[component]
pub fn AuthPage() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let view = state.view;

    view! {
        <section id="auth-section" class:hidden=move || view.get() != View::Auth>
            <h1>"FinBoard"</h1>
            <p id="auth-message" class="auth-message">
                {move || state.auth_message.get().unwrap_or_default()}
            </p>
            <div class="auth-forms">
                <LoginForm />
                <RegisterForm />
            </div>
        </section>
    }
}
