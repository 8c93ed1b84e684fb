//! Loading Placeholder

use leptos::*;

/// Shown in place of the dashboard sections while the fetch is in
/// flight.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <p>"Loading..."</p>
        </div>
    }
}
