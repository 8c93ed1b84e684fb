//! Dashboard View
//!
//! The render pipeline in fixed order: summary, transactions, budget
//! chart, goals, allocation chart. Every section reads the shared
//! snapshot from context.

use leptos::*;

use crate::components::{
    AllocationChart, BudgetChart, GoalList, Loading, Summary, TransactionList,
};
use crate::state::{AppState, FetchPhase, View};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let view = state.view;
    let fetch_phase = state.fetch_phase;

    let state_for_logout = state.clone();
    let on_logout = move |_| state_for_logout.logout();

    view! {
        <section id="dashboard-section" class:hidden=move || view.get() != View::Dashboard>
            <header class="dashboard-header">
                <h1>"Dashboard"</h1>
                <button id="logout-btn" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            {move || match fetch_phase.get() {
                FetchPhase::Loading => view! { <Loading /> }.into_view(),
                _ => view! {
                    <Summary />
                    <TransactionList />
                    <BudgetChart />
                    <GoalList />
                    <AllocationChart />
                }
                .into_view(),
            }}
        </section>
    }
}
