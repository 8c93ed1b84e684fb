//! Savings Goals Section

use leptos::*;

use crate::state::AppState;
use crate::viewmodel::GoalRow;

#[component]
pub fn GoalList() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <section class="card">
            <h2>"Goals"</h2>
            <div id="goal-list">
                {move || {
                    let rows = state
                        .snapshot
                        .get()
                        .map(|snapshot| GoalRow::rows(&snapshot.goals))
                        .unwrap_or_default();

                    if rows.is_empty() {
                        view! { <p class="empty">"No goals yet"</p> }.into_view()
                    } else {
                        rows.into_iter()
                            .map(|row| view! {
                                <div class="goal-item">
                                    <div class="goal-info">
                                        <span class="goal-name">{row.name}</span>
                                        <span class="goal-amounts">{row.amounts_label}</span>
                                    </div>
                                    <div class="progress-bar-container">
                                        <div
                                            class="progress-bar"
                                            style=format!("width: {}%", row.progress_percent)
                                        />
                                    </div>
                                </div>
                            })
                            .collect_view()
                    }
                }}
            </div>
        </section>
    }
}
