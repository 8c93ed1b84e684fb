//! Summary Section
//!
//! Topline cards: portfolio value with PnL and day gain, financial
//! health, and this month's total spend.

use leptos::*;

use crate::state::AppState;
use crate::viewmodel::SummaryView;

#[component]
pub fn Summary() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let summary = create_memo(move |_| {
        state
            .snapshot
            .get()
            .map(|snapshot| SummaryView::from_snapshot(&snapshot))
    });

    view! {
        <section class="summary-grid">
            {move || {
                summary.get().map(|vm| view! {
                    <div class="card">
                        <h3>"Portfolio Value"</h3>
                        <p id="portfolio-value" class="big-number">{vm.portfolio_value}</p>
                        <p id="portfolio-pnl" class=vm.pnl_polarity.css_class()>{vm.pnl_label}</p>
                        <p id="portfolio-day-gain" class=vm.day_gain_polarity.css_class()>
                            {vm.day_gain_label}
                        </p>
                    </div>
                    <div class="card">
                        <h3>"Financial Health"</h3>
                        <p id="health-score" class="big-number">{vm.health_score}</p>
                        <p id="health-assessment">{vm.health_assessment}</p>
                    </div>
                    <div class="card">
                        <h3>"Spent This Month"</h3>
                        <p id="total-spent" class="big-number">{vm.total_spent}</p>
                    </div>
                })
            }}
        </section>
    }
}
