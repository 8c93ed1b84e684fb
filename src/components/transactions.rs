//! Recent Transactions Section

use leptos::*;

use crate::state::AppState;
use crate::viewmodel::TransactionRow;

#[component]
pub fn TransactionList() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    view! {
        <section class="card">
            <h2>"Recent Transactions"</h2>
            <ul id="transaction-list">
                {move || {
                    let rows = state
                        .snapshot
                        .get()
                        .map(|snapshot| TransactionRow::rows(&snapshot.transactions))
                        .unwrap_or_default();

                    if rows.is_empty() {
                        view! { <li class="empty">"No transactions yet"</li> }.into_view()
                    } else {
                        rows.into_iter()
                            .map(|row| view! {
                                <li class="transaction-item">
                                    <div class="transaction-details">
                                        <span class="transaction-merchant">{row.merchant}</span>
                                        <span class="transaction-category">{row.category}</span>
                                        {row.date.map(|date| view! {
                                            <span class="transaction-date">{date}</span>
                                        })}
                                    </div>
                                    <span class="transaction-amount negative">{row.amount}</span>
                                </li>
                            })
                            .collect_view()
                    }
                }}
            </ul>
        </section>
    }
}
