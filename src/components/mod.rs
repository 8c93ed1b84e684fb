//! UI Components
//!
//! Leptos components for the auth forms and the dashboard render
//! pipeline. Each dashboard component owns one region of the page and
//! reads the shared snapshot from context.

pub mod allocation_chart;
pub mod auth_forms;
pub mod budget_chart;
pub mod goals;
pub mod loading;
pub mod summary;
pub mod transactions;

pub use allocation_chart::AllocationChart;
pub use auth_forms::{LoginForm, RegisterForm};
pub use budget_chart::BudgetChart;
pub use goals::GoalList;
pub use loading::Loading;
pub use summary::Summary;
pub use transactions::TransactionList;
