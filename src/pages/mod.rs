//! Top-Level Views
//!
//! The auth view and the dashboard view. Both stay mounted; the view
//! switch only toggles a `hidden` class.

pub mod auth;
pub mod dashboard;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
