//! State Management
//!
//! Global application state and the session-gated dashboard load.

pub mod global;

pub use global::{load_dashboard, provide_app_state, AppState, FetchPhase, View};
