//! Global Application State
//!
//! Reactive state shared by every component via Leptos context. Every
//! transition that touches the view switch or the auth status line
//! goes through the methods here, no matter which component fired it.

use leptos::*;

use crate::api::dto::DashboardSnapshot;
use crate::api::{self, ApiError};
use crate::session::TokenStore;

/// Which top-level view is visible. The two are mutually exclusive by
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Auth,
    Dashboard,
}

/// Progress of the dashboard fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Visible top-level view
    pub view: RwSignal<View>,
    /// Status line on the auth view ("Logging in...", failures)
    pub auth_message: RwSignal<Option<String>>,
    /// Latest dashboard snapshot, replaced wholesale on every fetch
    pub snapshot: RwSignal<Option<DashboardSnapshot>>,
    /// Dashboard fetch progress
    pub fetch_phase: RwSignal<FetchPhase>,
    /// Session token persistence
    pub tokens: TokenStore,
}

impl AppState {
    /// Fresh state. The starting view follows token presence: a stored
    /// session resumes on the dashboard, otherwise the auth view shows.
    pub fn new(tokens: TokenStore) -> Self {
        let initial = if tokens.is_present() {
            View::Dashboard
        } else {
            View::Auth
        };

        Self {
            view: create_rw_signal(initial),
            auth_message: create_rw_signal(None),
            snapshot: create_rw_signal(None),
            fetch_phase: create_rw_signal(FetchPhase::Idle),
            tokens,
        }
    }

    /// Show the dashboard view. Unconditional and idempotent.
    pub fn show_dashboard(&self) {
        self.view.set(View::Dashboard);
    }

    /// Show the auth view. Unconditional and idempotent.
    pub fn show_auth(&self) {
        self.view.set(View::Auth);
    }

    /// Record a successful login: persist the token, clear the status
    /// line, and switch to the dashboard.
    pub fn complete_login(&self, token: &str) {
        self.tokens.set(token);
        self.auth_message.set(None);
        self.show_dashboard();
    }

    /// Drop the session: clear the token and fall back to the auth view.
    pub fn logout(&self) {
        self.tokens.clear();
        self.snapshot.set(None);
        self.fetch_phase.set(FetchPhase::Idle);
        self.show_auth();
    }

    /// Install a freshly fetched snapshot, replacing the previous one.
    pub fn install_snapshot(&self, snapshot: DashboardSnapshot) {
        self.snapshot.set(Some(snapshot));
        self.fetch_phase.set(FetchPhase::Ready);
    }

    /// Record a failed dashboard fetch. The view falls back to auth
    /// with an explanation on the status line. The token stays; a
    /// rejected request is treated as implicit expiry, not a logout.
    pub fn fail_dashboard_fetch(&self, error: &ApiError) {
        let message = match error {
            ApiError::Rejected { .. } => "Failed to load dashboard.",
            ApiError::Network(_) | ApiError::Decode(_) => "Error loading dashboard.",
        };
        self.fetch_phase.set(FetchPhase::Failed);
        self.auth_message.set(Some(message.to_string()));
        self.show_auth();
    }
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    provide_context(AppState::new(TokenStore::browser()));
}

/// Session-gated dashboard load: no token, no request. With a token,
/// the loading placeholder shows until the snapshot lands or the fetch
/// fails.
pub async fn load_dashboard(state: AppState) {
    let token = match state.tokens.get() {
        Some(token) => token,
        None => return,
    };

    state.fetch_phase.set(FetchPhase::Loading);

    match api::client::fetch_dashboard(&token).await {
        Ok(snapshot) => {
            log::debug!("dashboard snapshot loaded");
            state.install_snapshot(snapshot);
        }
        Err(e) => {
            log::warn!("dashboard fetch failed: {}", e);
            state.fail_dashboard_fetch(&e);
        }
    }
}
