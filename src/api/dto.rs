//! Data Transfer Objects
//!
//! Request and response types for the FinBoard API endpoints.
//! These types are serialized/deserialized to/from JSON. Unknown fields
//! on responses are tolerated and ignored.

use serde::{Deserialize, Serialize};

// ============================================
// AUTH DTOs
// ============================================

/// Credentials sent to login and register
#[derive(Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of a login or register response. `access_token` is present on a
/// successful login; `msg` carries the server's explanation on rejection.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// Aggregated dashboard payload. Replaced wholesale on every fetch;
/// renderers never see a partial update.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    pub portfolio: Portfolio,
    pub financial_health: FinancialHealth,
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Investment portfolio summary
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Portfolio {
    pub total_invested: f64,
    pub current_value: f64,
    pub day_gain: f64,
    pub overall_pnl: f64,
    #[serde(default)]
    pub allocation: Vec<AllocationEntry>,
}

/// One asset class in the portfolio allocation
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AllocationEntry {
    pub name: String,
    pub value: f64,
}

/// Server-computed financial health rating, displayed verbatim
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FinancialHealth {
    pub score: i64,
    pub assessment: String,
}

/// One budget category with its allocation and spend
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Budget {
    pub category: String,
    pub allocated_amount: f64,
    pub spent_amount: f64,
}

/// One savings goal
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Goal {
    pub goal_name: String,
    pub target_amount: f64,
    pub current_amount: f64,
}

/// One spending transaction
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Transaction {
    pub merchant: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub transaction_date: Option<String>,
}
