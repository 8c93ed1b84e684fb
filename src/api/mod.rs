//! FinBoard API Layer
//!
//! Client side of the FinBoard REST API: request functions, wire types,
//! and the error taxonomy.
//!
//! # Endpoints
//!
//! - `POST /api/login` - Exchange credentials for a bearer token
//! - `POST /api/register` - Create an account
//! - `GET /api/dashboard_data` - Aggregated dashboard snapshot (bearer auth)

pub mod client;
pub mod dto;
pub mod error;

pub use error::ApiError;

use crate::session;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5001/api";

/// localStorage key overriding the API base URL.
const API_URL_KEY: &str = "finboard_api_url";

/// API base URL: the localStorage override when set, otherwise the default.
/// The override is an operator knob; nothing in the app writes it.
pub fn get_api_base() -> String {
    let url = session::local_storage()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}
