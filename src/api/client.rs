//! HTTP API Client
//!
//! Request functions for the FinBoard REST API, built on gloo-net.
//! Every function maps transport failures onto [`ApiError`] so callers
//! can translate them into user-facing status text.

use gloo_net::http::Request;

use crate::api::dto::{AuthResponse, Credentials, DashboardSnapshot};
use crate::api::error::ApiError;
use crate::api::get_api_base;

/// Exchange credentials for a bearer token.
///
/// A response without a token counts as a rejection even when the
/// status is a success, carrying the server's `msg` when present.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let body = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&format!("{}/login", get_api_base()))
        .json(&body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let accepted = response.ok();
    let auth: AuthResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    match (accepted, auth.access_token) {
        (true, Some(token)) => Ok(token),
        _ => Err(ApiError::Rejected { message: auth.msg }),
    }
}

/// Create an account. The body is parsed on success and failure alike;
/// a rejection carries the server's `msg` when it sent one.
pub async fn register(email: &str, password: &str) -> Result<(), ApiError> {
    let body = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&format!("{}/register", get_api_base()))
        .json(&body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let accepted = response.ok();
    let auth: AuthResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if accepted {
        Ok(())
    } else {
        Err(ApiError::Rejected { message: auth.msg })
    }
}

/// Fetch the aggregated dashboard snapshot using `token` as the bearer
/// credential.
pub async fn fetch_dashboard(token: &str) -> Result<DashboardSnapshot, ApiError> {
    let response = Request::get(&format!("{}/dashboard_data", get_api_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Rejected { message: None });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
