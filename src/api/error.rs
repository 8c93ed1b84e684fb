//! API Error Types
//!
//! Error taxonomy for requests issued by this app. A call either gets
//! rejected by the server, never completes, or comes back with a body
//! we cannot decode.

use thiserror::Error;

/// Errors from a FinBoard API call
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status, optionally with
    /// its own explanation
    #[error("request rejected: {}", .message.as_deref().unwrap_or("no detail"))]
    Rejected { message: Option<String> },

    /// The request never completed (connection refused, DNS, CORS)
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown on the auth status line. A rejection surfaces the
    /// server's message when it sent one and `generic` otherwise; a
    /// request that never produced a usable body reads as a network
    /// problem.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
            } => message.clone(),
            ApiError::Rejected { message: None } => generic.to_string(),
            ApiError::Network(_) | ApiError::Decode(_) => "Network error.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_with_detail_surfaces_server_message() {
        let err = ApiError::Rejected {
            message: Some("Email already registered".to_string()),
        };
        assert_eq!(
            err.user_message("Registration failed."),
            "Email already registered"
        );
    }

    #[test]
    fn rejection_without_detail_falls_back_to_generic() {
        let err = ApiError::Rejected { message: None };
        assert_eq!(err.user_message("Login failed."), "Login failed.");
    }

    #[test]
    fn transport_problems_read_as_network_error() {
        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.user_message("Login failed."), "Network error.");

        let decode = ApiError::Decode("expected JSON".to_string());
        assert_eq!(decode.user_message("Login failed."), "Network error.");
    }
}
