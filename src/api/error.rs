//! Transport-level error types produced by a [`Connector`](super::Connector).

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while building or executing a Jira request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication failed - invalid email, API token or access token.
    #[error("Authentication failed: check your email and API token")]
    Unauthorized,

    /// Permission denied - user lacks access to the resource.
    #[error("Permission denied: you don't have access to this resource")]
    Forbidden,

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The request was rejected by Jira (HTTP 400).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Conflict error - the resource was modified concurrently.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Rate limited by the Jira API.
    #[error("Rate limited: please wait before retrying")]
    RateLimited,

    /// Jira server error or an unexpected status.
    #[error("Jira server error: {0}")]
    ServerError(String),

    /// Network or HTTP error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid site URL or endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body could not be decoded into the expected model.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// The request payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Keyring error when storing/retrieving tokens.
    #[error("Keyring error: {0}")]
    Keyring(String),
}

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error from an HTTP status code.
    pub fn from_status(status: StatusCode, context: &str) -> Self {
        match status.as_u16() {
            400 => ApiError::BadRequest(context.to_string()),
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound(context.to_string()),
            409 => ApiError::Conflict(context.to_string()),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(format!("HTTP {}: {}", status, context)),
            _ => ApiError::ServerError(format!("Unexpected HTTP {}: {}", status, context)),
        }
    }

    /// Build an error from a failed response, preferring Jira's own messages.
    ///
    /// Jira reports failures as `{"errorMessages": [...], "errors": {...}}`;
    /// when neither is present the endpoint is used as context.
    pub fn from_response(status: StatusCode, endpoint: &str, body: &str) -> Self {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
            if let Some(messages) = json.get("errorMessages").and_then(|m| m.as_array()) {
                let joined = messages
                    .iter()
                    .filter_map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                if !joined.is_empty() {
                    return ApiError::from_status(status, &joined);
                }
            }
            if let Some(errors) = json.get("errors").and_then(|e| e.as_object()) {
                let error_strings: Vec<String> = errors
                    .iter()
                    .map(|(k, v)| match v.as_str() {
                        Some(text) => format!("{}: {}", k, text),
                        None => format!("{}: {}", k, v),
                    })
                    .collect();
                if !error_strings.is_empty() {
                    return ApiError::from_status(status, &error_strings.join(", "));
                }
            }
        }

        ApiError::from_status(status, endpoint)
    }
}
