//! The seam between services and the HTTP transport.
//!
//! Services never talk to the network themselves: they format an endpoint,
//! ask a [`Connector`] to build a [`Request`], hand it back for execution and
//! decode the [`ResponseScheme`] that comes out.

use std::borrow::Cow;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::{ApiError, Result};

/// Default content type for request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A request ready to be executed by a [`Connector`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Resolved URL (absolute for network connectors, the raw endpoint otherwise).
    pub url: String,
    /// Content type of `body`, if any.
    pub content_type: Option<String>,
    /// JSON body.
    pub body: Option<Value>,
}

/// The outcome of an executed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseScheme {
    /// HTTP status returned by Jira.
    pub status: StatusCode,
    /// HTTP method of the originating request.
    pub method: Method,
    /// URL of the originating request.
    pub endpoint: String,
    /// Raw response body.
    pub bytes: Vec<u8>,
}

impl ResponseScheme {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.bytes).map_err(|e| {
            ApiError::InvalidResponse(format!(
                "Failed to parse response from {}: {}",
                self.endpoint, e
            ))
        })
    }

    /// The body as (lossy) UTF-8 text.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Whether the body is empty (e.g. `204 No Content`).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Builds and executes Jira requests on behalf of the services.
///
/// [`JiraClient`](super::JiraClient) is the reqwest-backed implementation;
/// tests substitute an in-memory recorder.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Build a request for `endpoint` (a path relative to the site root,
    /// such as `rest/api/3/dashboard`).
    fn new_request(
        &self,
        method: Method,
        endpoint: &str,
        content_type: Option<&str>,
        body: Option<Value>,
    ) -> Result<Request>;

    /// Execute a request previously built by [`Connector::new_request`].
    ///
    /// Implementations return an error for non-success statuses.
    async fn call(&self, request: Request) -> Result<ResponseScheme>;
}

/// Encode a payload for [`Connector::new_request`].
pub fn json_body<T: Serialize + ?Sized>(payload: &T) -> Result<Value> {
    serde_json::to_value(payload).map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn response(body: &str) -> ResponseScheme {
        ResponseScheme {
            status: StatusCode::OK,
            method: Method::GET,
            endpoint: "rest/api/3/serverInfo".to_string(),
            bytes: body.as_bytes().to_vec(),
        }
    }

    #[derive(Debug, Deserialize)]
    struct Version {
        version: String,
    }

    #[test]
    fn test_json_decodes_body() {
        let decoded: Version = response(r#"{"version":"1001.0.0"}"#).json().unwrap();
        assert_eq!(decoded.version, "1001.0.0");
    }

    #[test]
    fn test_json_reports_endpoint_on_failure() {
        let err = response("<html>").json::<Version>().unwrap_err();
        match err {
            ApiError::InvalidResponse(msg) => assert!(msg.contains("rest/api/3/serverInfo")),
            other => panic!("Expected InvalidResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_text_and_empty() {
        assert_eq!(response("ok").text(), "ok");
        assert!(response("").is_empty());
    }

    #[test]
    fn test_json_body() {
        let body = json_body(&serde_json::json!({"name": "x"})).unwrap();
        assert_eq!(body["name"], "x");
    }
}
