//! reqwest-backed [`Connector`] for Jira Cloud.
//!
//! Resolves service endpoints against the site URL, attaches credentials and
//! JSON headers, and maps non-success statuses into [`ApiError`]s. Requests
//! are sent exactly once.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Method, Url};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::auth::{self, Auth};
use super::connector::{Connector, Request, ResponseScheme, JSON_CONTENT_TYPE};
use super::error::{ApiError, Result};
use crate::config::{Profile, Settings};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("jira-rest/", env!("CARGO_PKG_VERSION"));

/// Environment variable consulted for an API token before the keyring.
pub const TOKEN_ENV_VAR: &str = "JIRA_API_TOKEN";

/// The Jira HTTP client.
#[derive(Debug, Clone)]
pub struct JiraClient {
    /// The HTTP client.
    client: Client,
    /// Site root, always ending in `/`.
    site: Url,
    /// Authentication credentials.
    auth: Auth,
}

impl JiraClient {
    /// Create a client for `site` with the default timeout and user agent.
    pub fn new(site: &str, auth: Auth) -> Result<Self> {
        Self::with_options(
            site,
            auth,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            DEFAULT_USER_AGENT,
        )
    }

    /// Create a client using Basic auth with explicit credentials.
    pub fn with_credentials(site: &str, email: &str, token: &str) -> Result<Self> {
        Self::new(site, Auth::basic(email, token))
    }

    /// Create a client with an explicit timeout and user agent.
    pub fn with_options(
        site: &str,
        auth: Auth,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self> {
        let site = parse_site(site)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self { client, site, auth })
    }

    /// Create a client from a configuration profile.
    ///
    /// The API token is taken from `JIRA_API_TOKEN` when set, otherwise from
    /// the OS keyring entry of the profile.
    #[instrument(skip(profile, settings), fields(profile_name = %profile.name))]
    pub fn from_profile(profile: &Profile, settings: &Settings) -> Result<Self> {
        let token = match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => {
                debug!("Using API token from {}", TOKEN_ENV_VAR);
                token
            }
            _ => auth::get_token(&profile.name)?,
        };

        Self::with_options(
            &profile.url,
            Auth::basic(&profile.email, &token),
            Duration::from_secs(settings.timeout_secs),
            &settings.user_agent,
        )
    }

    /// The site root requests are resolved against.
    pub fn site(&self) -> &Url {
        &self.site
    }

    /// The credentials attached to every request.
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

#[async_trait]
impl Connector for JiraClient {
    fn new_request(
        &self,
        method: Method,
        endpoint: &str,
        content_type: Option<&str>,
        body: Option<Value>,
    ) -> Result<Request> {
        let url = self
            .site
            .join(endpoint.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", endpoint, e)))?;

        let content_type = match (&body, content_type) {
            (_, Some(content_type)) => Some(content_type.to_string()),
            (Some(_), None) => Some(JSON_CONTENT_TYPE.to_string()),
            (None, None) => None,
        };

        Ok(Request {
            method,
            url: url.to_string(),
            content_type,
            body,
        })
    }

    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn call(&self, request: Request) -> Result<ResponseScheme> {
        debug!("Sending request");

        let mut builder = self
            .client
            .request(request.method.clone(), &request.url)
            .header(header::AUTHORIZATION, self.auth.header_value())
            .header(header::ACCEPT, JSON_CONTENT_TYPE);

        if let Some(body) = &request.body {
            let content_type = request.content_type.as_deref().unwrap_or(JSON_CONTENT_TYPE);
            builder = builder
                .header(header::CONTENT_TYPE, content_type)
                .body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?.to_vec();
        debug!(status = status.as_u16(), bytes = bytes.len(), "Received response");

        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes);
            warn!(status = status.as_u16(), "Request failed");
            debug!("Error response body: {}", body);
            return Err(ApiError::from_response(status, &request.url, &body));
        }

        Ok(ResponseScheme {
            status,
            method: request.method,
            endpoint: request.url,
            bytes,
        })
    }
}

/// Normalize the site URL so endpoints resolve beneath it.
fn parse_site(site: &str) -> Result<Url> {
    let trimmed = site.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ApiError::InvalidUrl("site URL cannot be empty".to_string()));
    }

    if !trimmed.starts_with("https://") && !trimmed.contains("localhost") && !trimmed.contains("127.0.0.1") {
        warn!("URL does not use HTTPS: {}. This is insecure for production use.", trimmed);
    }

    Url::parse(&format!("{}/", trimmed)).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", site, e)))
}
