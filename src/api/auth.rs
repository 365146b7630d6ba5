//! Authentication handling for the Jira REST API.
//!
//! Jira Cloud accepts HTTP Basic auth (email + API token) and OAuth 2.0
//! bearer tokens. API tokens can be kept in the OS keyring, keyed by the
//! configuration profile name.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::error::{ApiError, Result};

/// The keyring service name for jira-rest tokens.
const KEYRING_SERVICE: &str = "jira-rest";

/// Authentication credentials for Jira.
///
/// Only the encoded header value is kept; the raw token is dropped on
/// construction.
#[derive(Clone)]
pub struct Auth {
    /// Email for Basic auth, `None` for bearer tokens.
    email: Option<String>,
    /// The complete `Authorization` header value.
    header: String,
}

impl Auth {
    /// Basic authentication from an Atlassian account email and API token.
    pub fn basic(email: &str, token: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            header: build_basic_header(email, token),
        }
    }

    /// Bearer authentication from an OAuth 2.0 access token.
    pub fn bearer(token: &str) -> Self {
        Self {
            email: None,
            header: format!("Bearer {}", token),
        }
    }

    /// Basic authentication with the token read from the OS keyring.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be retrieved from the keyring.
    pub fn from_keyring(profile_name: &str, email: &str) -> Result<Self> {
        let token = get_token(profile_name)?;
        Ok(Self::basic(email, &token))
    }

    /// The `Authorization` header value.
    pub fn header_value(&self) -> &str {
        &self.header
    }

    /// The account email, for Basic credentials.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scheme = self.header.split(' ').next().unwrap_or_default();
        f.debug_struct("Auth")
            .field("email", &self.email)
            .field("scheme", &scheme)
            .finish()
    }
}

/// Encodes "email:token" in Base64 and prepends "Basic ".
fn build_basic_header(email: &str, token: &str) -> String {
    let credentials = format!("{}:{}", email, token);
    format!("Basic {}", BASE64.encode(credentials.as_bytes()))
}

/// Store an API token in the OS keyring.
///
/// # Errors
///
/// Returns an error if the token cannot be stored in the keyring.
pub fn store_token(profile_name: &str, token: &str) -> Result<()> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, profile_name)
        .map_err(|e| ApiError::Keyring(format!("failed to create keyring entry: {}", e)))?;

    entry
        .set_password(token)
        .map_err(|e| ApiError::Keyring(format!("failed to store token: {}", e)))?;

    Ok(())
}

/// Retrieve an API token from the OS keyring.
///
/// # Errors
///
/// Returns an error if the token cannot be retrieved from the keyring.
pub fn get_token(profile_name: &str) -> Result<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, profile_name)
        .map_err(|e| ApiError::Keyring(format!("failed to access keyring: {}", e)))?;

    entry
        .get_password()
        .map_err(|e| ApiError::Keyring(format!("failed to retrieve token: {}", e)))
}

/// Delete an API token from the OS keyring.
///
/// # Errors
///
/// Returns an error if the token cannot be deleted from the keyring.
pub fn delete_token(profile_name: &str) -> Result<()> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, profile_name)
        .map_err(|e| ApiError::Keyring(format!("failed to access keyring: {}", e)))?;

    entry
        .delete_password()
        .map_err(|e| ApiError::Keyring(format!("failed to delete token: {}", e)))?;

    Ok(())
}

/// Check if a token exists in the OS keyring for a profile.
pub fn has_token(profile_name: &str) -> bool {
    get_token(profile_name).is_ok()
}
