//! Client settings shared by all profiles.

use serde::{Deserialize, Serialize};

use crate::api::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The name of the default profile to use.
    pub default_profile: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_profile: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
