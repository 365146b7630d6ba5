//! Connection profiles.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::api::ApiVersion;

/// Connection details for one Jira site.
///
/// The API token is not part of the profile; it is read from the OS keyring
/// entry named after the profile, or from `JIRA_API_TOKEN`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// Unique, whitespace-free name.
    pub name: String,
    /// Site root, e.g. `https://company.atlassian.net`.
    pub url: String,
    /// Account email used for Basic authentication.
    pub email: String,
    /// REST API generation used by default for this site.
    #[serde(default)]
    pub api_version: ApiVersion,
}

impl Profile {
    /// A profile targeting API v3.
    pub fn new(name: String, url: String, email: String) -> Self {
        Self {
            name,
            url,
            email,
            api_version: ApiVersion::default(),
        }
    }

    /// Check name, URL and email.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ConfigError::ValidationError(msg));

        if self.name.is_empty() {
            return invalid("profile name cannot be empty".to_string());
        }
        if self.name.contains(char::is_whitespace) {
            return invalid(format!(
                "profile name '{}' cannot contain whitespace",
                self.name
            ));
        }

        if self.url.is_empty() {
            return invalid(format!("profile '{}': URL cannot be empty", self.name));
        }
        if !self.url.starts_with("https://") && !self.url.starts_with("http://") {
            return invalid(format!(
                "profile '{}': URL must start with http:// or https://",
                self.name
            ));
        }

        if self.email.is_empty() {
            return invalid(format!("profile '{}': email cannot be empty", self.name));
        }
        if !self.email.contains('@') {
            return invalid(format!(
                "profile '{}': '{}' does not appear to be a valid email address",
                self.name, self.email
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(name: &str, url: &str, email: &str) -> Profile {
        Profile::new(name.to_string(), url.to_string(), email.to_string())
    }

    fn validation_message(profile: &Profile) -> String {
        profile.validate().unwrap_err().to_string()
    }

    #[test]
    fn test_new_defaults_to_v3() {
        let profile = site("work", "https://company.atlassian.net", "user@company.com");
        assert_eq!(profile.api_version, ApiVersion::V3);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_local_http_site_accepted() {
        let profile = site("local", "http://localhost:8080", "admin@localhost");
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_name_rules() {
        let empty = site("", "https://company.atlassian.net", "user@company.com");
        assert!(validation_message(&empty).contains("name cannot be empty"));

        let spaced = site("my work", "https://company.atlassian.net", "user@company.com");
        assert!(validation_message(&spaced).contains("cannot contain whitespace"));
    }

    #[test]
    fn test_url_rules() {
        let empty = site("work", "", "user@company.com");
        assert!(validation_message(&empty).contains("URL cannot be empty"));

        let bare = site("work", "company.atlassian.net", "user@company.com");
        assert!(validation_message(&bare).contains("must start with http"));
    }

    #[test]
    fn test_email_rules() {
        let empty = site("work", "https://company.atlassian.net", "");
        assert!(validation_message(&empty).contains("email cannot be empty"));

        let malformed = site("work", "https://company.atlassian.net", "not-an-email");
        assert!(validation_message(&malformed).contains("valid email"));
    }

    #[test]
    fn test_api_version_in_toml() {
        let profile: Profile = toml::from_str(
            r#"
            name = "legacy"
            url = "https://legacy.atlassian.net"
            email = "user@company.com"
            api_version = "2"
            "#,
        )
        .unwrap();
        assert_eq!(profile.api_version, ApiVersion::V2);

        let without: Profile = toml::from_str(
            r#"
            name = "work"
            url = "https://company.atlassian.net"
            email = "user@company.com"
            "#,
        )
        .unwrap();
        assert_eq!(without.api_version, ApiVersion::V3);
    }
}
