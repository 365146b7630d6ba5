//! Configuration for the `jira-rest` binary and for callers that want
//! profile-based clients.
//!
//! Profiles and settings live in a TOML file under the platform config
//! directory (`<config_dir>/jira-rest/config.toml`). `JIRA_REST_CONFIG`
//! points at a different file. API tokens are never stored here.

mod profile;
mod settings;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

pub use profile::Profile;
pub use settings::Settings;

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV_VAR: &str = "JIRA_REST_CONFIG";

const CONFIG_DIR_NAME: &str = "jira-rest";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading, saving or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    NoConfigDir,
    #[error("failed to create configuration directory: {0}")]
    CreateDirError(#[source] std::io::Error),
    #[error("failed to read configuration file: {0}")]
    ReadError(#[source] std::io::Error),
    #[error("failed to write configuration file: {0}")]
    WriteError(#[source] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("invalid configuration: {0}")]
    ValidationError(String),
    #[error("profile '{0}' not found")]
    ProfileNotFound(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// The configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

impl Config {
    /// Path of the configuration file, honouring `JIRA_REST_CONFIG`.
    pub fn path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = Self::load_unvalidated_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default location without [`Config::validate`], so that a
    /// broken file can still be repaired and saved.
    pub fn load_unvalidated() -> Result<Self> {
        Self::load_unvalidated_from(&Self::path()?)
    }

    pub fn load_unvalidated_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), profiles = config.profiles.len(), "Loaded configuration");
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::CreateDirError)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(ConfigError::WriteError)?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Check every profile and that profile names are unique.
    pub fn validate(&self) -> Result<()> {
        for (i, profile) in self.profiles.iter().enumerate() {
            profile.validate()?;
            if self.profiles[..i].iter().any(|p| p.name == profile.name) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate profile name '{}'",
                    profile.name
                )));
            }
        }

        if let Some(name) = &self.settings.default_profile {
            if self.get_profile(name).is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "default profile '{}' does not exist",
                    name
                )));
            }
        }

        Ok(())
    }

    pub fn get_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// The default profile, falling back to the first one.
    pub fn get_default_profile(&self) -> Option<&Profile> {
        self.settings
            .default_profile
            .as_deref()
            .and_then(|name| self.get_profile(name))
            .or_else(|| self.profiles.first())
    }

    /// Resolve a profile by name, or the default when `name` is `None`.
    pub fn resolve_profile(&self, name: Option<&str>) -> Result<&Profile> {
        match name {
            Some(name) => self
                .get_profile(name)
                .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string())),
            None => self
                .get_default_profile()
                .ok_or_else(|| ConfigError::ProfileNotFound("<default>".to_string())),
        }
    }

    /// Add a profile or replace the one with the same name.
    pub fn upsert_profile(&mut self, profile: Profile) -> Result<()> {
        profile.validate()?;
        match self.profiles.iter_mut().find(|p| p.name == profile.name) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
        Ok(())
    }

    /// Remove a profile, clearing the default if it pointed at it.
    pub fn remove_profile(&mut self, name: &str) -> Result<Profile> {
        let index = self
            .profiles
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if self.settings.default_profile.as_deref() == Some(name) {
            self.settings.default_profile = None;
        }
        Ok(self.profiles.remove(index))
    }

    /// Whether `default_profile` is set and names an existing profile.
    pub fn has_default_profile(&self) -> bool {
        self.settings
            .default_profile
            .as_deref()
            .is_some_and(|name| self.get_profile(name).is_some())
    }

    pub fn set_default_profile(&mut self, name: &str) -> Result<()> {
        if self.get_profile(name).is_none() {
            return Err(ConfigError::ProfileNotFound(name.to_string()));
        }
        self.settings.default_profile = Some(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiVersion;
    use serial_test::serial;
    use tempfile::TempDir;

    fn profile(name: &str) -> Profile {
        Profile::new(
            name.to_string(),
            "https://company.atlassian.net".to_string(),
            "user@company.com".to_string(),
        )
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert!(config.profiles.is_empty());
        assert_eq!(config.settings.timeout_secs, 30);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.upsert_profile(profile("work")).unwrap();
        let mut personal = profile("personal");
        personal.api_version = ApiVersion::V2;
        config.upsert_profile(personal).unwrap();
        config.set_default_profile("personal").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.profiles.len(), 2);
        assert_eq!(loaded.get_default_profile().unwrap().name, "personal");
        assert_eq!(loaded.get_profile("personal").unwrap().api_version, ApiVersion::V2);
    }

    #[test]
    fn test_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "profiles = 3").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_dangling_default_loads_unvalidated_and_repairs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\ndefault_profile = \"gone\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ValidationError(_))
        ));

        let mut config = Config::load_unvalidated_from(&path).unwrap();
        assert!(!config.has_default_profile());
        config.upsert_profile(profile("work")).unwrap();
        config.set_default_profile("work").unwrap();
        assert!(config.has_default_profile());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.default_profile.as_deref(), Some("work"));
    }

    #[test]
    fn test_duplicate_profiles_rejected() {
        let config = Config {
            settings: Settings::default(),
            profiles: vec![profile("work"), profile("work")],
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate profile name"));
    }

    #[test]
    fn test_default_profile_falls_back_to_first() {
        let mut config = Config::default();
        assert!(config.get_default_profile().is_none());

        config.upsert_profile(profile("work")).unwrap();
        config.upsert_profile(profile("home")).unwrap();
        assert_eq!(config.get_default_profile().unwrap().name, "work");
        assert_eq!(config.resolve_profile(Some("home")).unwrap().name, "home");
        assert!(matches!(
            config.resolve_profile(Some("missing")),
            Err(ConfigError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn test_remove_profile_clears_default() {
        let mut config = Config::default();
        config.upsert_profile(profile("work")).unwrap();
        config.set_default_profile("work").unwrap();

        config.remove_profile("work").unwrap();
        assert!(config.settings.default_profile.is_none());
        assert!(matches!(
            config.remove_profile("work"),
            Err(ConfigError::ProfileNotFound(_))
        ));
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let mut config = Config::default();
        config.upsert_profile(profile("work")).unwrap();

        let mut updated = profile("work");
        updated.email = "other@company.com".to_string();
        config.upsert_profile(updated).unwrap();

        assert_eq!(config.profiles.len(), 1);
        assert_eq!(config.profiles[0].email, "other@company.com");
    }

    #[test]
    #[serial]
    fn test_path_env_override() {
        std::env::set_var(CONFIG_ENV_VAR, "/tmp/jira-rest-test/config.toml");
        let path = Config::path().unwrap();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(path, PathBuf::from("/tmp/jira-rest-test/config.toml"));
    }
}
