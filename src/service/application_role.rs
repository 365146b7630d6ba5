//! Application roles.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector};
use crate::error::{Error, Result};
use crate::model::ApplicationRole;

/// Operations on `rest/api/{2|3}/applicationrole`.
#[derive(Clone)]
pub struct ApplicationRoleService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ApplicationRoleService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// All application roles of the site.
    #[instrument(skip(self))]
    pub async fn gets(&self) -> Result<Vec<ApplicationRole>> {
        let endpoint = format!("rest/api/{}/applicationrole", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// An application role by key, e.g. `jira-software`.
    #[instrument(skip(self))]
    pub async fn get(&self, key: &str) -> Result<ApplicationRole> {
        if key.is_empty() {
            return Err(Error::NoApplicationRole);
        }

        let endpoint = format!("rest/api/{}/applicationrole/{}", self.version, key);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
