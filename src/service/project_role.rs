//! Project roles.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector};
use crate::error::{Error, Result};
use crate::model::{ProjectRole, ProjectRolePayload};

#[derive(Clone)]
pub struct ProjectRoleService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ProjectRoleService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Roles of a project, without their actors.
    #[instrument(skip(self))]
    pub async fn details(&self, project_key: &str) -> Result<Vec<ProjectRole>> {
        if project_key.is_empty() {
            return Err(Error::NoProjectIdOrKey);
        }

        let endpoint = format!("rest/api/{}/project/{}/roledetails", self.version, project_key);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Every project role on the site.
    #[instrument(skip(self))]
    pub async fn global(&self) -> Result<Vec<ProjectRole>> {
        let endpoint = format!("rest/api/{}/role", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// A role of a project, including its actors.
    #[instrument(skip(self))]
    pub async fn get(&self, project_key: &str, role_id: i64) -> Result<ProjectRole> {
        if project_key.is_empty() {
            return Err(Error::NoProjectIdOrKey);
        }
        if role_id == 0 {
            return Err(Error::NoProjectRoleId);
        }

        let endpoint = format!(
            "rest/api/{}/project/{}/role/{}",
            self.version, project_key, role_id
        );
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create(&self, payload: &ProjectRolePayload) -> Result<ProjectRole> {
        let endpoint = format!("rest/api/{}/role", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
