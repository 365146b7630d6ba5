//! Project components.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{Component, ComponentCount, ComponentPayload};

/// Operations on `rest/api/{2|3}/component`.
#[derive(Clone)]
pub struct ProjectComponentService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ProjectComponentService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    fn component_path(&self, component_id: &str) -> Result<String> {
        if component_id.is_empty() {
            return Err(Error::NoComponentId);
        }
        Ok(format!("rest/api/{}/component/{}", self.version, component_id))
    }

    /// Create a component in the project named by `payload.project`.
    #[instrument(skip(self, payload), fields(project = ?payload.project))]
    pub async fn create(&self, payload: &ComponentPayload) -> Result<Component> {
        let endpoint = format!("rest/api/{}/component", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Every component of a project.
    #[instrument(skip(self))]
    pub async fn gets(&self, project_key: &str) -> Result<Vec<Component>> {
        if project_key.is_empty() {
            return Err(Error::NoProjectIdOrKey);
        }

        let endpoint = format!("rest/api/{}/project/{}/components", self.version, project_key);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Number of issues assigned to the component.
    #[instrument(skip(self))]
    pub async fn count(&self, component_id: &str) -> Result<ComponentCount> {
        let endpoint = format!("{}/relatedIssueCounts", self.component_path(component_id)?);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, component_id: &str) -> Result<ResponseScheme> {
        let endpoint = self.component_path(component_id)?;

        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(&self, component_id: &str, payload: &ComponentPayload) -> Result<Component> {
        let endpoint = self.component_path(component_id)?;

        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, component_id: &str) -> Result<Component> {
        let endpoint = self.component_path(component_id)?;

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
