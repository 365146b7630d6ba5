//! Field configurations.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{FieldConfiguration, FieldConfigurationPayload, Page};

/// Operations on `rest/api/{2|3}/fieldconfiguration`.
#[derive(Clone)]
pub struct FieldConfigurationService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl FieldConfigurationService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// List field configurations, optionally only the given IDs or only the default one.
    #[instrument(skip(self))]
    pub async fn gets(
        &self,
        ids: &[i64],
        is_default: bool,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<FieldConfiguration>> {
        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_each("id", ids)
            .add_flag("isDefault", is_default);
        let endpoint = query.append_to(format!("rest/api/{}/fieldconfiguration", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<FieldConfiguration> {
        if name.is_empty() {
            return Err(Error::NoFieldConfigurationName);
        }

        let payload = FieldConfigurationPayload {
            name: name.to_string(),
            description: description.map(str::to_string),
        };
        let endpoint = format!("rest/api/{}/fieldconfiguration", self.version);
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<ResponseScheme> {
        if id == 0 {
            return Err(Error::NoFieldConfigurationId);
        }
        if name.is_empty() {
            return Err(Error::NoFieldConfigurationName);
        }

        let payload = FieldConfigurationPayload {
            name: name.to_string(),
            description: description.map(str::to_string),
        };
        let endpoint = format!("rest/api/{}/fieldconfiguration/{}", self.version, id);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(&payload)?))?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<ResponseScheme> {
        if id == 0 {
            return Err(Error::NoFieldConfigurationId);
        }

        let endpoint = format!("rest/api/{}/fieldconfiguration/{}", self.version, id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }
}
