//! Project types.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector};
use crate::error::{Error, Result};
use crate::model::ProjectType;

/// Operations on `rest/api/{2|3}/project/type`.
#[derive(Clone)]
pub struct ProjectTypeService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ProjectTypeService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let endpoint = format!("rest/api/{}/project/type{}", self.version, path);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Every project type, licensed or not.
    #[instrument(skip(self))]
    pub async fn gets(&self) -> Result<Vec<ProjectType>> {
        self.fetch("").await
    }

    /// Project types with a valid license.
    #[instrument(skip(self))]
    pub async fn licensed(&self) -> Result<Vec<ProjectType>> {
        self.fetch("/accessible").await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, type_key: &str) -> Result<ProjectType> {
        if type_key.is_empty() {
            return Err(Error::NoProjectTypeKey);
        }
        self.fetch(&format!("/{}", type_key)).await
    }

    /// The project type if it is accessible to the user.
    #[instrument(skip(self))]
    pub async fn accessible(&self, type_key: &str) -> Result<ProjectType> {
        if type_key.is_empty() {
            return Err(Error::NoProjectTypeKey);
        }
        self.fetch(&format!("/{}/accessible", type_key)).await
    }
}
