//! Project categories.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{ProjectCategory, ProjectCategoryPayload};

/// Operations on `rest/api/{2|3}/projectCategory`.
#[derive(Clone)]
pub struct ProjectCategoryService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ProjectCategoryService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    fn category_path(&self, category_id: i64) -> Result<String> {
        if category_id == 0 {
            return Err(Error::NoProjectCategoryId);
        }
        Ok(format!("rest/api/{}/projectCategory/{}", self.version, category_id))
    }

    #[instrument(skip(self))]
    pub async fn gets(&self) -> Result<Vec<ProjectCategory>> {
        let endpoint = format!("rest/api/{}/projectCategory", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, category_id: i64) -> Result<ProjectCategory> {
        let endpoint = self.category_path(category_id)?;

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: &ProjectCategoryPayload) -> Result<ProjectCategory> {
        let endpoint = format!("rest/api/{}/projectCategory", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        category_id: i64,
        payload: &ProjectCategoryPayload,
    ) -> Result<ProjectCategory> {
        let endpoint = self.category_path(category_id)?;

        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, category_id: i64) -> Result<ResponseScheme> {
        let endpoint = self.category_path(category_id)?;

        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }
}
