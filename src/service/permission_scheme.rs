//! Permission schemes.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{PermissionScheme, PermissionSchemePayload, PermissionSchemes};

/// Operations on `rest/api/{2|3}/permissionscheme`.
#[derive(Clone)]
pub struct PermissionSchemeService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl PermissionSchemeService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    #[instrument(skip(self))]
    pub async fn gets(&self, expand: &[String]) -> Result<PermissionSchemes> {
        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint = query.append_to(format!("rest/api/{}/permissionscheme", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, scheme_id: i64, expand: &[String]) -> Result<PermissionScheme> {
        if scheme_id == 0 {
            return Err(Error::NoPermissionSchemeId);
        }

        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint = query.append_to(format!(
            "rest/api/{}/permissionscheme/{}",
            self.version, scheme_id
        ));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, scheme_id: i64) -> Result<ResponseScheme> {
        if scheme_id == 0 {
            return Err(Error::NoPermissionSchemeId);
        }

        let endpoint = format!("rest/api/{}/permissionscheme/{}", self.version, scheme_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Create a scheme, optionally with its grants.
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create(&self, payload: &PermissionSchemePayload) -> Result<PermissionScheme> {
        let endpoint = format!("rest/api/{}/permissionscheme", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Update a scheme. Grants in the payload replace the existing ones.
    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        scheme_id: i64,
        payload: &PermissionSchemePayload,
    ) -> Result<PermissionScheme> {
        if scheme_id == 0 {
            return Err(Error::NoPermissionSchemeId);
        }

        let endpoint = format!("rest/api/{}/permissionscheme/{}", self.version, scheme_id);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
