//! Grants within a permission scheme.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{PermissionGrant, PermissionGrantPayload, PermissionGrants};

/// Operations on `rest/api/{2|3}/permissionscheme/{schemeId}/permission`.
#[derive(Clone)]
pub struct PermissionGrantService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl PermissionGrantService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    fn grants_path(&self, scheme_id: i64) -> Result<String> {
        if scheme_id == 0 {
            return Err(Error::NoPermissionSchemeId);
        }
        Ok(format!(
            "rest/api/{}/permissionscheme/{}/permission",
            self.version, scheme_id
        ))
    }

    #[instrument(skip(self, payload), fields(permission = %payload.permission))]
    pub async fn create(
        &self,
        scheme_id: i64,
        payload: &PermissionGrantPayload,
    ) -> Result<PermissionGrant> {
        let endpoint = self.grants_path(scheme_id)?;

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn gets(&self, scheme_id: i64, expand: &[String]) -> Result<PermissionGrants> {
        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint = query.append_to(self.grants_path(scheme_id)?);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        scheme_id: i64,
        grant_id: i64,
        expand: &[String],
    ) -> Result<PermissionGrant> {
        let path = self.grants_path(scheme_id)?;
        if grant_id == 0 {
            return Err(Error::NoPermissionGrantId);
        }

        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint = query.append_to(format!("{}/{}", path, grant_id));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, scheme_id: i64, grant_id: i64) -> Result<ResponseScheme> {
        let path = self.grants_path(scheme_id)?;
        if grant_id == 0 {
            return Err(Error::NoPermissionGrantId);
        }

        let endpoint = format!("{}/{}", path, grant_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }
}
