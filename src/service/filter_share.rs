//! Filter share permissions and the default share scope.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{SharePermission, SharePermissionPayload, ShareScope};

/// Operations on `rest/api/{2|3}/filter/{id}/permission` and
/// `rest/api/{2|3}/filter/defaultShareScope`.
#[derive(Clone)]
pub struct FilterShareService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl FilterShareService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// The default sharing for new filters.
    #[instrument(skip(self))]
    pub async fn scope(&self) -> Result<ShareScope> {
        let endpoint = format!("rest/api/{}/filter/defaultShareScope", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Set the default sharing for new filters: `GLOBAL`, `AUTHENTICATED` or `PRIVATE`.
    #[instrument(skip(self))]
    pub async fn set_scope(&self, scope: &str) -> Result<ResponseScheme> {
        if scope.is_empty() {
            return Err(Error::NoShareFilterScope);
        }

        let payload = ShareScope {
            scope: scope.to_string(),
        };
        let endpoint = format!("rest/api/{}/filter/defaultShareScope", self.version);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(&payload)?))?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self))]
    pub async fn gets(&self, filter_id: i64) -> Result<Vec<SharePermission>> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }

        let endpoint = format!("rest/api/{}/filter/{}/permission", self.version, filter_id);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Share a filter. Jira answers with every permission of the filter.
    #[instrument(skip(self, payload))]
    pub async fn add(
        &self,
        filter_id: i64,
        payload: &SharePermissionPayload,
    ) -> Result<Vec<SharePermission>> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }

        let endpoint = format!("rest/api/{}/filter/{}/permission", self.version, filter_id);
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, filter_id: i64, permission_id: i64) -> Result<SharePermission> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }
        if permission_id == 0 {
            return Err(Error::NoShareFilterPermissionId);
        }

        let endpoint = format!(
            "rest/api/{}/filter/{}/permission/{}",
            self.version, filter_id, permission_id
        );
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, filter_id: i64, permission_id: i64) -> Result<ResponseScheme> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }
        if permission_id == 0 {
            return Err(Error::NoShareFilterPermissionId);
        }

        let endpoint = format!(
            "rest/api/{}/filter/{}/permission/{}",
            self.version, filter_id, permission_id
        );
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::MockConnector;
    use serde_json::json;

    #[tokio::test]
    async fn test_scope_roundtrip_endpoints() {
        let mock = MockConnector::json(json!({"scope": "GLOBAL"}));
        let service = FilterShareService::new(mock.clone(), ApiVersion::V3);

        assert_eq!(service.scope().await.unwrap().scope, "GLOBAL");
        assert_eq!(mock.endpoint(), "rest/api/3/filter/defaultShareScope");

        service.set_scope("PRIVATE").await.unwrap();
        let request = mock.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.body.unwrap(), json!({"scope": "PRIVATE"}));
    }

    #[tokio::test]
    async fn test_add_permission() {
        let mock = MockConnector::json(json!([{"id": 10000, "type": "project"}]));
        let payload = SharePermissionPayload {
            share_type: "project".to_string(),
            project_id: Some("10001".to_string()),
            ..SharePermissionPayload::default()
        };

        let permissions = FilterShareService::new(mock.clone(), ApiVersion::V2)
            .add(10000, &payload)
            .await
            .unwrap();

        let request = mock.last();
        assert_eq!(request.url, "rest/api/2/filter/10000/permission");
        assert_eq!(request.body.unwrap(), json!({"type": "project", "projectId": "10001"}));
        assert_eq!(permissions[0].share_type, "project");
    }

    #[tokio::test]
    async fn test_get_and_delete_permission() {
        let mock = MockConnector::json(json!([]));
        let permissions = FilterShareService::new(mock.clone(), ApiVersion::V3)
            .gets(10000)
            .await
            .unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/filter/10000/permission");
        assert!(permissions.is_empty());

        let mock = MockConnector::json(json!({"id": 10000, "type": "global"}));
        let service = FilterShareService::new(mock.clone(), ApiVersion::V3);

        let permission = service.get(10000, 2).await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/filter/10000/permission/2");
        assert_eq!(permission.id, Some(10000));

        service.delete(10000, 2).await.unwrap();
        assert_eq!(mock.last().method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_sentinels() {
        let mock = MockConnector::json(json!({}));
        let service = FilterShareService::new(mock.clone(), ApiVersion::V3);

        assert!(matches!(service.set_scope("").await, Err(Error::NoShareFilterScope)));
        assert!(matches!(service.gets(0).await, Err(Error::NoFilterId)));
        assert!(matches!(service.get(0, 1).await, Err(Error::NoFilterId)));
        assert!(matches!(
            service.get(1, 0).await,
            Err(Error::NoShareFilterPermissionId)
        ));
        assert!(matches!(
            service.delete(1, 0).await,
            Err(Error::NoShareFilterPermissionId)
        ));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing(|| ApiError::Unauthorized);
        let result = FilterShareService::new(mock, ApiVersion::V3).scope().await;
        assert!(matches!(result, Err(Error::Api(ApiError::Unauthorized))));
    }
}
