//! Permissions.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector};
use crate::error::{Error, Result};
use crate::model::permission::PermittedProjectsPayload;
use crate::model::{PermissionCheckPayload, PermissionCheckResult, Permissions, PermittedProjects};

/// Operations on `rest/api/{2|3}/permissions`.
#[derive(Clone)]
pub struct PermissionService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl PermissionService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Every permission on the site, keyed by permission key.
    #[instrument(skip(self))]
    pub async fn gets(&self) -> Result<Permissions> {
        let endpoint = format!("rest/api/{}/permissions", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Check global and project permissions of a user (the caller when no
    /// account is given).
    #[instrument(skip_all)]
    pub async fn check(&self, payload: &PermissionCheckPayload) -> Result<PermissionCheckResult> {
        let endpoint = format!("rest/api/{}/permissions/check", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Projects where the caller holds all of `permissions`.
    #[instrument(skip(self))]
    pub async fn projects(&self, permissions: &[String]) -> Result<PermittedProjects> {
        if permissions.is_empty() {
            return Err(Error::NoPermissionKeys);
        }

        let endpoint = format!("rest/api/{}/permissions/project", self.version);
        let payload = PermittedProjectsPayload { permissions };
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::model::ProjectPermissionCheck;
    use crate::test_support::MockConnector;
    use serde_json::json;

    #[tokio::test]
    async fn test_gets() {
        let mock = MockConnector::json(json!({
            "permissions": {
                "BULK_CHANGE": {"key": "BULK_CHANGE", "name": "Bulk Change", "type": "GLOBAL"}
            }
        }));
        let permissions = PermissionService::new(mock.clone(), ApiVersion::V3)
            .gets()
            .await
            .unwrap();

        assert_eq!(mock.endpoint(), "rest/api/3/permissions");
        assert_eq!(permissions.permissions["BULK_CHANGE"].name, "Bulk Change");
    }

    #[tokio::test]
    async fn test_check() {
        let mock = MockConnector::json(json!({
            "globalPermissions": ["ADMINISTER"],
            "projectPermissions": [{"permission": "EDIT_ISSUES", "issues": [10010], "projects": []}]
        }));
        let payload = PermissionCheckPayload {
            account_id: Some("5b10a2844c20165700ede21g".to_string()),
            global_permissions: vec!["ADMINISTER".to_string()],
            project_permissions: vec![ProjectPermissionCheck {
                permission: "EDIT_ISSUES".to_string(),
                issues: vec![10010, 10011],
                projects: vec![],
            }],
        };

        let result = PermissionService::new(mock.clone(), ApiVersion::V2)
            .check(&payload)
            .await
            .unwrap();

        let request = mock.last();
        assert_eq!(request.url, "rest/api/2/permissions/check");
        assert_eq!(request.body.unwrap()["projectPermissions"][0]["issues"], json!([10010, 10011]));
        assert_eq!(result.project_permissions[0].issues, vec![10010]);
    }

    #[tokio::test]
    async fn test_projects() {
        let mock = MockConnector::json(json!({"projects": [{"id": 10000, "key": "KP"}]}));
        let service = PermissionService::new(mock.clone(), ApiVersion::V3);

        let projects = service
            .projects(&["EDIT_ISSUES".to_string()])
            .await
            .unwrap();
        let request = mock.last();
        assert_eq!(request.url, "rest/api/3/permissions/project");
        assert_eq!(request.body.unwrap(), json!({"permissions": ["EDIT_ISSUES"]}));
        assert_eq!(projects.projects[0].key, "KP");

        assert!(matches!(service.projects(&[]).await, Err(Error::NoPermissionKeys)));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing(|| ApiError::Forbidden);
        let result = PermissionService::new(mock, ApiVersion::V3).gets().await;
        assert!(matches!(result, Err(Error::Api(ApiError::Forbidden))));
    }
}
