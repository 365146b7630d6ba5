//! Remote issue links.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{RemoteLink, RemoteLinkIdentify};

/// Operations on `rest/api/{2|3}/issue/{issueIdOrKey}/remotelink`.
#[derive(Clone)]
pub struct RemoteLinkService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl RemoteLinkService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Remote links of an issue, or only the one with `global_id`.
    #[instrument(skip(self))]
    pub async fn gets(&self, issue_key: &str, global_id: Option<&str>) -> Result<Vec<RemoteLink>> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let mut query = Query::new();
        query.add_opt("globalId", global_id);
        let endpoint = query.append_to(format!(
            "rest/api/{}/issue/{}/remotelink",
            self.version, issue_key
        ));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, issue_key: &str, link_id: &str) -> Result<RemoteLink> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        if link_id.is_empty() {
            return Err(Error::NoRemoteLinkId);
        }

        let endpoint = format!(
            "rest/api/{}/issue/{}/remotelink/{}",
            self.version, issue_key, link_id
        );
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Create a remote link, or update the existing one with the same global ID.
    #[instrument(skip(self, payload))]
    pub async fn create(&self, issue_key: &str, payload: &RemoteLink) -> Result<RemoteLinkIdentify> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let endpoint = format!("rest/api/{}/issue/{}/remotelink", self.version, issue_key);
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        issue_key: &str,
        link_id: &str,
        payload: &RemoteLink,
    ) -> Result<ResponseScheme> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        if link_id.is_empty() {
            return Err(Error::NoRemoteLinkId);
        }

        let endpoint = format!(
            "rest/api/{}/issue/{}/remotelink/{}",
            self.version, issue_key, link_id
        );
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, issue_key: &str, link_id: &str) -> Result<ResponseScheme> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        if link_id.is_empty() {
            return Err(Error::NoRemoteLinkId);
        }

        let endpoint = format!(
            "rest/api/{}/issue/{}/remotelink/{}",
            self.version, issue_key, link_id
        );
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_global_id(
        &self,
        issue_key: &str,
        global_id: &str,
    ) -> Result<ResponseScheme> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        if global_id.is_empty() {
            return Err(Error::NoRemoteLinkGlobalId);
        }

        let mut query = Query::new();
        query.add("globalId", global_id);
        let endpoint = query.append_to(format!(
            "rest/api/{}/issue/{}/remotelink",
            self.version, issue_key
        ));

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
    use crate::model::{RemoteLinkApplication, RemoteLinkObject};
    use crate::test_support::MockConnector;
    use serde_json::json;

    fn payload() -> RemoteLink {
        RemoteLink {
            global_id: Some("system=http://www.mycompany.com/support&id=1".to_string()),
            application: Some(RemoteLinkApplication {
                app_type: Some("com.acme.tracker".to_string()),
                name: Some("My Acme Tracker".to_string()),
            }),
            relationship: Some("causes".to_string()),
            object: Some(RemoteLinkObject {
                url: "http://www.mycompany.com/support?id=1".to_string(),
                title: "TSTSUP-111".to_string(),
                ..RemoteLinkObject::default()
            }),
            ..RemoteLink::default()
        }
    }

    #[tokio::test]
    async fn test_gets_with_global_id() {
        let mock = MockConnector::json(json!([{"id": 10000, "globalId": "system=x&id=1"}]));
        let service = RemoteLinkService::new(mock.clone(), ApiVersion::V3);

        let links = service.gets("KP-1", Some("system=x&id=1")).await.unwrap();
        assert_eq!(
            mock.endpoint(),
            "rest/api/3/issue/KP-1/remotelink?globalId=system%3Dx%26id%3D1"
        );
        assert_eq!(links[0].id, Some(10000));

        service.gets("KP-1", None).await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/issue/KP-1/remotelink");
    }

    #[tokio::test]
    async fn test_create() {
        let mock = MockConnector::json(json!({"id": 10000, "self": "https://example/remotelink/10000"}));
        let created = RemoteLinkService::new(mock.clone(), ApiVersion::V2)
            .create("KP-1", &payload())
            .await
            .unwrap();

        let request = mock.last();
        assert_eq!(request.url, "rest/api/2/issue/KP-1/remotelink");
        let body = request.body.unwrap();
        assert_eq!(body["application"]["type"], "com.acme.tracker");
        assert_eq!(body["object"]["title"], "TSTSUP-111");
        assert_eq!(created.id, 10000);
    }

    #[tokio::test]
    async fn test_get_update_and_delete_by_id() {
        let mock = MockConnector::json(json!({"id": 10000}));
        let service = RemoteLinkService::new(mock.clone(), ApiVersion::V3);

        service.get("KP-1", "10000").await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/issue/KP-1/remotelink/10000");

        service.update("KP-1", "10000", &payload()).await.unwrap();
        assert_eq!(mock.last().method, Method::PUT);

        service.delete_by_id("KP-1", "10000").await.unwrap();
        assert_eq!(mock.last().method, Method::DELETE);
        assert_eq!(mock.endpoint(), "rest/api/3/issue/KP-1/remotelink/10000");
    }

    #[tokio::test]
    async fn test_delete_by_global_id() {
        let mock = MockConnector::empty(204);
        RemoteLinkService::new(mock.clone(), ApiVersion::V3)
            .delete_by_global_id("KP-1", "system=x")
            .await
            .unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/issue/KP-1/remotelink?globalId=system%3Dx");
    }

    #[tokio::test]
    async fn test_sentinels() {
        let mock = MockConnector::json(json!({}));
        let service = RemoteLinkService::new(mock.clone(), ApiVersion::V3);

        assert!(matches!(service.gets("", None).await, Err(Error::NoIssueKeyOrId)));
        assert!(matches!(service.get("KP-1", "").await, Err(Error::NoRemoteLinkId)));
        assert!(matches!(service.create("", &payload()).await, Err(Error::NoIssueKeyOrId)));
        assert!(matches!(
            service.update("KP-1", "", &payload()).await,
            Err(Error::NoRemoteLinkId)
        ));
        assert!(matches!(service.delete_by_id("KP-1", "").await, Err(Error::NoRemoteLinkId)));
        assert!(matches!(
            service.delete_by_global_id("KP-1", "").await,
            Err(Error::NoRemoteLinkGlobalId)
        ));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing(|| ApiError::Unauthorized);
        let result = RemoteLinkService::new(mock, ApiVersion::V3)
            .get("KP-1", "1")
            .await;
        assert!(matches!(result, Err(Error::Api(ApiError::Unauthorized))));
    }
}
