//! Issue types.

use std::sync::Arc;

use reqwest::Method;
use tracing::{debug, instrument};

use crate::api::{json_body, ApiVersion, Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{IssueType, IssueTypePayload};

/// Operations on `rest/api/{2|3}/issuetype`.
#[derive(Clone)]
pub struct IssueTypeService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl IssueTypeService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Every issue type the user can see.
    #[instrument(skip(self))]
    pub async fn gets(&self) -> Result<Vec<IssueType>> {
        let endpoint = format!("rest/api/{}/issuetype", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        let issue_types: Vec<IssueType> = response.json()?;
        debug!("Fetched {} issue types", issue_types.len());
        Ok(issue_types)
    }

    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: &IssueTypePayload) -> Result<IssueType> {
        let endpoint = format!("rest/api/{}/issuetype", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, issue_type_id: &str) -> Result<IssueType> {
        if issue_type_id.is_empty() {
            return Err(Error::NoIssueTypeId);
        }

        let endpoint = format!("rest/api/{}/issuetype/{}", self.version, issue_type_id);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(&self, issue_type_id: &str, payload: &IssueTypePayload) -> Result<IssueType> {
        if issue_type_id.is_empty() {
            return Err(Error::NoIssueTypeId);
        }

        let endpoint = format!("rest/api/{}/issuetype/{}", self.version, issue_type_id);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, issue_type_id: &str) -> Result<ResponseScheme> {
        if issue_type_id.is_empty() {
            return Err(Error::NoIssueTypeId);
        }

        let endpoint = format!("rest/api/{}/issuetype/{}", self.version, issue_type_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Issue types that can replace this one, i.e. those sharing its workflow
    /// and field configuration.
    #[instrument(skip(self))]
    pub async fn alternatives(&self, issue_type_id: &str) -> Result<Vec<IssueType>> {
        if issue_type_id.is_empty() {
            return Err(Error::NoIssueTypeId);
        }

        let endpoint = format!(
            "rest/api/{}/issuetype/{}/alternatives",
            self.version, issue_type_id
        );
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::MockConnector;
    use serde_json::json;

    #[tokio::test]
    async fn test_gets() {
        let mock = MockConnector::json(json!([
            {"id": "10000", "name": "Epic", "hierarchyLevel": 1},
            {"id": "10003", "name": "Sub-task", "subtask": true, "hierarchyLevel": -1}
        ]));
        let issue_types = IssueTypeService::new(mock.clone(), ApiVersion::V3)
            .gets()
            .await
            .unwrap();

        assert_eq!(mock.endpoint(), "rest/api/3/issuetype");
        assert_eq!(issue_types[0].hierarchy_level, 1);
        assert!(issue_types[1].subtask);
    }

    #[tokio::test]
    async fn test_create() {
        let mock = MockConnector::json(json!({"id": "10010", "name": "Incident"}));
        let payload = IssueTypePayload {
            name: Some("Incident".to_string()),
            description: Some("Production outages".to_string()),
            issue_type: Some("standard".to_string()),
            ..IssueTypePayload::default()
        };

        let created = IssueTypeService::new(mock.clone(), ApiVersion::V2)
            .create(&payload)
            .await
            .unwrap();

        let request = mock.last();
        assert_eq!(request.url, "rest/api/2/issuetype");
        assert_eq!(
            request.body.unwrap(),
            json!({"name": "Incident", "description": "Production outages", "type": "standard"})
        );
        assert_eq!(created.id, "10010");
    }

    #[tokio::test]
    async fn test_get_update_delete_alternatives() {
        let mock = MockConnector::json(json!([]));
        let service = IssueTypeService::new(mock.clone(), ApiVersion::V3);

        service.alternatives("10000").await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/issuetype/10000/alternatives");

        service.delete("10000").await.unwrap();
        assert_eq!(mock.last().method, Method::DELETE);
        assert_eq!(mock.endpoint(), "rest/api/3/issuetype/10000");

        let mock = MockConnector::json(json!({"id": "10000", "name": "Renamed"}));
        let service = IssueTypeService::new(mock.clone(), ApiVersion::V3);
        let payload = IssueTypePayload {
            name: Some("Renamed".to_string()),
            avatar_id: Some(10315),
            ..IssueTypePayload::default()
        };
        let updated = service.update("10000", &payload).await.unwrap();
        assert_eq!(mock.last().method, Method::PUT);
        assert_eq!(mock.last().body.unwrap(), json!({"name": "Renamed", "avatarId": 10315}));
        assert_eq!(updated.name, "Renamed");

        service.get("10000").await.unwrap();
        assert_eq!(mock.last().method, Method::GET);
    }

    #[tokio::test]
    async fn test_sentinels() {
        let mock = MockConnector::json(json!({}));
        let service = IssueTypeService::new(mock.clone(), ApiVersion::V3);
        let payload = IssueTypePayload::default();

        assert!(matches!(service.get("").await, Err(Error::NoIssueTypeId)));
        assert!(matches!(service.update("", &payload).await, Err(Error::NoIssueTypeId)));
        assert!(matches!(service.delete("").await, Err(Error::NoIssueTypeId)));
        assert!(matches!(service.alternatives("").await, Err(Error::NoIssueTypeId)));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing(|| ApiError::NotFound("issue type 1".to_string()));
        let result = IssueTypeService::new(mock, ApiVersion::V2).get("1").await;
        assert!(matches!(result, Err(Error::Api(ApiError::NotFound(_)))));
    }
}
