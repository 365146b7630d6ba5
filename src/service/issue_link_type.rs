//! Issue link types.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{LinkType, LinkTypes};

/// Operations on `rest/api/{2|3}/issueLinkType`.
#[derive(Clone)]
pub struct IssueLinkTypeService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl IssueLinkTypeService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    #[instrument(skip(self))]
    pub async fn gets(&self) -> Result<LinkTypes> {
        let endpoint = format!("rest/api/{}/issueLinkType", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, link_type_id: &str) -> Result<LinkType> {
        if link_type_id.is_empty() {
            return Err(Error::NoLinkTypeId);
        }

        let endpoint = format!("rest/api/{}/issueLinkType/{}", self.version, link_type_id);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Create a link type from its `name`, `inward` and `outward` descriptions.
    #[instrument(skip_all)]
    pub async fn create(&self, payload: &LinkType) -> Result<LinkType> {
        let endpoint = format!("rest/api/{}/issueLinkType", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(&self, link_type_id: &str, payload: &LinkType) -> Result<LinkType> {
        if link_type_id.is_empty() {
            return Err(Error::NoLinkTypeId);
        }

        let endpoint = format!("rest/api/{}/issueLinkType/{}", self.version, link_type_id);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, link_type_id: &str) -> Result<ResponseScheme> {
        if link_type_id.is_empty() {
            return Err(Error::NoLinkTypeId);
        }

        let endpoint = format!("rest/api/{}/issueLinkType/{}", self.version, link_type_id);
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

    fn blocks() -> LinkType {
        LinkType {
            name: Some("Blocks".to_string()),
            inward: Some("is blocked by".to_string()),
            outward: Some("blocks".to_string()),
            ..LinkType::default()
        }
    }

    #[tokio::test]
    async fn test_gets() {
        let mock = MockConnector::json(json!({"issueLinkTypes": [{"id": "1000", "name": "Duplicate"}]}));
        let types = IssueLinkTypeService::new(mock.clone(), ApiVersion::V3)
            .gets()
            .await
            .unwrap();

        assert_eq!(mock.endpoint(), "rest/api/3/issueLinkType");
        assert_eq!(types.issue_link_types[0].name.as_deref(), Some("Duplicate"));
    }

    #[tokio::test]
    async fn test_create_and_update() {
        let mock = MockConnector::json(json!({"id": "1010", "name": "Blocks"}));
        let service = IssueLinkTypeService::new(mock.clone(), ApiVersion::V2);

        let created = service.create(&blocks()).await.unwrap();
        let request = mock.last();
        assert_eq!(request.url, "rest/api/2/issueLinkType");
        assert_eq!(
            request.body.unwrap(),
            json!({"name": "Blocks", "inward": "is blocked by", "outward": "blocks"})
        );
        assert_eq!(created.id.as_deref(), Some("1010"));

        service.update("1010", &blocks()).await.unwrap();
        assert_eq!(mock.last().method, Method::PUT);
        assert_eq!(mock.endpoint(), "rest/api/2/issueLinkType/1010");
    }

    #[tokio::test]
    async fn test_get_and_delete() {
        let mock = MockConnector::json(json!({"id": "1000"}));
        let service = IssueLinkTypeService::new(mock.clone(), ApiVersion::V3);

        service.get("1000").await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/issueLinkType/1000");

        service.delete("1000").await.unwrap();
        assert_eq!(mock.last().method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_sentinels() {
        let mock = MockConnector::json(json!({}));
        let service = IssueLinkTypeService::new(mock.clone(), ApiVersion::V3);

        assert!(matches!(service.get("").await, Err(Error::NoLinkTypeId)));
        assert!(matches!(service.update("", &blocks()).await, Err(Error::NoLinkTypeId)));
        assert!(matches!(service.delete("").await, Err(Error::NoLinkTypeId)));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing(|| ApiError::BadRequest("name taken".to_string()));
        let result = IssueLinkTypeService::new(mock, ApiVersion::V3)
            .create(&blocks())
            .await;
        assert!(matches!(result, Err(Error::Api(ApiError::BadRequest(_)))));
    }
}
