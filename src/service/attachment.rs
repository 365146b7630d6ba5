//! Attachment settings and metadata.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{Attachment, AttachmentArchive, AttachmentSettings};

/// Operations on `rest/api/{2|3}/attachment`.
#[derive(Clone)]
pub struct AttachmentService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl AttachmentService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Whether attachments are enabled and the upload size limit.
    #[instrument(skip(self))]
    pub async fn settings(&self) -> Result<AttachmentSettings> {
        let endpoint = format!("rest/api/{}/attachment/meta", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn metadata(&self, attachment_id: &str) -> Result<Attachment> {
        if attachment_id.is_empty() {
            return Err(Error::NoAttachmentId);
        }

        let endpoint = format!("rest/api/{}/attachment/{}", self.version, attachment_id);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, attachment_id: &str) -> Result<ResponseScheme> {
        if attachment_id.is_empty() {
            return Err(Error::NoAttachmentId);
        }

        let endpoint = format!("rest/api/{}/attachment/{}", self.version, attachment_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// The contents of an archive attachment (zip, jar, ...).
    #[instrument(skip(self))]
    pub async fn human(&self, attachment_id: &str) -> Result<AttachmentArchive> {
        if attachment_id.is_empty() {
            return Err(Error::NoAttachmentId);
        }

        let endpoint = format!(
            "rest/api/{}/attachment/{}/expand/human",
            self.version, attachment_id
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
    async fn test_settings() {
        let mock = MockConnector::json(json!({"enabled": true, "uploadLimit": 1000000}));
        let settings = AttachmentService::new(mock.clone(), ApiVersion::V3)
            .settings()
            .await
            .unwrap();

        assert_eq!(mock.endpoint(), "rest/api/3/attachment/meta");
        assert!(settings.enabled);
        assert_eq!(settings.upload_limit, 1000000);
    }

    #[tokio::test]
    async fn test_metadata_and_human() {
        let mock = MockConnector::json(json!({"id": 10000, "filename": "picture.jpg", "size": 23123}));
        let service = AttachmentService::new(mock.clone(), ApiVersion::V2);

        let attachment = service.metadata("10000").await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/2/attachment/10000");
        assert_eq!(attachment.filename, "picture.jpg");

        service.human("10000").await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/2/attachment/10000/expand/human");
    }

    #[tokio::test]
    async fn test_delete() {
        let mock = MockConnector::empty(204);
        let response = AttachmentService::new(mock.clone(), ApiVersion::V3)
            .delete("10000")
            .await
            .unwrap();
        assert_eq!(mock.last().method, Method::DELETE);
        assert!(response.is_empty());
    }

    #[tokio::test]
    async fn test_sentinels() {
        let mock = MockConnector::json(json!({}));
        let service = AttachmentService::new(mock.clone(), ApiVersion::V3);

        assert!(matches!(service.metadata("").await, Err(Error::NoAttachmentId)));
        assert!(matches!(service.delete("").await, Err(Error::NoAttachmentId)));
        assert!(matches!(service.human("").await, Err(Error::NoAttachmentId)));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing(|| ApiError::Forbidden);
        let result = AttachmentService::new(mock, ApiVersion::V3).settings().await;
        assert!(matches!(result, Err(Error::Api(ApiError::Forbidden))));
    }
}
