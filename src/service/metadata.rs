//! Create and edit metadata for issues.
//!
//! The shape of both responses depends on the fields configured on the
//! relevant screens, so they are returned as raw JSON.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

use crate::api::{ApiVersion, Connector, Query};
use crate::error::{Error, Result};
use crate::model::CreateMetaOptions;

#[derive(Clone)]
pub struct MetadataService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl MetadataService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Fields that can be edited on an issue and the operations they support.
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        issue_key: &str,
        override_screen_security: bool,
        override_editable_flag: bool,
    ) -> Result<Value> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let mut query = Query::new();
        query
            .add("overrideEditableFlag", override_editable_flag)
            .add("overrideScreenSecurity", override_screen_security);
        let endpoint = query.append_to(format!(
            "rest/api/{}/issue/{}/editmeta",
            self.version, issue_key
        ));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Projects, issue types and fields available when creating issues.
    #[instrument(skip(self, options))]
    pub async fn create(&self, options: &CreateMetaOptions) -> Result<Value> {
        let mut query = Query::new();
        query
            .add_joined("projectIds", &options.project_ids)
            .add_joined("projectKeys", &options.project_keys)
            .add_joined("issuetypeIds", &options.issue_type_ids)
            .add_joined("issuetypeNames", &options.issue_type_names)
            .add_joined("expand", &options.expand);
        let endpoint = query.append_to(format!("rest/api/{}/issue/createmeta", self.version));

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
    async fn test_edit_meta() {
        let mock = MockConnector::json(json!({"fields": {"summary": {"required": true}}}));
        let service = MetadataService::new(mock.clone(), ApiVersion::V3);

        let meta = service.get("KP-1", true, false).await.unwrap();
        assert_eq!(
            mock.endpoint(),
            "rest/api/3/issue/KP-1/editmeta?overrideEditableFlag=false&overrideScreenSecurity=true"
        );
        assert_eq!(meta["fields"]["summary"]["required"], true);

        assert!(matches!(service.get("", false, false).await, Err(Error::NoIssueKeyOrId)));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_create_meta() {
        let mock = MockConnector::json(json!({"projects": [{"key": "KP", "issuetypes": []}]}));
        let options = CreateMetaOptions {
            project_keys: vec!["KP".to_string(), "OPS".to_string()],
            issue_type_names: vec!["Bug".to_string()],
            expand: vec!["projects.issuetypes.fields".to_string()],
            ..CreateMetaOptions::default()
        };

        let meta = MetadataService::new(mock.clone(), ApiVersion::V2)
            .create(&options)
            .await
            .unwrap();

        assert_eq!(
            mock.endpoint(),
            "rest/api/2/issue/createmeta?expand=projects.issuetypes.fields\
             &issuetypeNames=Bug&projectKeys=KP%2COPS"
        );
        assert_eq!(meta["projects"][0]["key"], "KP");
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing(|| ApiError::Unauthorized);
        let result = MetadataService::new(mock, ApiVersion::V3)
            .create(&CreateMetaOptions::default())
            .await;
        assert!(matches!(result, Err(Error::Api(ApiError::Unauthorized))));
    }
}
