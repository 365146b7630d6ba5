//! System and custom fields.

use std::sync::Arc;

use reqwest::Method;
use tracing::{debug, instrument};

use crate::api::{json_body, ApiVersion, Connector, Query};
use crate::error::{Error, Result};
use crate::model::{Field, FieldPayload, FieldSearchOptions, Page, TaskDetail};

/// Operations on `rest/api/{2|3}/field`.
#[derive(Clone)]
pub struct FieldService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl FieldService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Every system and custom field visible to the user.
    #[instrument(skip(self))]
    pub async fn gets(&self) -> Result<Vec<Field>> {
        let endpoint = format!("rest/api/{}/field", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        let fields: Vec<Field> = response.json()?;
        debug!("Fetched {} fields", fields.len());
        Ok(fields)
    }

    /// Create a custom field.
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create(&self, payload: &FieldPayload) -> Result<Field> {
        let endpoint = format!("rest/api/{}/field", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Search fields by type, ID or name.
    #[instrument(skip(self, options))]
    pub async fn search(
        &self,
        options: &FieldSearchOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<Field>> {
        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_joined("type", &options.types)
            .add_joined("id", &options.ids)
            .add_opt("query", options.query.as_deref())
            .add_opt("orderBy", options.order_by.as_deref())
            .add_joined("expand", &options.expand);
        let endpoint = query.append_to(format!("rest/api/{}/field/search", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Delete a custom field.
    ///
    /// Jira deletes fields asynchronously; poll the returned task with
    /// [`TaskService::get`](crate::service::TaskService::get).
    #[instrument(skip(self))]
    pub async fn delete(&self, field_id: &str) -> Result<TaskDetail> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let endpoint = format!("rest/api/{}/field/{}", self.version, field_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
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
            {"id": "summary", "name": "Summary", "custom": false, "navigable": true},
            {"id": "customfield_10000", "name": "Story Points", "custom": true}
        ]));
        let fields = FieldService::new(mock.clone(), ApiVersion::V3)
            .gets()
            .await
            .unwrap();

        assert_eq!(mock.endpoint(), "rest/api/3/field");
        assert_eq!(fields.len(), 2);
        assert!(fields[1].custom);
    }

    #[tokio::test]
    async fn test_create() {
        let mock = MockConnector::json(json!({"id": "customfield_10101", "name": "New custom field"}));
        let payload = FieldPayload {
            name: "New custom field".to_string(),
            description: Some("Custom field for picking groups".to_string()),
            field_type: "com.atlassian.jira.plugin.system.customfieldtypes:grouppicker".to_string(),
            searcher_key: Some(
                "com.atlassian.jira.plugin.system.customfieldtypes:grouppickersearcher".to_string(),
            ),
        };

        let field = FieldService::new(mock.clone(), ApiVersion::V2)
            .create(&payload)
            .await
            .unwrap();

        let request = mock.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "rest/api/2/field");
        let body = request.body.unwrap();
        assert_eq!(
            body["type"],
            "com.atlassian.jira.plugin.system.customfieldtypes:grouppicker"
        );
        assert_eq!(body["searcherKey"], payload.searcher_key.unwrap());
        assert_eq!(field.id, "customfield_10101");
    }

    #[tokio::test]
    async fn test_search_query() {
        let mock = MockConnector::json(json!({"values": [], "total": 0}));
        let options = FieldSearchOptions {
            types: vec!["custom".to_string()],
            ids: vec!["customfield_10000".to_string(), "customfield_10001".to_string()],
            query: Some("story".to_string()),
            order_by: Some("-name".to_string()),
            expand: vec!["screensCount".to_string(), "lastUsed".to_string()],
        };

        FieldService::new(mock.clone(), ApiVersion::V3)
            .search(&options, 0, 50)
            .await
            .unwrap();

        assert_eq!(
            mock.endpoint(),
            "rest/api/3/field/search?expand=screensCount%2ClastUsed\
             &id=customfield_10000%2Ccustomfield_10001&maxResults=50&orderBy=-name\
             &query=story&startAt=0&type=custom"
        );
    }

    #[tokio::test]
    async fn test_delete_returns_task() {
        let mock = MockConnector::json(json!({"id": "1000", "status": "ENQUEUED", "progress": 0}));
        let service = FieldService::new(mock.clone(), ApiVersion::V3);

        let task = service.delete("customfield_10000").await.unwrap();
        assert_eq!(mock.last().method, Method::DELETE);
        assert_eq!(mock.endpoint(), "rest/api/3/field/customfield_10000");
        assert_eq!(task.id, "1000");
        assert!(!task.is_finished());

        assert!(matches!(service.delete("").await, Err(Error::NoFieldId)));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing_request(|| ApiError::InvalidUrl("bad".to_string()));
        let result = FieldService::new(mock, ApiVersion::V3).gets().await;
        assert!(matches!(result, Err(Error::Api(ApiError::InvalidUrl(_)))));
    }
}
