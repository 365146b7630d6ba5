//! Issue watchers.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::IssueWatchers;

/// Operations on `rest/api/{2|3}/issue/{issueIdOrKey}/watchers`.
#[derive(Clone)]
pub struct WatcherService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl WatcherService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    fn watchers_path(&self, issue_key: &str) -> Result<String> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        Ok(format!("rest/api/{}/issue/{}/watchers", self.version, issue_key))
    }

    #[instrument(skip(self))]
    pub async fn gets(&self, issue_key: &str) -> Result<IssueWatchers> {
        let endpoint = self.watchers_path(issue_key)?;

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Start watching the issue as the calling user.
    #[instrument(skip(self))]
    pub async fn add(&self, issue_key: &str) -> Result<ResponseScheme> {
        let endpoint = self.watchers_path(issue_key)?;

        let request = self.connector.new_request(Method::POST, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, issue_key: &str, account_id: &str) -> Result<ResponseScheme> {
        let path = self.watchers_path(issue_key)?;
        if account_id.is_empty() {
            return Err(Error::NoAccountId);
        }

        let mut query = Query::new();
        query.add("accountId", account_id);
        let endpoint = query.append_to(path);

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
    async fn test_gets() {
        let mock = MockConnector::json(json!({
            "isWatching": false,
            "watchCount": 1,
            "watchers": [{"accountId": "5b10a2844c20165700ede21g", "displayName": "Mia Krystof"}]
        }));

        let watchers = WatcherService::new(mock.clone(), ApiVersion::V3)
            .gets("KP-1")
            .await
            .unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/issue/KP-1/watchers");
        assert_eq!(watchers.watch_count, 1);
        assert!(!watchers.is_watching);
    }

    #[tokio::test]
    async fn test_add_and_delete() {
        let mock = MockConnector::empty(204);
        let watchers = WatcherService::new(mock.clone(), ApiVersion::V2);

        watchers.add("KP-1").await.unwrap();
        let request = mock.last();
        assert_eq!(request.method, Method::POST);
        assert!(request.body.is_none());

        watchers.delete("KP-1", "5b10ac").await.unwrap();
        assert_eq!(mock.last().method, Method::DELETE);
        assert_eq!(mock.endpoint(), "rest/api/2/issue/KP-1/watchers?accountId=5b10ac");
    }

    #[tokio::test]
    async fn test_sentinels() {
        let mock = MockConnector::empty(204);
        let watchers = WatcherService::new(mock.clone(), ApiVersion::V3);

        assert!(matches!(watchers.gets("").await, Err(Error::NoIssueKeyOrId)));
        assert!(matches!(watchers.add("").await, Err(Error::NoIssueKeyOrId)));
        assert!(matches!(watchers.delete("", "a").await, Err(Error::NoIssueKeyOrId)));
        assert!(matches!(watchers.delete("KP-1", "").await, Err(Error::NoAccountId)));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing(|| ApiError::Unauthorized);
        let result = WatcherService::new(mock, ApiVersion::V3).add("KP-1").await;
        assert!(matches!(result, Err(Error::Api(ApiError::Unauthorized))));
    }
}
