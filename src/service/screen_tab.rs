//! Screen tabs.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::screen::ScreenTabPayload;
use crate::model::ScreenTab;

/// Operations on `rest/api/{2|3}/screens/{screenId}/tabs`.
#[derive(Clone)]
pub struct ScreenTabService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ScreenTabService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    fn tabs_path(&self, screen_id: i64) -> Result<String> {
        if screen_id == 0 {
            return Err(Error::NoScreenId);
        }
        Ok(format!("rest/api/{}/screens/{}/tabs", self.version, screen_id))
    }

    fn tab_path(&self, screen_id: i64, tab_id: i64) -> Result<String> {
        let tabs = self.tabs_path(screen_id)?;
        if tab_id == 0 {
            return Err(Error::NoScreenTabId);
        }
        Ok(format!("{}/{}", tabs, tab_id))
    }

    /// Tabs of a screen; `project_key` is required for non-admin users.
    #[instrument(skip(self))]
    pub async fn gets(&self, screen_id: i64, project_key: Option<&str>) -> Result<Vec<ScreenTab>> {
        let mut query = Query::new();
        query.add_opt("projectKey", project_key);
        let endpoint = query.append_to(self.tabs_path(screen_id)?);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn create(&self, screen_id: i64, name: &str) -> Result<ScreenTab> {
        let endpoint = self.tabs_path(screen_id)?;
        if name.is_empty() {
            return Err(Error::NoScreenTabName);
        }

        let payload = ScreenTabPayload { name };
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn update(&self, screen_id: i64, tab_id: i64, name: &str) -> Result<ScreenTab> {
        let endpoint = self.tab_path(screen_id, tab_id)?;
        if name.is_empty() {
            return Err(Error::NoScreenTabName);
        }

        let payload = ScreenTabPayload { name };
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, screen_id: i64, tab_id: i64) -> Result<ResponseScheme> {
        let endpoint = self.tab_path(screen_id, tab_id)?;

        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Move a tab to a zero-based position on the screen.
    #[instrument(skip(self))]
    pub async fn move_to(&self, screen_id: i64, tab_id: i64, position: u32) -> Result<ResponseScheme> {
        let endpoint = format!("{}/move/{}", self.tab_path(screen_id, tab_id)?, position);

        let request = self.connector.new_request(Method::POST, &endpoint, None, None)?;
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
        let mock = MockConnector::json(json!([{"id": 10000, "name": "Fields Tab"}]));
        let service = ScreenTabService::new(mock.clone(), ApiVersion::V3);

        let tabs = service.gets(10000, Some("KP")).await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/screens/10000/tabs?projectKey=KP");
        assert_eq!(tabs[0].name, "Fields Tab");

        service.gets(10000, None).await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/screens/10000/tabs");
    }

    #[tokio::test]
    async fn test_create_and_update() {
        let mock = MockConnector::json(json!({"id": 10001, "name": "Details"}));
        let service = ScreenTabService::new(mock.clone(), ApiVersion::V2);

        let tab = service.create(10000, "Details").await.unwrap();
        let request = mock.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "rest/api/2/screens/10000/tabs");
        assert_eq!(request.body.unwrap(), json!({"name": "Details"}));
        assert_eq!(tab.id, 10001);

        service.update(10000, 10001, "More details").await.unwrap();
        let request = mock.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url, "rest/api/2/screens/10000/tabs/10001");
    }

    #[tokio::test]
    async fn test_delete_and_move() {
        let mock = MockConnector::empty(204);
        let service = ScreenTabService::new(mock.clone(), ApiVersion::V3);

        service.delete(10000, 10001).await.unwrap();
        assert_eq!(mock.last().method, Method::DELETE);

        service.move_to(10000, 10001, 0).await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/screens/10000/tabs/10001/move/0");
    }

    #[tokio::test]
    async fn test_sentinels() {
        let mock = MockConnector::empty(204);
        let service = ScreenTabService::new(mock.clone(), ApiVersion::V3);

        assert!(matches!(service.gets(0, None).await, Err(Error::NoScreenId)));
        assert!(matches!(service.create(10000, "").await, Err(Error::NoScreenTabName)));
        assert!(matches!(service.update(10000, 0, "x").await, Err(Error::NoScreenTabId)));
        assert!(matches!(service.update(10000, 1, "").await, Err(Error::NoScreenTabName)));
        assert!(matches!(service.delete(0, 1).await, Err(Error::NoScreenId)));
        assert!(matches!(service.move_to(10000, 0, 1).await, Err(Error::NoScreenTabId)));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing(|| ApiError::Forbidden);
        let result = ScreenTabService::new(mock, ApiVersion::V3).gets(1, None).await;
        assert!(matches!(result, Err(Error::Api(ApiError::Forbidden))));
    }
}
