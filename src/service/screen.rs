//! Screens.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{FieldScreen, Page, Screen, ScreenPayload, ScreenSearchOptions, ScreenableField};

/// Operations on `rest/api/{2|3}/screens`.
#[derive(Clone)]
pub struct ScreenService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ScreenService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Screens a field is placed on, with the tab holding it.
    #[instrument(skip(self))]
    pub async fn fields(
        &self,
        field_id: &str,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<FieldScreen>> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let mut query = Query::new();
        query.add("startAt", start_at).add("maxResults", max_results);
        let endpoint =
            query.append_to(format!("rest/api/{}/field/{}/screens", self.version, field_id));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self, options))]
    pub async fn gets(
        &self,
        options: &ScreenSearchOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<Screen>> {
        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_each("id", &options.ids)
            .add_opt("queryString", options.query_string.as_deref())
            .add_each("scope", &options.scope)
            .add_opt("orderBy", options.order_by.as_deref());
        let endpoint = query.append_to(format!("rest/api/{}/screens", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Add a field to the default tab of the default screen.
    #[instrument(skip(self))]
    pub async fn add_to_default(&self, field_id: &str) -> Result<ResponseScheme> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let endpoint = format!("rest/api/{}/screens/addToDefault/{}", self.version, field_id);
        let request = self.connector.new_request(Method::POST, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Fields that can still be added to a screen.
    #[instrument(skip(self))]
    pub async fn available(&self, screen_id: i64) -> Result<Vec<ScreenableField>> {
        if screen_id == 0 {
            return Err(Error::NoScreenId);
        }

        let endpoint = format!(
            "rest/api/{}/screens/{}/availableFields",
            self.version, screen_id
        );
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<Screen> {
        if name.is_empty() {
            return Err(Error::NoScreenName);
        }

        let payload = ScreenPayload {
            name: Some(name.to_string()),
            description: description.map(str::to_string),
        };
        let endpoint = format!("rest/api/{}/screens", self.version);
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Rename a screen or change its description; `None` leaves a value as is.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        screen_id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Screen> {
        if screen_id == 0 {
            return Err(Error::NoScreenId);
        }

        let payload = ScreenPayload {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
        };
        let endpoint = format!("rest/api/{}/screens/{}", self.version, screen_id);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, screen_id: i64) -> Result<ResponseScheme> {
        if screen_id == 0 {
            return Err(Error::NoScreenId);
        }

        let endpoint = format!("rest/api/{}/screens/{}", self.version, screen_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }
}
