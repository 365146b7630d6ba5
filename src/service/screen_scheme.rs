//! Screen schemes.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{
    NewScreenScheme, Page, ScreenScheme, ScreenSchemePayload, ScreenSchemeSearchOptions,
};

/// Operations on `rest/api/{2|3}/screenscheme`.
#[derive(Clone)]
pub struct ScreenSchemeService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ScreenSchemeService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    #[instrument(skip(self, options))]
    pub async fn gets(
        &self,
        options: &ScreenSchemeSearchOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<ScreenScheme>> {
        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_each("id", &options.ids)
            .add_opt("queryString", options.query_string.as_deref())
            .add_opt("orderBy", options.order_by.as_deref())
            .add_joined("expand", &options.expand);
        let endpoint = query.append_to(format!("rest/api/{}/screenscheme", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Create a screen scheme; `screens.default` is required.
    #[instrument(skip(self, payload), fields(name = ?payload.name))]
    pub async fn create(&self, payload: &ScreenSchemePayload) -> Result<NewScreenScheme> {
        let endpoint = format!("rest/api/{}/screenscheme", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        scheme_id: &str,
        payload: &ScreenSchemePayload,
    ) -> Result<ResponseScheme> {
        if scheme_id.is_empty() {
            return Err(Error::NoScreenSchemeId);
        }

        let endpoint = format!("rest/api/{}/screenscheme/{}", self.version, scheme_id);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, scheme_id: &str) -> Result<ResponseScheme> {
        if scheme_id.is_empty() {
            return Err(Error::NoScreenSchemeId);
        }

        let endpoint = format!("rest/api/{}/screenscheme/{}", self.version, scheme_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }
}
