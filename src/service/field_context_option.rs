//! Options of select-style custom field contexts.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{ContextOption, ContextOptionFilter, ContextOptionOrder, ContextOptions, Page};

/// Operations on `rest/api/{2|3}/field/{fieldId}/context/{contextId}/option`.
#[derive(Clone)]
pub struct FieldContextOptionService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl FieldContextOptionService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    fn options_path(&self, field_id: &str, context_id: i64) -> Result<String> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }
        if context_id == 0 {
            return Err(Error::NoFieldContextId);
        }
        Ok(format!(
            "rest/api/{}/field/{}/context/{}/option",
            self.version, field_id, context_id
        ))
    }

    #[instrument(skip(self, filter))]
    pub async fn gets(
        &self,
        field_id: &str,
        context_id: i64,
        filter: &ContextOptionFilter,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<ContextOption>> {
        let path = self.options_path(field_id, context_id)?;

        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_opt("optionId", filter.option_id)
            .add_flag("onlyOptions", filter.only_options);
        let endpoint = query.append_to(path);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Add options; set `option_id` on an option to nest it under a cascading parent.
    #[instrument(skip(self, payload))]
    pub async fn create(
        &self,
        field_id: &str,
        context_id: i64,
        payload: &ContextOptions,
    ) -> Result<ContextOptions> {
        let endpoint = self.options_path(field_id, context_id)?;

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        field_id: &str,
        context_id: i64,
        payload: &ContextOptions,
    ) -> Result<ContextOptions> {
        let endpoint = self.options_path(field_id, context_id)?;

        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        field_id: &str,
        context_id: i64,
        option_id: i64,
    ) -> Result<ResponseScheme> {
        let path = self.options_path(field_id, context_id)?;
        if option_id == 0 {
            return Err(Error::NoContextOptionId);
        }

        let endpoint = format!("{}/{}", path, option_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Reorder options.
    #[instrument(skip(self, payload))]
    pub async fn order(
        &self,
        field_id: &str,
        context_id: i64,
        payload: &ContextOptionOrder,
    ) -> Result<ResponseScheme> {
        let endpoint = format!("{}/move", self.options_path(field_id, context_id)?);

        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        Ok(self.connector.call(request).await?)
    }
}
