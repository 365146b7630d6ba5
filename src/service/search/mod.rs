//! JQL issue search, generic over the body type (see [`crate::service::issue`]).

mod adf;
mod rich_text;

use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::api::{json_body, ApiVersion, Connector, Query};
use crate::error::Result;
use crate::model::search::SearchPayload;
use crate::model::SearchPage;

pub use adf::SearchAdfService;
pub use rich_text::SearchRichTextService;

/// Operations on `rest/api/{2|3}/search`.
pub struct SearchService<B> {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
    body: PhantomData<fn() -> B>,
}

impl<B> Clone for SearchService<B> {
    fn clone(&self) -> Self {
        Self::new(self.connector.clone(), self.version)
    }
}

impl<B> SearchService<B> {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self {
            connector,
            version,
            body: PhantomData,
        }
    }
}

impl<B: DeserializeOwned + Default> SearchService<B> {
    /// Search with the query in the URL.
    ///
    /// `validate` is `strict`, `warn` or `none`; empty leaves Jira's default.
    /// Long JQL strings are better sent with [`SearchService::post`].
    #[instrument(skip(self, fields, expand))]
    pub async fn get(
        &self,
        jql: &str,
        fields: &[String],
        expand: &[String],
        start_at: u32,
        max_results: u32,
        validate: &str,
    ) -> Result<SearchPage<B>> {
        let mut query = Query::new();
        query
            .add_non_empty("jql", jql)
            .add_joined("fields", fields)
            .add_joined("expand", expand)
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_non_empty("validateQuery", validate);
        let endpoint = query.append_to(format!("rest/api/{}/search", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        let page: SearchPage<B> = response.json()?;
        debug!(total = page.total, returned = page.issues.len(), "Search completed");
        Ok(page)
    }

    /// Search with the query in the request body.
    #[instrument(skip(self, fields, expand))]
    pub async fn post(
        &self,
        jql: &str,
        fields: &[String],
        expand: &[String],
        start_at: u32,
        max_results: u32,
        validate: &str,
    ) -> Result<SearchPage<B>> {
        let payload = SearchPayload {
            jql: jql.to_string(),
            fields: fields.to_vec(),
            expand: expand.to_vec(),
            start_at,
            max_results,
            validate_query: (!validate.is_empty()).then(|| validate.to_string()),
        };
        let endpoint = format!("rest/api/{}/search", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        let page: SearchPage<B> = response.json()?;
        debug!(total = page.total, returned = page.issues.len(), "Search completed");
        Ok(page)
    }
}
