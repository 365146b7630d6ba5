//! Labels.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector, Query};
use crate::error::Result;
use crate::model::Page;

#[derive(Clone)]
pub struct LabelService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl LabelService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// A page of every label in use on the site.
    #[instrument(skip(self))]
    pub async fn gets(&self, start_at: u32, max_results: u32) -> Result<Page<String>> {
        let mut query = Query::new();
        query.add("startAt", start_at).add("maxResults", max_results);
        let endpoint = query.append_to(format!("rest/api/{}/label", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
