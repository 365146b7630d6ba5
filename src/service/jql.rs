use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query};
use crate::error::{Error, Result};
use crate::model::search::JqlQueries;
use crate::model::ParsedQueries;

/// JQL parsing through `rest/api/{2|3}/jql/parse`.
#[derive(Clone)]
pub struct JqlService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl JqlService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Parse queries into syntax trees.
    ///
    /// `validation` is `strict`, `warn` or `none`; an empty value leaves the
    /// choice to Jira.
    #[instrument(skip(self, queries), fields(count = queries.len()))]
    pub async fn parse(&self, validation: &str, queries: &[String]) -> Result<ParsedQueries> {
        if queries.is_empty() {
            return Err(Error::NoJqlQueries);
        }

        let mut query = Query::new();
        query.add_non_empty("validation", validation);
        let endpoint = query.append_to(format!("rest/api/{}/jql/parse", self.version));

        let payload = JqlQueries { queries };
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
