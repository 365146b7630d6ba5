//! Audit records.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector, Query};
use crate::error::Result;
use crate::model::{AuditRecordOptions, AuditRecords};

/// Operations on `rest/api/{2|3}/auditing/record`.
#[derive(Clone)]
pub struct AuditService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl AuditService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Audit records matching `options`, newest first.
    ///
    /// Paging uses `offset`/`limit` rather than `startAt`/`maxResults`.
    #[instrument(skip(self, options))]
    pub async fn get(
        &self,
        options: &AuditRecordOptions,
        offset: u32,
        limit: u32,
    ) -> Result<AuditRecords> {
        let mut query = Query::new();
        query
            .add("offset", offset)
            .add("limit", limit)
            .add_opt("filter", options.filter.as_deref())
            .add_opt("from", options.from.as_deref())
            .add_opt("to", options.to.as_deref());
        let endpoint = query.append_to(format!("rest/api/{}/auditing/record", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
