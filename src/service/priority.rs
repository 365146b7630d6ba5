//! Issue priorities.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector};
use crate::error::{Error, Result};
use crate::model::Priority;

/// Operations on `rest/api/{2|3}/priority`.
#[derive(Clone)]
pub struct PriorityService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl PriorityService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    #[instrument(skip(self))]
    pub async fn gets(&self) -> Result<Vec<Priority>> {
        let endpoint = format!("rest/api/{}/priority", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, priority_id: &str) -> Result<Priority> {
        if priority_id.is_empty() {
            return Err(Error::NoPriorityId);
        }

        let endpoint = format!("rest/api/{}/priority/{}", self.version, priority_id);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
