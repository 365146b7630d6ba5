//! Resolutions an issue can be closed with.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector};
use crate::error::{Error, Result};
use crate::model::Resolution;

/// Operations on `rest/api/{2|3}/resolution`.
#[derive(Clone)]
pub struct ResolutionService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ResolutionService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Every resolution, in the order configured by the administrator.
    #[instrument(skip(self))]
    pub async fn gets(&self) -> Result<Vec<Resolution>> {
        let endpoint = format!("rest/api/{}/resolution", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, resolution_id: &str) -> Result<Resolution> {
        if resolution_id.is_empty() {
            return Err(Error::NoResolutionId);
        }

        let endpoint = format!("rest/api/{}/resolution/{}", self.version, resolution_id);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
