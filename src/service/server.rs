use std::sync::Arc;

use reqwest::Method;
use tracing::{debug, instrument};

use crate::api::{ApiVersion, Connector};
use crate::error::Result;
use crate::model::ServerInfo;

/// Site information from `rest/api/{2|3}/serverInfo`.
#[derive(Clone)]
pub struct ServerService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ServerService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    #[instrument(skip(self))]
    pub async fn info(&self) -> Result<ServerInfo> {
        let endpoint = format!("rest/api/{}/serverInfo", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        let info: ServerInfo = response.json()?;
        debug!(version = %info.version, "Fetched server info");
        Ok(info)
    }
}
