use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector, Query};
use crate::error::Result;
use crate::model::User;

/// The user behind the current credentials.
#[derive(Clone)]
pub struct MySelfService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl MySelfService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// `expand` accepts `groups` and `applicationRoles`.
    #[instrument(skip(self))]
    pub async fn details(&self, expand: &[String]) -> Result<User> {
        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint = query.append_to(format!("rest/api/{}/myself", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
