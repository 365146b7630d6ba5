//! Fields on screen tabs.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::screen::ScreenTabFieldPayload;
use crate::model::{ScreenTabFieldMove, ScreenableField};

/// Operations on `rest/api/{2|3}/screens/{screenId}/tabs/{tabId}/fields`.
#[derive(Clone)]
pub struct ScreenTabFieldService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ScreenTabFieldService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    fn fields_path(&self, screen_id: i64, tab_id: i64) -> Result<String> {
        if screen_id == 0 {
            return Err(Error::NoScreenId);
        }
        if tab_id == 0 {
            return Err(Error::NoScreenTabId);
        }
        Ok(format!(
            "rest/api/{}/screens/{}/tabs/{}/fields",
            self.version, screen_id, tab_id
        ))
    }

    #[instrument(skip(self))]
    pub async fn gets(&self, screen_id: i64, tab_id: i64) -> Result<Vec<ScreenableField>> {
        let endpoint = self.fields_path(screen_id, tab_id)?;

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn add(&self, screen_id: i64, tab_id: i64, field_id: &str) -> Result<ScreenableField> {
        let endpoint = self.fields_path(screen_id, tab_id)?;
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let payload = ScreenTabFieldPayload { field_id };
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, screen_id: i64, tab_id: i64, field_id: &str) -> Result<ResponseScheme> {
        let path = self.fields_path(screen_id, tab_id)?;
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let endpoint = format!("{}/{}", path, field_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Move a field after another field (`after`) or to a relative
    /// `position` (`Earlier`, `Later`, `First`, `Last`).
    #[instrument(skip(self))]
    pub async fn move_to(
        &self,
        screen_id: i64,
        tab_id: i64,
        field_id: &str,
        after: Option<&str>,
        position: Option<&str>,
    ) -> Result<ResponseScheme> {
        let path = self.fields_path(screen_id, tab_id)?;
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let payload = ScreenTabFieldMove {
            after: after.map(str::to_string),
            position: position.map(str::to_string),
        };
        let endpoint = format!("{}/{}/move", path, field_id);
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        Ok(self.connector.call(request).await?)
    }
}
