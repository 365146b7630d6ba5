//! Long-running tasks.
//!
//! Asynchronous deletions (fields, projects) answer with a [`TaskDetail`]
//! whose id can be polled here until [`TaskDetail::is_finished`].

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::TaskDetail;

#[derive(Clone)]
pub struct TaskService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl TaskService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    fn task_path(&self, task_id: &str) -> Result<String> {
        if task_id.is_empty() {
            return Err(Error::NoTaskId);
        }
        Ok(format!("rest/api/{}/task/{}", self.version, task_id))
    }

    #[instrument(skip(self))]
    pub async fn get(&self, task_id: &str) -> Result<TaskDetail> {
        let endpoint = self.task_path(task_id)?;

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Request cancellation; Jira answers `202 Accepted`.
    #[instrument(skip(self))]
    pub async fn cancel(&self, task_id: &str) -> Result<ResponseScheme> {
        let endpoint = format!("{}/cancel", self.task_path(task_id)?);

        let request = self.connector.new_request(Method::POST, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }
}
