//! Issue votes.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::IssueVotes;

/// Operations on `rest/api/{2|3}/issue/{issueIdOrKey}/votes`.
///
/// Voting has to be enabled on the site, and users cannot vote on issues
/// they reported.
#[derive(Clone)]
pub struct VoteService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl VoteService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    async fn send(&self, method: Method, issue_key: &str) -> Result<ResponseScheme> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let endpoint = format!("rest/api/{}/issue/{}/votes", self.version, issue_key);
        let request = self.connector.new_request(method, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self))]
    pub async fn gets(&self, issue_key: &str) -> Result<IssueVotes> {
        let response = self.send(Method::GET, issue_key).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn add(&self, issue_key: &str) -> Result<ResponseScheme> {
        self.send(Method::POST, issue_key).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, issue_key: &str) -> Result<ResponseScheme> {
        self.send(Method::DELETE, issue_key).await
    }
}
