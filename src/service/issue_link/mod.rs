//! Links between issues. Only [`IssueLinkService::link`] carries rich text
//! (the optional comment), so the surfaces differ in that operation alone.

mod adf;
mod rich_text;

use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{IssueLink, IssueLinks, LinkPayload};

pub use adf::IssueLinkAdfService;
pub use rich_text::IssueLinkRichTextService;

/// Operations on `rest/api/{2|3}/issueLink`.
pub struct IssueLinkService<B> {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
    body: PhantomData<fn() -> B>,
}

impl<B> Clone for IssueLinkService<B> {
    fn clone(&self) -> Self {
        Self::new(self.connector.clone(), self.version)
    }
}

impl<B> IssueLinkService<B> {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self {
            connector,
            version,
            body: PhantomData,
        }
    }

    /// Get an issue link.
    ///
    /// `GET /rest/api/{2|3}/issueLink/{linkId}`
    #[instrument(skip(self))]
    pub async fn get(&self, link_id: &str) -> Result<IssueLink> {
        if link_id.is_empty() {
            return Err(Error::NoIssueLinkId);
        }

        let endpoint = format!("rest/api/{}/issueLink/{}", self.version, link_id);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// The links of an issue.
    ///
    /// `GET /rest/api/{2|3}/issue/{issueIdOrKey}?fields=issuelinks`
    #[instrument(skip(self))]
    pub async fn gets(&self, issue_key: &str) -> Result<IssueLinks> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let mut query = Query::new();
        query.add("fields", "issuelinks");
        let endpoint = query.append_to(format!("rest/api/{}/issue/{}", self.version, issue_key));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Delete an issue link.
    ///
    /// `DELETE /rest/api/{2|3}/issueLink/{linkId}`
    #[instrument(skip(self))]
    pub async fn delete(&self, link_id: &str) -> Result<ResponseScheme> {
        if link_id.is_empty() {
            return Err(Error::NoIssueLinkId);
        }

        let endpoint = format!("rest/api/{}/issueLink/{}", self.version, link_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }
}

impl<B: Serialize> IssueLinkService<B> {
    /// Link two issues, optionally commenting on the outward issue.
    ///
    /// `POST /rest/api/{2|3}/issueLink`
    #[instrument(skip_all)]
    pub async fn link(&self, payload: &LinkPayload<B>) -> Result<ResponseScheme> {
        let endpoint = format!("rest/api/{}/issueLink", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        Ok(self.connector.call(request).await?)
    }
}
