//! Issue comments, generic over the body type (see [`crate::service::issue`]).

mod adf;
mod rich_text;

use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{Comment, CommentPage, CommentPayload};

pub use adf::CommentAdfService;
pub use rich_text::CommentRichTextService;

/// Operations on `rest/api/{2|3}/issue/{issueIdOrKey}/comment`.
pub struct CommentService<B> {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
    body: PhantomData<fn() -> B>,
}

impl<B> Clone for CommentService<B> {
    fn clone(&self) -> Self {
        Self::new(self.connector.clone(), self.version)
    }
}

impl<B> CommentService<B> {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self {
            connector,
            version,
            body: PhantomData,
        }
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, issue_key: &str, comment_id: &str) -> Result<ResponseScheme> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        if comment_id.is_empty() {
            return Err(Error::NoCommentId);
        }

        let endpoint = format!(
            "rest/api/{}/issue/{}/comment/{}",
            self.version, issue_key, comment_id
        );
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }
}

impl<B: DeserializeOwned + Default> CommentService<B> {
    /// A page of an issue's comments.
    ///
    /// `order_by` accepts `created` or `-created`.
    #[instrument(skip(self))]
    pub async fn gets(
        &self,
        issue_key: &str,
        order_by: Option<&str>,
        expand: &[String],
        start_at: u32,
        max_results: u32,
    ) -> Result<CommentPage<B>> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_opt("orderBy", order_by)
            .add_joined("expand", expand);
        let endpoint = query.append_to(format!(
            "rest/api/{}/issue/{}/comment",
            self.version, issue_key
        ));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, issue_key: &str, comment_id: &str) -> Result<Comment<B>> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        if comment_id.is_empty() {
            return Err(Error::NoCommentId);
        }

        let endpoint = format!(
            "rest/api/{}/issue/{}/comment/{}",
            self.version, issue_key, comment_id
        );
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}

impl<B: Serialize + DeserializeOwned + Default> CommentService<B> {
    /// Add a comment to an issue.
    #[instrument(skip(self, payload))]
    pub async fn add(
        &self,
        issue_key: &str,
        payload: &CommentPayload<B>,
        expand: &[String],
    ) -> Result<Comment<B>> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint = query.append_to(format!(
            "rest/api/{}/issue/{}/comment",
            self.version, issue_key
        ));

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
