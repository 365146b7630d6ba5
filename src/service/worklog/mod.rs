//! Issue worklogs, generic over the comment body type.

mod adf;
mod rich_text;

use std::marker::PhantomData;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::worklog::WorklogIds;
use crate::model::{ChangedWorklogs, Worklog, WorklogOptions, WorklogPage, WorklogPayload};

pub use adf::WorklogAdfService;
pub use rich_text::WorklogRichTextService;

/// Operations on `rest/api/{2|3}/issue/{issueIdOrKey}/worklog` and
/// `rest/api/{2|3}/worklog`.
pub struct WorklogService<B> {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
    body: PhantomData<fn() -> B>,
}

impl<B> Clone for WorklogService<B> {
    fn clone(&self) -> Self {
        Self::new(self.connector.clone(), self.version)
    }
}

/// Estimate and notification flags shared by the write operations.
fn write_query(options: &WorklogOptions) -> Query {
    let mut query = Query::new();
    query
        .add_opt("notifyUsers", options.notify)
        .add_opt("adjustEstimate", options.adjust_estimate.as_deref())
        .add_opt("newEstimate", options.new_estimate.as_deref())
        .add_flag("overrideEditableFlag", options.override_editable_flag);
    query
}

impl<B> WorklogService<B> {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self {
            connector,
            version,
            body: PhantomData,
        }
    }

    /// Delete a worklog. `options.increase_by` applies with `adjustEstimate=manual`.
    #[instrument(skip(self, options))]
    pub async fn delete(
        &self,
        issue_key: &str,
        worklog_id: &str,
        options: &WorklogOptions,
    ) -> Result<ResponseScheme> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        if worklog_id.is_empty() {
            return Err(Error::NoWorklogId);
        }

        let mut query = write_query(options);
        query.add_opt("increaseBy", options.increase_by.as_deref());
        let endpoint = query.append_to(format!(
            "rest/api/{}/issue/{}/worklog/{}",
            self.version, issue_key, worklog_id
        ));

        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// IDs of worklogs deleted since `since` (epoch milliseconds).
    #[instrument(skip(self))]
    pub async fn deleted(&self, since: i64) -> Result<ChangedWorklogs> {
        let mut query = Query::new();
        if since > 0 {
            query.add("since", since);
        }
        let endpoint = query.append_to(format!("rest/api/{}/worklog/deleted", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// IDs of worklogs updated since `since` (epoch milliseconds).
    #[instrument(skip(self))]
    pub async fn updated(&self, since: i64, expand: &[String]) -> Result<ChangedWorklogs> {
        let mut query = Query::new();
        if since > 0 {
            query.add("since", since);
        }
        query.add_joined("expand", expand);
        let endpoint = query.append_to(format!("rest/api/{}/worklog/updated", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}

impl<B: DeserializeOwned + Default> WorklogService<B> {
    /// Worklogs by ID, at most 1000 per call.
    ///
    /// `POST /rest/api/{2|3}/worklog/list`
    #[instrument(skip(self, worklog_ids), fields(count = worklog_ids.len()))]
    pub async fn gets(&self, worklog_ids: &[i64], expand: &[String]) -> Result<Vec<Worklog<B>>> {
        if worklog_ids.is_empty() {
            return Err(Error::NoWorklogIds);
        }

        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint = query.append_to(format!("rest/api/{}/worklog/list", self.version));

        let payload = WorklogIds { ids: worklog_ids };
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        let worklogs: Vec<Worklog<B>> = response.json()?;
        debug!("Fetched {} worklogs", worklogs.len());
        Ok(worklogs)
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        issue_key: &str,
        worklog_id: &str,
        expand: &[String],
    ) -> Result<Worklog<B>> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        if worklog_id.is_empty() {
            return Err(Error::NoWorklogId);
        }

        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint = query.append_to(format!(
            "rest/api/{}/issue/{}/worklog/{}",
            self.version, issue_key, worklog_id
        ));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// A page of an issue's worklogs, optionally only those started after
    /// `started_after` (epoch milliseconds).
    #[instrument(skip(self))]
    pub async fn issue(
        &self,
        issue_key: &str,
        start_at: u32,
        max_results: u32,
        started_after: Option<i64>,
        expand: &[String],
    ) -> Result<WorklogPage<B>> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_opt("startedAfter", started_after)
            .add_joined("expand", expand);
        let endpoint = query.append_to(format!(
            "rest/api/{}/issue/{}/worklog",
            self.version, issue_key
        ));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}

impl<B: Serialize + DeserializeOwned + Default> WorklogService<B> {
    /// Log work on an issue. `options.reduce_by` applies with `adjustEstimate=manual`.
    #[instrument(skip(self, payload, options))]
    pub async fn add(
        &self,
        issue_key: &str,
        payload: &WorklogPayload<B>,
        options: &WorklogOptions,
    ) -> Result<Worklog<B>> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let mut query = write_query(options);
        query
            .add_opt("reduceBy", options.reduce_by.as_deref())
            .add_joined("expand", &options.expand);
        let endpoint = query.append_to(format!(
            "rest/api/{}/issue/{}/worklog",
            self.version, issue_key
        ));

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self, payload, options))]
    pub async fn update(
        &self,
        issue_key: &str,
        worklog_id: &str,
        payload: &WorklogPayload<B>,
        options: &WorklogOptions,
    ) -> Result<Worklog<B>> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        if worklog_id.is_empty() {
            return Err(Error::NoWorklogId);
        }

        let mut query = write_query(options);
        query.add_joined("expand", &options.expand);
        let endpoint = query.append_to(format!(
            "rest/api/{}/issue/{}/worklog/{}",
            self.version, issue_key, worklog_id
        ));

        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
