//! Issue type schemes.

use std::sync::Arc;

use reqwest::Method;
use serde_json::json;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{
    IssueTypeScheme, IssueTypeSchemeItem, IssueTypeSchemePayload, NewIssueTypeScheme, Page,
    ProjectIssueTypeScheme,
};

/// Operations on `rest/api/{2|3}/issuetypescheme`.
#[derive(Clone)]
pub struct IssueTypeSchemeService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl IssueTypeSchemeService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let request = self.connector.new_request(Method::GET, endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// List issue type schemes, optionally only the given IDs.
    #[instrument(skip(self))]
    pub async fn gets(
        &self,
        ids: &[i64],
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<IssueTypeScheme>> {
        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_each("id", ids);
        let endpoint = query.append_to(format!("rest/api/{}/issuetypescheme", self.version));

        self.fetch(&endpoint).await
    }

    #[instrument(skip(self, payload))]
    pub async fn create(&self, payload: &IssueTypeSchemePayload) -> Result<NewIssueTypeScheme> {
        let endpoint = format!("rest/api/{}/issuetypescheme", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Issue type to scheme mappings, optionally restricted to `scheme_ids`.
    #[instrument(skip(self))]
    pub async fn items(
        &self,
        scheme_ids: &[i64],
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<IssueTypeSchemeItem>> {
        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_each("issueTypeSchemeId", scheme_ids);
        let endpoint =
            query.append_to(format!("rest/api/{}/issuetypescheme/mapping", self.version));

        self.fetch(&endpoint).await
    }

    /// The schemes used by the given projects.
    #[instrument(skip(self))]
    pub async fn projects(
        &self,
        project_ids: &[i64],
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<ProjectIssueTypeScheme>> {
        if project_ids.is_empty() {
            return Err(Error::NoProjects);
        }

        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_each("projectId", project_ids);
        let endpoint =
            query.append_to(format!("rest/api/{}/issuetypescheme/project", self.version));

        self.fetch(&endpoint).await
    }

    /// Assign a scheme to a classic project.
    #[instrument(skip(self))]
    pub async fn assign(&self, scheme_id: &str, project_id: &str) -> Result<ResponseScheme> {
        if scheme_id.is_empty() {
            return Err(Error::NoIssueTypeSchemeId);
        }
        if project_id.is_empty() {
            return Err(Error::NoProjectId);
        }

        let endpoint = format!("rest/api/{}/issuetypescheme/project", self.version);
        let body = json!({ "issueTypeSchemeId": scheme_id, "projectId": project_id });
        let request = self
            .connector
            .new_request(Method::PUT, &endpoint, None, Some(body))?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        scheme_id: &str,
        payload: &IssueTypeSchemePayload,
    ) -> Result<ResponseScheme> {
        if scheme_id.is_empty() {
            return Err(Error::NoIssueTypeSchemeId);
        }

        let endpoint = format!("rest/api/{}/issuetypescheme/{}", self.version, scheme_id);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, scheme_id: &str) -> Result<ResponseScheme> {
        if scheme_id.is_empty() {
            return Err(Error::NoIssueTypeSchemeId);
        }

        let endpoint = format!("rest/api/{}/issuetypescheme/{}", self.version, scheme_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Add issue types to a scheme.
    #[instrument(skip(self))]
    pub async fn append(&self, scheme_id: &str, issue_type_ids: &[String]) -> Result<ResponseScheme> {
        if scheme_id.is_empty() {
            return Err(Error::NoIssueTypeSchemeId);
        }
        if issue_type_ids.is_empty() {
            return Err(Error::NoIssueTypes);
        }

        let endpoint = format!(
            "rest/api/{}/issuetypescheme/{}/issuetype",
            self.version, scheme_id
        );
        let body = json!({ "issueTypeIds": issue_type_ids });
        let request = self
            .connector
            .new_request(Method::PUT, &endpoint, None, Some(body))?;
        Ok(self.connector.call(request).await?)
    }

    /// Remove one issue type from a scheme.
    #[instrument(skip(self))]
    pub async fn remove(&self, scheme_id: &str, issue_type_id: &str) -> Result<ResponseScheme> {
        if scheme_id.is_empty() {
            return Err(Error::NoIssueTypeSchemeId);
        }
        if issue_type_id.is_empty() {
            return Err(Error::NoIssueTypeId);
        }

        let endpoint = format!(
            "rest/api/{}/issuetypescheme/{}/issuetype/{}",
            self.version, scheme_id, issue_type_id
        );
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }
}
