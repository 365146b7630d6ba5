//! Custom field contexts.

use std::sync::Arc;

use reqwest::Method;
use serde_json::json;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{
    ContextProjectMapping, FieldContext, FieldContextDefaultValue, FieldContextDefaultValues,
    FieldContextOptions, FieldContextPayload, IssueTypeToContextMapping, Page,
};

/// Operations on `rest/api/{2|3}/field/{fieldId}/context`.
#[derive(Clone)]
pub struct FieldContextService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl FieldContextService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    fn base(&self, field_id: &str) -> String {
        format!("rest/api/{}/field/{}/context", self.version, field_id)
    }

    fn context(&self, field_id: &str, context_id: i64) -> String {
        format!("{}/{}", self.base(field_id), context_id)
    }

    async fn get_page<T>(&self, endpoint: &str) -> Result<Page<T>>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let request = self.connector.new_request(Method::GET, endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<ResponseScheme> {
        let request = self
            .connector
            .new_request(method, endpoint, None, Some(body))?;
        Ok(self.connector.call(request).await?)
    }

    /// Contexts of a custom field.
    #[instrument(skip(self, options))]
    pub async fn gets(
        &self,
        field_id: &str,
        options: &FieldContextOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<FieldContext>> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_opt("isAnyIssueType", options.is_any_issue_type)
            .add_opt("isGlobalContext", options.is_global_context)
            .add_each("contextId", &options.context_ids);
        let endpoint = query.append_to(self.base(field_id));

        self.get_page(&endpoint).await
    }

    /// Create a context; empty project and issue type lists make it global.
    #[instrument(skip(self, payload))]
    pub async fn create(
        &self,
        field_id: &str,
        payload: &FieldContextPayload,
    ) -> Result<FieldContextPayload> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let endpoint = self.base(field_id);
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get_default_values(
        &self,
        field_id: &str,
        context_ids: &[i64],
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<FieldContextDefaultValue>> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_each("contextId", context_ids);
        let endpoint = query.append_to(format!("{}/defaultValue", self.base(field_id)));

        self.get_page(&endpoint).await
    }

    #[instrument(skip(self, payload))]
    pub async fn set_default_values(
        &self,
        field_id: &str,
        payload: &FieldContextDefaultValues,
    ) -> Result<ResponseScheme> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let endpoint = format!("{}/defaultValue", self.base(field_id));
        self.send(Method::PUT, &endpoint, json_body(payload)?).await
    }

    /// Which issue types each context applies to.
    #[instrument(skip(self))]
    pub async fn issue_types_context(
        &self,
        field_id: &str,
        context_ids: &[i64],
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<IssueTypeToContextMapping>> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_each("contextId", context_ids);
        let endpoint = query.append_to(format!("{}/issuetypemapping", self.base(field_id)));

        self.get_page(&endpoint).await
    }

    /// Which projects each context applies to.
    #[instrument(skip(self))]
    pub async fn projects_context(
        &self,
        field_id: &str,
        context_ids: &[i64],
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<ContextProjectMapping>> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }

        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_each("contextId", context_ids);
        let endpoint = query.append_to(format!("{}/projectmapping", self.base(field_id)));

        self.get_page(&endpoint).await
    }

    /// Rename a context or change its description.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        field_id: &str,
        context_id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<ResponseScheme> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }
        if context_id == 0 {
            return Err(Error::NoFieldContextId);
        }

        let payload = FieldContextPayload {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
            ..FieldContextPayload::default()
        };
        let endpoint = self.context(field_id, context_id);
        self.send(Method::PUT, &endpoint, json_body(&payload)?).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, field_id: &str, context_id: i64) -> Result<ResponseScheme> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }
        if context_id == 0 {
            return Err(Error::NoFieldContextId);
        }

        let endpoint = self.context(field_id, context_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self))]
    pub async fn add_issue_types(
        &self,
        field_id: &str,
        context_id: i64,
        issue_type_ids: &[String],
    ) -> Result<ResponseScheme> {
        self.check_ids(field_id, context_id, issue_type_ids, Error::NoIssueTypes)?;

        let endpoint = format!("{}/issuetype", self.context(field_id, context_id));
        self.send(Method::PUT, &endpoint, json!({ "issueTypeIds": issue_type_ids }))
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_issue_types(
        &self,
        field_id: &str,
        context_id: i64,
        issue_type_ids: &[String],
    ) -> Result<ResponseScheme> {
        self.check_ids(field_id, context_id, issue_type_ids, Error::NoIssueTypes)?;

        let endpoint = format!("{}/issuetype/remove", self.context(field_id, context_id));
        self.send(Method::POST, &endpoint, json!({ "issueTypeIds": issue_type_ids }))
            .await
    }

    /// Assign the context to projects.
    #[instrument(skip(self))]
    pub async fn link(
        &self,
        field_id: &str,
        context_id: i64,
        project_ids: &[String],
    ) -> Result<ResponseScheme> {
        self.check_ids(field_id, context_id, project_ids, Error::NoProjects)?;

        let endpoint = format!("{}/project", self.context(field_id, context_id));
        self.send(Method::PUT, &endpoint, json!({ "projectIds": project_ids }))
            .await
    }

    /// Remove the context from projects.
    #[instrument(skip(self))]
    pub async fn unlink(
        &self,
        field_id: &str,
        context_id: i64,
        project_ids: &[String],
    ) -> Result<ResponseScheme> {
        self.check_ids(field_id, context_id, project_ids, Error::NoProjects)?;

        let endpoint = format!("{}/project/remove", self.context(field_id, context_id));
        self.send(Method::POST, &endpoint, json!({ "projectIds": project_ids }))
            .await
    }

    fn check_ids(
        &self,
        field_id: &str,
        context_id: i64,
        ids: &[String],
        missing: Error,
    ) -> Result<()> {
        if field_id.is_empty() {
            return Err(Error::NoFieldId);
        }
        if context_id == 0 {
            return Err(Error::NoFieldContextId);
        }
        if ids.is_empty() {
            return Err(missing);
        }
        Ok(())
    }
}
