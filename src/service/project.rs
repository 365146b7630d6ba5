//! Projects.

use std::sync::Arc;

use reqwest::Method;
use tracing::{debug, instrument};

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{
    NewProject, NotificationScheme, Page, Project, ProjectIssueTypeStatuses, ProjectPayload,
    ProjectSearchOptions, TaskDetail,
};

/// Operations on `rest/api/{2|3}/project`.
#[derive(Clone)]
pub struct ProjectService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ProjectService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    fn project_path(&self, project_key: &str) -> Result<String> {
        if project_key.is_empty() {
            return Err(Error::NoProjectIdOrKey);
        }
        Ok(format!("rest/api/{}/project/{}", self.version, project_key))
    }

    /// Create a project from a template.
    ///
    /// `POST /rest/api/{2|3}/project`
    #[instrument(skip(self, payload), fields(key = ?payload.key))]
    pub async fn create(&self, payload: &ProjectPayload) -> Result<NewProject> {
        let endpoint = format!("rest/api/{}/project", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Search projects visible to the user.
    ///
    /// `GET /rest/api/{2|3}/project/search`
    #[instrument(skip(self, options))]
    pub async fn search(
        &self,
        options: &ProjectSearchOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<Project>> {
        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_opt("orderBy", options.order_by.as_deref())
            .add_each("id", &options.ids)
            .add_each("keys", &options.keys)
            .add_opt("query", options.query.as_deref())
            .add_joined("typeKey", &options.type_keys)
            .add_opt("categoryId", options.category_id)
            .add_opt("action", options.action.as_deref())
            .add_joined("expand", &options.expand)
            .add_each("status", &options.status);
        let endpoint = query.append_to(format!("rest/api/{}/project/search", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        let page: Page<Project> = response.json()?;
        debug!("Fetched {} of {} projects", page.values.len(), page.total);
        Ok(page)
    }

    /// `GET /rest/api/{2|3}/project/{projectIdOrKey}`
    #[instrument(skip(self))]
    pub async fn get(&self, project_key: &str, expand: &[String]) -> Result<Project> {
        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint = query.append_to(self.project_path(project_key)?);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// `PUT /rest/api/{2|3}/project/{projectIdOrKey}`
    #[instrument(skip(self, payload))]
    pub async fn update(&self, project_key: &str, payload: &ProjectPayload) -> Result<Project> {
        let endpoint = self.project_path(project_key)?;

        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Delete a project. With `enable_undo` it goes to the recycle bin for 60 days.
    #[instrument(skip(self))]
    pub async fn delete(&self, project_key: &str, enable_undo: bool) -> Result<ResponseScheme> {
        let mut query = Query::new();
        query.add("enableUndo", enable_undo);
        let endpoint = query.append_to(self.project_path(project_key)?);

        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Delete a project in the background; poll the returned task for progress.
    #[instrument(skip(self))]
    pub async fn delete_async(&self, project_key: &str) -> Result<TaskDetail> {
        let endpoint = format!("{}/delete", self.project_path(project_key)?);

        let request = self.connector.new_request(Method::POST, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn archive(&self, project_key: &str) -> Result<ResponseScheme> {
        let endpoint = format!("{}/archive", self.project_path(project_key)?);

        let request = self.connector.new_request(Method::POST, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Restore an archived or deleted project.
    #[instrument(skip(self))]
    pub async fn restore(&self, project_key: &str) -> Result<Project> {
        let endpoint = format!("{}/restore", self.project_path(project_key)?);

        let request = self.connector.new_request(Method::POST, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Valid statuses per issue type of the project.
    #[instrument(skip(self))]
    pub async fn statuses(&self, project_key: &str) -> Result<Vec<ProjectIssueTypeStatuses>> {
        let endpoint = format!("{}/statuses", self.project_path(project_key)?);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn notification_scheme(
        &self,
        project_key: &str,
        expand: &[String],
    ) -> Result<NotificationScheme> {
        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint =
            query.append_to(format!("{}/notificationscheme", self.project_path(project_key)?));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
