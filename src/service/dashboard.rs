//! Dashboards.

use std::sync::Arc;

use reqwest::Method;
use tracing::{debug, instrument};

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{Dashboard, DashboardPage, DashboardPayload, DashboardSearchOptions, Page};

/// Operations on `rest/api/{2|3}/dashboard`.
#[derive(Clone)]
pub struct DashboardService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl DashboardService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// List the dashboards owned by or shared with the user.
    ///
    /// `GET /rest/api/{2|3}/dashboard`
    #[instrument(skip(self))]
    pub async fn gets(&self, start_at: u32, max_results: u32) -> Result<DashboardPage> {
        let mut query = Query::new();
        query.add("startAt", start_at).add("maxResults", max_results);
        let endpoint = query.append_to(format!("rest/api/{}/dashboard", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        let page: DashboardPage = response.json()?;
        debug!("Fetched {} dashboards (total: {})", page.dashboards.len(), page.total);
        Ok(page)
    }

    /// Create a dashboard.
    ///
    /// `POST /rest/api/{2|3}/dashboard`
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create(&self, payload: &DashboardPayload) -> Result<Dashboard> {
        let endpoint = format!("rest/api/{}/dashboard", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Search dashboards by name, owner, group or project.
    ///
    /// `GET /rest/api/{2|3}/dashboard/search`
    #[instrument(skip(self, options))]
    pub async fn search(
        &self,
        options: &DashboardSearchOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<Dashboard>> {
        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_opt("dashboardName", options.dashboard_name.as_deref())
            .add_opt("accountId", options.owner_account_id.as_deref())
            .add_opt("groupname", options.group_permission_name.as_deref())
            .add_opt("groupId", options.group_id.as_deref())
            .add_opt("projectId", options.project_id)
            .add_opt("orderBy", options.order_by.as_deref())
            .add_joined("expand", &options.expand);
        let endpoint = query.append_to(format!("rest/api/{}/dashboard/search", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Get a dashboard.
    ///
    /// `GET /rest/api/{2|3}/dashboard/{id}`
    #[instrument(skip(self))]
    pub async fn get(&self, dashboard_id: &str) -> Result<Dashboard> {
        if dashboard_id.is_empty() {
            return Err(Error::NoDashboardId);
        }

        let endpoint = format!("rest/api/{}/dashboard/{}", self.version, dashboard_id);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Delete a dashboard.
    ///
    /// `DELETE /rest/api/{2|3}/dashboard/{id}`
    #[instrument(skip(self))]
    pub async fn delete(&self, dashboard_id: &str) -> Result<ResponseScheme> {
        if dashboard_id.is_empty() {
            return Err(Error::NoDashboardId);
        }

        let endpoint = format!("rest/api/{}/dashboard/{}", self.version, dashboard_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Copy a dashboard, overriding its name, description and permissions.
    ///
    /// `POST /rest/api/{2|3}/dashboard/{id}/copy`
    #[instrument(skip(self, payload))]
    pub async fn copy(&self, dashboard_id: &str, payload: &DashboardPayload) -> Result<Dashboard> {
        if dashboard_id.is_empty() {
            return Err(Error::NoDashboardId);
        }

        let endpoint = format!("rest/api/{}/dashboard/{}/copy", self.version, dashboard_id);
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Replace a dashboard's name, description and permissions.
    ///
    /// `PUT /rest/api/{2|3}/dashboard/{id}`
    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        dashboard_id: &str,
        payload: &DashboardPayload,
    ) -> Result<Dashboard> {
        if dashboard_id.is_empty() {
            return Err(Error::NoDashboardId);
        }

        let endpoint = format!("rest/api/{}/dashboard/{}", self.version, dashboard_id);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }
}
