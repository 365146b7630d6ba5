//! Groups and group membership.

use std::sync::Arc;

use reqwest::Method;
use serde_json::json;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{AccountPayload, Group, GroupBulkOptions, Page, User};

/// Operations on `rest/api/{2|3}/group`.
#[derive(Clone)]
pub struct GroupService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl GroupService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Create a group.
    ///
    /// `POST /rest/api/{2|3}/group`
    #[instrument(skip(self))]
    pub async fn create(&self, group_name: &str) -> Result<Group> {
        if group_name.is_empty() {
            return Err(Error::NoGroupName);
        }

        let endpoint = format!("rest/api/{}/group", self.version);
        let body = json!({ "name": group_name });
        let request = self
            .connector
            .new_request(Method::POST, &endpoint, None, Some(body))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Delete a group.
    ///
    /// `DELETE /rest/api/{2|3}/group?groupname={name}`
    #[instrument(skip(self))]
    pub async fn delete(&self, group_name: &str) -> Result<ResponseScheme> {
        if group_name.is_empty() {
            return Err(Error::NoGroupName);
        }

        let mut query = Query::new();
        query.add("groupname", group_name);
        let endpoint = query.append_to(format!("rest/api/{}/group", self.version));

        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Groups by ID or name.
    ///
    /// `GET /rest/api/{2|3}/group/bulk`
    #[instrument(skip(self, options))]
    pub async fn bulk(
        &self,
        options: &GroupBulkOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<Group>> {
        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_each("groupId", &options.group_ids)
            .add_each("groupName", &options.group_names);
        let endpoint = query.append_to(format!("rest/api/{}/group/bulk", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Users in a group.
    ///
    /// `GET /rest/api/{2|3}/group/member`
    #[instrument(skip(self))]
    pub async fn members(
        &self,
        group_name: &str,
        include_inactive: bool,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<User>> {
        if group_name.is_empty() {
            return Err(Error::NoGroupName);
        }

        let mut query = Query::new();
        query
            .add("groupname", group_name)
            .add("includeInactiveUsers", include_inactive)
            .add("startAt", start_at)
            .add("maxResults", max_results);
        let endpoint = query.append_to(format!("rest/api/{}/group/member", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Add a user to a group.
    ///
    /// `POST /rest/api/{2|3}/group/user?groupname={name}`
    #[instrument(skip(self))]
    pub async fn add(&self, group_name: &str, account_id: &str) -> Result<Group> {
        if group_name.is_empty() {
            return Err(Error::NoGroupName);
        }
        if account_id.is_empty() {
            return Err(Error::NoAccountId);
        }

        let mut query = Query::new();
        query.add("groupname", group_name);
        let endpoint = query.append_to(format!("rest/api/{}/group/user", self.version));

        let payload = AccountPayload {
            account_id: account_id.to_string(),
        };
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Remove a user from a group.
    ///
    /// `DELETE /rest/api/{2|3}/group/user?accountId={id}&groupname={name}`
    #[instrument(skip(self))]
    pub async fn remove(&self, group_name: &str, account_id: &str) -> Result<ResponseScheme> {
        if group_name.is_empty() {
            return Err(Error::NoGroupName);
        }
        if account_id.is_empty() {
            return Err(Error::NoAccountId);
        }

        let mut query = Query::new();
        query
            .add("groupname", group_name)
            .add("accountId", account_id);
        let endpoint = query.append_to(format!("rest/api/{}/group/user", self.version));

        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }
}
