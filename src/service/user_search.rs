//! User searches: by permission, by assignable project and free text.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{ApiVersion, Connector, Query};
use crate::error::{Error, Result};
use crate::model::{User, UserPermissionSearchOptions};

#[derive(Clone)]
pub struct UserSearchService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl UserSearchService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    async fn search_users(&self, path: &str, query: Query) -> Result<Vec<User>> {
        let endpoint = query.append_to(format!("rest/api/{}/{}", self.version, path));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Users holding a set of permissions, e.g. `BROWSE,CREATE_ISSUES`.
    #[instrument(skip(self, options))]
    pub async fn check(
        &self,
        permission: &str,
        options: &UserPermissionSearchOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<Vec<User>> {
        if permission.is_empty() {
            return Err(Error::NoPermissionKeys);
        }

        let mut query = Query::new();
        query
            .add("permissions", permission)
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_opt("query", options.query.as_deref())
            .add_opt("accountId", options.account_id.as_deref())
            .add_opt("issueKey", options.issue_key.as_deref())
            .add_opt("projectKey", options.project_key.as_deref());

        self.search_users("user/permission/search", query).await
    }

    /// Users assignable to issues in every one of `project_keys`.
    #[instrument(skip(self))]
    pub async fn projects(
        &self,
        account_id: &str,
        project_keys: &[String],
        start_at: u32,
        max_results: u32,
    ) -> Result<Vec<User>> {
        if project_keys.is_empty() {
            return Err(Error::NoProjectKeys);
        }

        let mut query = Query::new();
        query
            .add_joined("projectKeys", project_keys)
            .add_non_empty("accountId", account_id)
            .add("startAt", start_at)
            .add("maxResults", max_results);

        self.search_users("user/assignable/multiProjectSearch", query)
            .await
    }

    /// Users matching `query` against display name and email, or a single
    /// `account_id`. Either may be empty, but Jira rejects a call with neither.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        account_id: &str,
        query_text: &str,
        start_at: u32,
        max_results: u32,
    ) -> Result<Vec<User>> {
        let mut query = Query::new();
        query
            .add_non_empty("accountId", account_id)
            .add_non_empty("query", query_text)
            .add("startAt", start_at)
            .add("maxResults", max_results);

        self.search_users("user/search", query).await
    }
}
