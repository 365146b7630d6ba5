//! Users.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{GroupRef, NewUser, Page, User};

/// Operations on `rest/api/{2|3}/user` and `rest/api/{2|3}/users`.
#[derive(Clone)]
pub struct UserService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl UserService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let request = self.connector.new_request(Method::GET, endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// A user by account ID; `expand` accepts `groups` and `applicationRoles`.
    #[instrument(skip(self))]
    pub async fn get(&self, account_id: &str, expand: &[String]) -> Result<User> {
        if account_id.is_empty() {
            return Err(Error::NoAccountId);
        }

        let mut query = Query::new();
        query.add("accountId", account_id).add_joined("expand", expand);
        let endpoint = query.append_to(format!("rest/api/{}/user", self.version));

        self.fetch(&endpoint).await
    }

    #[instrument(skip(self, payload), fields(email = %payload.email_address))]
    pub async fn create(&self, payload: &NewUser) -> Result<User> {
        let endpoint = format!("rest/api/{}/user", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, account_id: &str) -> Result<ResponseScheme> {
        if account_id.is_empty() {
            return Err(Error::NoAccountId);
        }

        let mut query = Query::new();
        query.add("accountId", account_id);
        let endpoint = query.append_to(format!("rest/api/{}/user", self.version));

        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Several users at once, by account ID.
    #[instrument(skip(self))]
    pub async fn find(
        &self,
        account_ids: &[String],
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<User>> {
        if account_ids.is_empty() {
            return Err(Error::NoAccountIds);
        }

        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_each("accountId", account_ids);
        let endpoint = query.append_to(format!("rest/api/{}/user/bulk", self.version));

        self.fetch(&endpoint).await
    }

    /// Groups the user belongs to.
    #[instrument(skip(self))]
    pub async fn groups(&self, account_id: &str) -> Result<Vec<GroupRef>> {
        if account_id.is_empty() {
            return Err(Error::NoAccountId);
        }

        let mut query = Query::new();
        query.add("accountId", account_id);
        let endpoint = query.append_to(format!("rest/api/{}/user/groups", self.version));

        self.fetch(&endpoint).await
    }

    /// All users, including app and inactive accounts.
    #[instrument(skip(self))]
    pub async fn gets(&self, start_at: u32, max_results: u32) -> Result<Vec<User>> {
        let mut query = Query::new();
        query.add("startAt", start_at).add("maxResults", max_results);
        let endpoint = query.append_to(format!("rest/api/{}/users/search", self.version));

        self.fetch(&endpoint).await
    }
}
