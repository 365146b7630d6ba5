//! Saved JQL filters.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{AccountPayload, Filter, FilterPayload, FilterSearchOptions, Page};

/// Operations on `rest/api/{2|3}/filter`.
#[derive(Clone)]
pub struct FilterService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl FilterService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// Create a filter.
    ///
    /// `POST /rest/api/{2|3}/filter`
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create(&self, payload: &FilterPayload) -> Result<Filter> {
        let endpoint = format!("rest/api/{}/filter", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// The user's favourite filters.
    ///
    /// `GET /rest/api/{2|3}/filter/favourite`
    #[instrument(skip(self))]
    pub async fn favorite(&self) -> Result<Vec<Filter>> {
        let endpoint = format!("rest/api/{}/filter/favourite", self.version);

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Filters owned by the user, optionally including favourites.
    ///
    /// `GET /rest/api/{2|3}/filter/my`
    #[instrument(skip(self))]
    pub async fn my(&self, favourites: bool, expand: &[String]) -> Result<Vec<Filter>> {
        let mut query = Query::new();
        query
            .add_flag("includeFavourites", favourites)
            .add_joined("expand", expand);
        let endpoint = query.append_to(format!("rest/api/{}/filter/my", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Search filters.
    ///
    /// `GET /rest/api/{2|3}/filter/search`
    #[instrument(skip(self, options))]
    pub async fn search(
        &self,
        options: &FilterSearchOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<Filter>> {
        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_opt("filterName", options.name.as_deref())
            .add_opt("accountId", options.account_id.as_deref())
            .add_opt("groupname", options.group.as_deref())
            .add_opt("projectId", options.project_id)
            .add_each("id", &options.ids)
            .add_opt("orderBy", options.order_by.as_deref())
            .add_joined("expand", &options.expand);
        let endpoint = query.append_to(format!("rest/api/{}/filter/search", self.version));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Get a filter.
    ///
    /// `GET /rest/api/{2|3}/filter/{id}`
    #[instrument(skip(self))]
    pub async fn get(&self, filter_id: i64, expand: &[String]) -> Result<Filter> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }

        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint =
            query.append_to(format!("rest/api/{}/filter/{}", self.version, filter_id));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Update a filter.
    ///
    /// `PUT /rest/api/{2|3}/filter/{id}`
    #[instrument(skip(self, payload))]
    pub async fn update(&self, filter_id: i64, payload: &FilterPayload) -> Result<Filter> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }

        let endpoint = format!("rest/api/{}/filter/{}", self.version, filter_id);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Delete a filter.
    ///
    /// `DELETE /rest/api/{2|3}/filter/{id}`
    #[instrument(skip(self))]
    pub async fn delete(&self, filter_id: i64) -> Result<ResponseScheme> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }

        let endpoint = format!("rest/api/{}/filter/{}", self.version, filter_id);
        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Transfer ownership of a filter.
    ///
    /// `PUT /rest/api/{2|3}/filter/{id}/owner`
    #[instrument(skip(self))]
    pub async fn change_owner(&self, filter_id: i64, account_id: &str) -> Result<ResponseScheme> {
        if filter_id == 0 {
            return Err(Error::NoFilterId);
        }
        if account_id.is_empty() {
            return Err(Error::NoAccountId);
        }

        let payload = AccountPayload {
            account_id: account_id.to_string(),
        };
        let endpoint = format!("rest/api/{}/filter/{}/owner", self.version, filter_id);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(&payload)?))?;
        Ok(self.connector.call(request).await?)
    }
}
