//! Project versions.

use std::sync::Arc;

use reqwest::Method;
use tracing::instrument;

use crate::api::{json_body, ApiVersion, Connector, Query, ResponseScheme};
use crate::error::{Error, Result};
use crate::model::{
    Page, Version, VersionIssueCounts, VersionPayload, VersionSearchOptions,
    VersionUnresolvedIssues,
};

/// Operations on `rest/api/{2|3}/version` and a project's versions.
#[derive(Clone)]
pub struct ProjectVersionService {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

impl ProjectVersionService {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    fn version_path(&self, version_id: &str) -> Result<String> {
        if version_id.is_empty() {
            return Err(Error::NoVersionId);
        }
        Ok(format!("rest/api/{}/version/{}", self.version, version_id))
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let request = self.connector.new_request(Method::GET, endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Every version of a project, unpaginated.
    #[instrument(skip(self))]
    pub async fn gets(&self, project_key: &str) -> Result<Vec<Version>> {
        if project_key.is_empty() {
            return Err(Error::NoProjectIdOrKey);
        }

        let endpoint = format!("rest/api/{}/project/{}/versions", self.version, project_key);
        self.fetch(&endpoint).await
    }

    /// A page of a project's versions.
    #[instrument(skip(self, options))]
    pub async fn search(
        &self,
        project_key: &str,
        options: &VersionSearchOptions,
        start_at: u32,
        max_results: u32,
    ) -> Result<Page<Version>> {
        if project_key.is_empty() {
            return Err(Error::NoProjectIdOrKey);
        }

        let mut query = Query::new();
        query
            .add("startAt", start_at)
            .add("maxResults", max_results)
            .add_opt("orderBy", options.order_by.as_deref())
            .add_opt("query", options.query.as_deref())
            .add_joined("status", &options.status)
            .add_joined("expand", &options.expand);
        let endpoint = query.append_to(format!(
            "rest/api/{}/project/{}/version",
            self.version, project_key
        ));

        self.fetch(&endpoint).await
    }

    /// Create a version in the project named by `payload.project_id`.
    #[instrument(skip(self, payload), fields(name = ?payload.name))]
    pub async fn create(&self, payload: &VersionPayload) -> Result<Version> {
        let endpoint = format!("rest/api/{}/version", self.version);

        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, version_id: &str, expand: &[String]) -> Result<Version> {
        let mut query = Query::new();
        query.add_joined("expand", expand);
        let endpoint = query.append_to(self.version_path(version_id)?);

        self.fetch(&endpoint).await
    }

    #[instrument(skip(self, payload))]
    pub async fn update(&self, version_id: &str, payload: &VersionPayload) -> Result<Version> {
        let endpoint = self.version_path(version_id)?;

        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Merge a version into another: issues move to `move_to_id` and
    /// `version_id` is deleted.
    #[instrument(skip(self))]
    pub async fn merge(&self, version_id: &str, move_to_id: &str) -> Result<ResponseScheme> {
        let path = self.version_path(version_id)?;
        if move_to_id.is_empty() {
            return Err(Error::NoVersionId);
        }

        let endpoint = format!("{}/mergeto/{}", path, move_to_id);
        let request = self.connector.new_request(Method::PUT, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    #[instrument(skip(self))]
    pub async fn related_issue_counts(&self, version_id: &str) -> Result<VersionIssueCounts> {
        let endpoint = format!("{}/relatedIssueCounts", self.version_path(version_id)?);
        self.fetch(&endpoint).await
    }

    #[instrument(skip(self))]
    pub async fn unresolved_issue_count(
        &self,
        version_id: &str,
    ) -> Result<VersionUnresolvedIssues> {
        let endpoint = format!("{}/unresolvedIssueCount", self.version_path(version_id)?);
        self.fetch(&endpoint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::MockConnector;
    use serde_json::json;

    #[tokio::test]
    async fn test_gets_and_search() {
        let mock = MockConnector::json(json!([{"id": "10000", "name": "v1.0", "released": true}]));
        let versions = ProjectVersionService::new(mock.clone(), ApiVersion::V3)
            .gets("KP")
            .await
            .unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/project/KP/versions");
        assert!(versions[0].released);

        let mock = MockConnector::json(json!({"values": [], "total": 0}));
        let options = VersionSearchOptions {
            order_by: Some("-releaseDate".to_string()),
            status: vec!["released".to_string(), "archived".to_string()],
            expand: vec!["issuesstatus".to_string()],
            ..VersionSearchOptions::default()
        };
        ProjectVersionService::new(mock.clone(), ApiVersion::V2)
            .search("KP", &options, 0, 50)
            .await
            .unwrap();
        assert_eq!(
            mock.endpoint(),
            "rest/api/2/project/KP/version?expand=issuesstatus&maxResults=50\
             &orderBy=-releaseDate&startAt=0&status=released%2Carchived"
        );
    }

    #[tokio::test]
    async fn test_create_and_update() {
        let mock = MockConnector::json(json!({"id": "10010", "name": "v2.0", "projectId": 10000}));
        let service = ProjectVersionService::new(mock.clone(), ApiVersion::V3);
        let payload = VersionPayload {
            name: Some("v2.0".to_string()),
            project_id: Some(10000),
            release_date: Some("2024-03-01".to_string()),
            ..VersionPayload::default()
        };

        let created = service.create(&payload).await.unwrap();
        let request = mock.last();
        assert_eq!(request.url, "rest/api/3/version");
        assert_eq!(
            request.body.unwrap(),
            json!({"name": "v2.0", "projectId": 10000, "releaseDate": "2024-03-01"})
        );
        assert_eq!(created.project_id, Some(10000));

        let release = VersionPayload {
            released: Some(true),
            ..VersionPayload::default()
        };
        service.update("10010", &release).await.unwrap();
        let request = mock.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url, "rest/api/3/version/10010");
        assert_eq!(request.body.unwrap(), json!({"released": true}));
    }

    #[tokio::test]
    async fn test_get_and_merge() {
        let mock = MockConnector::json(json!({"id": "10010", "name": "v2.0"}));
        let service = ProjectVersionService::new(mock.clone(), ApiVersion::V3);

        service
            .get("10010", &["operations".to_string()])
            .await
            .unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/version/10010?expand=operations");

        service.merge("10010", "10011").await.unwrap();
        assert_eq!(mock.last().method, Method::PUT);
        assert_eq!(mock.endpoint(), "rest/api/3/version/10010/mergeto/10011");
    }

    #[tokio::test]
    async fn test_counts() {
        let mock = MockConnector::json(json!({
            "issuesFixedCount": 23, "issuesAffectedCount": 101,
            "issuesUnresolvedCount": 3, "issuesCount": 30
        }));
        let service = ProjectVersionService::new(mock.clone(), ApiVersion::V2);

        let related = service.related_issue_counts("10010").await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/2/version/10010/relatedIssueCounts");
        assert_eq!(related.issues_fixed_count, 23);

        let unresolved = service.unresolved_issue_count("10010").await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/2/version/10010/unresolvedIssueCount");
        assert_eq!(unresolved.issues_unresolved_count, 3);
    }

    #[tokio::test]
    async fn test_sentinels() {
        let mock = MockConnector::json(json!({}));
        let service = ProjectVersionService::new(mock.clone(), ApiVersion::V3);
        let options = VersionSearchOptions::default();

        assert!(matches!(service.gets("").await, Err(Error::NoProjectIdOrKey)));
        assert!(matches!(
            service.search("", &options, 0, 50).await,
            Err(Error::NoProjectIdOrKey)
        ));
        assert!(matches!(service.get("", &[]).await, Err(Error::NoVersionId)));
        assert!(matches!(service.merge("10010", "").await, Err(Error::NoVersionId)));
        assert!(matches!(service.related_issue_counts("").await, Err(Error::NoVersionId)));
        assert!(matches!(service.unresolved_issue_count("").await, Err(Error::NoVersionId)));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing(|| ApiError::NotFound("version".to_string()));
        let result = ProjectVersionService::new(mock, ApiVersion::V3)
            .get("10010", &[])
            .await;
        assert!(matches!(result, Err(Error::Api(ApiError::NotFound(_)))));
    }
}
