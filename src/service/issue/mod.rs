//! Issues.
//!
//! [`IssueService`] is generic over the rich-text body type. The two surfaces
//! Jira offers are named in [`adf`] (API v3 documents) and [`rich_text`]
//! (API v2 wiki markup); operations that carry no rich text behave the same
//! on both.

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
use crate::model::issue::IssueTransitionPayload;
use crate::model::{
    AccountPayload, CustomFields, Issue, IssueBulkCreated, IssueBulkPayload, IssueCreated,
    IssueMoveOptions, IssueNotifyOptions, IssuePayload, IssueTransitions, NamedRef,
    UpdateOperations,
};

pub use adf::IssueAdfService;
pub use rich_text::IssueRichTextService;

/// Operations on `rest/api/{2|3}/issue`.
pub struct IssueService<B> {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
    body: PhantomData<fn() -> B>,
}

impl<B> Clone for IssueService<B> {
    fn clone(&self) -> Self {
        Self::new(self.connector.clone(), self.version)
    }
}

impl<B> IssueService<B> {
    pub fn new(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self {
            connector,
            version,
            body: PhantomData,
        }
    }

    /// Delete an issue, and its subtasks when `delete_subtasks` is set.
    ///
    /// `DELETE /rest/api/{2|3}/issue/{issueIdOrKey}?deleteSubtasks={bool}`
    #[instrument(skip(self))]
    pub async fn delete(&self, issue_key: &str, delete_subtasks: bool) -> Result<ResponseScheme> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let mut query = Query::new();
        query.add("deleteSubtasks", delete_subtasks);
        let endpoint = query.append_to(format!("rest/api/{}/issue/{}", self.version, issue_key));

        let request = self
            .connector
            .new_request(Method::DELETE, &endpoint, None, None)?;
        Ok(self.connector.call(request).await?)
    }

    /// Assign an issue to a user.
    ///
    /// `PUT /rest/api/{2|3}/issue/{issueIdOrKey}/assignee`
    #[instrument(skip(self))]
    pub async fn assign(&self, issue_key: &str, account_id: &str) -> Result<ResponseScheme> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        if account_id.is_empty() {
            return Err(Error::NoAccountId);
        }

        let payload = AccountPayload {
            account_id: account_id.to_string(),
        };
        let endpoint = format!("rest/api/{}/issue/{}/assignee", self.version, issue_key);
        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(&payload)?))?;
        Ok(self.connector.call(request).await?)
    }

    /// Queue an email notification about an issue.
    ///
    /// `POST /rest/api/{2|3}/issue/{issueIdOrKey}/notify`
    #[instrument(skip(self, options))]
    pub async fn notify(
        &self,
        issue_key: &str,
        options: &IssueNotifyOptions,
    ) -> Result<ResponseScheme> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let endpoint = format!("rest/api/{}/issue/{}/notify", self.version, issue_key);
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(options)?))?;
        Ok(self.connector.call(request).await?)
    }

    /// Transitions the user can perform on an issue in its current status.
    ///
    /// `GET /rest/api/{2|3}/issue/{issueIdOrKey}/transitions`
    #[instrument(skip(self))]
    pub async fn transitions(&self, issue_key: &str) -> Result<IssueTransitions> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let endpoint = format!("rest/api/{}/issue/{}/transitions", self.version, issue_key);
        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        let transitions: IssueTransitions = response.json()?;
        debug!("Found {} transitions", transitions.transitions.len());
        Ok(transitions)
    }
}

impl<B: Serialize + Clone + Default> IssueService<B> {
    /// Create an issue. `custom_fields` are merged into the payload fields.
    ///
    /// `POST /rest/api/{2|3}/issue`
    #[instrument(skip_all)]
    pub async fn create(
        &self,
        payload: &IssuePayload<B>,
        custom_fields: Option<&CustomFields>,
    ) -> Result<IssueCreated> {
        let mut payload = payload.clone();
        if let Some(custom_fields) = custom_fields {
            payload.merge_custom_fields(custom_fields);
        }

        let endpoint = format!("rest/api/{}/issue", self.version);
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        let created: IssueCreated = response.json()?;
        debug!("Created issue {}", created.key);
        Ok(created)
    }

    /// Create up to 50 issues in one request.
    ///
    /// `POST /rest/api/{2|3}/issue/bulk`
    #[instrument(skip_all, fields(count = payloads.len()))]
    pub async fn creates(&self, payloads: &[IssuePayload<B>]) -> Result<IssueBulkCreated> {
        if payloads.is_empty() {
            return Err(Error::NoIssuePayloads);
        }

        let payload = IssueBulkPayload {
            issue_updates: payloads.to_vec(),
        };
        let endpoint = format!("rest/api/{}/issue/bulk", self.version);
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        let response = self.connector.call(request).await?;
        Ok(response.json()?)
    }

    /// Edit an issue.
    ///
    /// Custom field values land in `fields`, operations in `update`.
    ///
    /// `PUT /rest/api/{2|3}/issue/{issueIdOrKey}?notifyUsers={bool}`
    #[instrument(skip(self, payload, custom_fields, operations))]
    pub async fn update(
        &self,
        issue_key: &str,
        notify: bool,
        payload: &IssuePayload<B>,
        custom_fields: Option<&CustomFields>,
        operations: Option<&UpdateOperations>,
    ) -> Result<ResponseScheme> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let mut payload = payload.clone();
        if let Some(custom_fields) = custom_fields {
            payload.merge_custom_fields(custom_fields);
        }
        if let Some(operations) = operations {
            payload.merge_operations(operations);
        }

        let mut query = Query::new();
        query.add("notifyUsers", notify);
        let endpoint = query.append_to(format!("rest/api/{}/issue/{}", self.version, issue_key));

        let request =
            self.connector
                .new_request(Method::PUT, &endpoint, None, Some(json_body(&payload)?))?;
        Ok(self.connector.call(request).await?)
    }

    /// Perform a transition, optionally setting fields on its screen.
    ///
    /// `POST /rest/api/{2|3}/issue/{issueIdOrKey}/transitions`
    #[instrument(skip(self, options))]
    pub async fn move_to(
        &self,
        issue_key: &str,
        transition_id: &str,
        options: Option<&IssueMoveOptions<B>>,
    ) -> Result<ResponseScheme> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }
        if transition_id.is_empty() {
            return Err(Error::NoTransitionId);
        }

        let mut payload = IssueTransitionPayload {
            transition: NamedRef::id(transition_id),
            fields: None,
            update: UpdateOperations::default(),
        };
        if let Some(options) = options {
            let mut merged = IssuePayload::new(options.fields.clone().unwrap_or_default());
            if let Some(custom_fields) = &options.custom_fields {
                merged.merge_custom_fields(custom_fields);
            }
            if let Some(operations) = &options.operations {
                merged.merge_operations(operations);
            }
            payload.fields = Some(merged.fields);
            payload.update = merged.update;
        }

        let endpoint = format!("rest/api/{}/issue/{}/transitions", self.version, issue_key);
        let request =
            self.connector
                .new_request(Method::POST, &endpoint, None, Some(json_body(&payload)?))?;
        Ok(self.connector.call(request).await?)
    }
}

impl<B: DeserializeOwned + Default> IssueService<B> {
    /// Get an issue, limited to `fields` and expanded with `expand` when given.
    ///
    /// `GET /rest/api/{2|3}/issue/{issueIdOrKey}`
    #[instrument(skip(self))]
    pub async fn get(&self, issue_key: &str, fields: &[String], expand: &[String]) -> Result<Issue<B>> {
        if issue_key.is_empty() {
            return Err(Error::NoIssueKeyOrId);
        }

        let mut query = Query::new();
        query.add_joined("fields", fields).add_joined("expand", expand);
        let endpoint = query.append_to(format!("rest/api/{}/issue/{}", self.version, issue_key));

        let request = self.connector.new_request(Method::GET, &endpoint, None, None)?;
        let response = self.connector.call(request).await?;
        let issue: Issue<B> = response.json()?;
        debug!("Fetched issue: {}", issue.key);
        Ok(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::model::{IssueFields, NotifyRecipients};
    use crate::test_support::MockConnector;
    use serde_json::json;

    fn service(mock: &Arc<MockConnector>) -> IssueService<String> {
        IssueService::new(mock.clone(), ApiVersion::V2)
    }

    #[tokio::test]
    async fn test_delete_always_sends_subtask_flag() {
        let mock = MockConnector::empty(204);
        let issues = IssueService::<String>::new(mock.clone(), ApiVersion::V3);

        issues.delete("KP-2", false).await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/issue/KP-2?deleteSubtasks=false");

        issues.delete("KP-2", true).await.unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/issue/KP-2?deleteSubtasks=true");
        assert_eq!(mock.last().method, Method::DELETE);
    }

    #[tokio::test]
    async fn test_assign() {
        let mock = MockConnector::empty(204);
        let response = service(&mock).assign("KP-2", "5b10a").await.unwrap();

        let request = mock.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.url, "rest/api/2/issue/KP-2/assignee");
        assert_eq!(request.body.unwrap(), json!({"accountId": "5b10a"}));
        assert_eq!(response.status.as_u16(), 204);
    }

    #[tokio::test]
    async fn test_notify_payload() {
        let mock = MockConnector::empty(204);
        let options = IssueNotifyOptions {
            subject: Some("Please review".to_string()),
            text_body: Some("Ready for review".to_string()),
            to: Some(NotifyRecipients {
                assignee: true,
                watchers: true,
                ..NotifyRecipients::default()
            }),
            ..IssueNotifyOptions::default()
        };

        service(&mock).notify("KP-2", &options).await.unwrap();

        let request = mock.last();
        assert_eq!(request.url, "rest/api/2/issue/KP-2/notify");
        let body = request.body.unwrap();
        assert_eq!(body["subject"], "Please review");
        assert_eq!(body["to"]["watchers"], true);
        assert_eq!(body["to"]["voters"], false);
    }

    #[tokio::test]
    async fn test_transitions() {
        let mock = MockConnector::json(json!({"transitions": [
            {"id": "21", "name": "In Progress", "to": {"id": "3", "name": "In Progress"}}
        ]}));

        let transitions = service(&mock).transitions("KP-2").await.unwrap();

        assert_eq!(mock.endpoint(), "rest/api/2/issue/KP-2/transitions");
        assert_eq!(transitions.transitions[0].id, "21");
    }

    #[tokio::test]
    async fn test_move_to_merges_options() {
        let mock = MockConnector::empty(204);
        let options = IssueMoveOptions {
            fields: Some(IssueFields {
                summary: Some("Moved".to_string()),
                ..IssueFields::default()
            }),
            custom_fields: Some(CustomFields::new().text("customfield_10010", "note")),
            operations: Some(UpdateOperations::new().add("labels", "moved")),
        };

        service(&mock)
            .move_to("KP-2", "21", Some(&options))
            .await
            .unwrap();

        let request = mock.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "rest/api/2/issue/KP-2/transitions");
        assert_eq!(
            request.body.unwrap(),
            json!({
                "transition": {"id": "21"},
                "fields": {"summary": "Moved", "customfield_10010": "note"},
                "update": {"labels": [{"add": "moved"}]}
            })
        );
    }

    #[tokio::test]
    async fn test_move_to_without_options() {
        let mock = MockConnector::empty(204);
        service(&mock).move_to("KP-2", "31", None).await.unwrap();
        assert_eq!(mock.last().body.unwrap(), json!({"transition": {"id": "31"}}));
    }

    #[tokio::test]
    async fn test_creates_requires_payloads() {
        let mock = MockConnector::json(json!({}));
        let result = service(&mock).creates(&[]).await;
        assert!(matches!(result, Err(Error::NoIssuePayloads)));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_sentinels() {
        let mock = MockConnector::json(json!({}));
        let issues = service(&mock);
        let payload = IssuePayload::new(IssueFields::default());

        assert!(matches!(issues.delete("", false).await, Err(Error::NoIssueKeyOrId)));
        assert!(matches!(issues.assign("", "a").await, Err(Error::NoIssueKeyOrId)));
        assert!(matches!(issues.assign("KP-1", "").await, Err(Error::NoAccountId)));
        assert!(matches!(
            issues.notify("", &IssueNotifyOptions::default()).await,
            Err(Error::NoIssueKeyOrId)
        ));
        assert!(matches!(issues.transitions("").await, Err(Error::NoIssueKeyOrId)));
        assert!(matches!(issues.get("", &[], &[]).await, Err(Error::NoIssueKeyOrId)));
        assert!(matches!(
            issues.update("", true, &payload, None, None).await,
            Err(Error::NoIssueKeyOrId)
        ));
        assert!(matches!(
            issues.move_to("KP-1", "", None).await,
            Err(Error::NoTransitionId)
        ));
        assert!(mock.untouched());
    }

    #[tokio::test]
    async fn test_error_passthrough() {
        let mock = MockConnector::failing(|| ApiError::NotFound("issue".to_string()));
        let err = service(&mock).transitions("KP-404").await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::NotFound(_))));
        assert_eq!(mock.calls(), 1);
    }
}
