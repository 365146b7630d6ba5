//! Issues with Atlassian Document Format bodies (API v3).

use crate::model::AdfNode;

use super::IssueService;

/// Issue operations whose rich-text fields are ADF documents.
pub type IssueAdfService = IssueService<AdfNode>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiVersion;
    use crate::model::{CustomFields, IssueFields, IssuePayload, IssueTypeRef, ProjectRef};
    use crate::test_support::MockConnector;
    use reqwest::Method;
    use serde_json::json;

    fn payload(summary: &str) -> IssuePayload<AdfNode> {
        IssuePayload::new(IssueFields {
            summary: Some(summary.to_string()),
            description: Some(AdfNode::from_plain_text("Steps to reproduce")),
            project: Some(ProjectRef::key("KP")),
            issuetype: Some(IssueTypeRef {
                name: Some("Bug".to_string()),
                ..IssueTypeRef::default()
            }),
            ..IssueFields::default()
        })
    }

    #[tokio::test]
    async fn test_create_sends_adf_description() {
        let mock = MockConnector::json(json!({"id": "10010", "key": "KP-10"}));
        let issues = IssueAdfService::new(mock.clone(), ApiVersion::V3);
        let custom_fields = CustomFields::new().number("customfield_10016", 3.0);

        let created = issues
            .create(&payload("Login fails"), Some(&custom_fields))
            .await
            .unwrap();

        let request = mock.last();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "rest/api/3/issue");
        let body = request.body.unwrap();
        assert_eq!(body["fields"]["description"]["type"], "doc");
        assert_eq!(
            body["fields"]["description"]["content"][0]["content"][0]["text"],
            "Steps to reproduce"
        );
        assert_eq!(body["fields"]["customfield_10016"], 3.0);
        assert_eq!(created.key, "KP-10");
    }

    #[tokio::test]
    async fn test_creates_bulk() {
        let mock = MockConnector::json(json!({
            "issues": [{"id": "1", "key": "KP-1"}, {"id": "2", "key": "KP-2"}],
            "errors": []
        }));
        let issues = IssueAdfService::new(mock.clone(), ApiVersion::V3);

        let created = issues
            .creates(&[payload("first"), payload("second")])
            .await
            .unwrap();

        let request = mock.last();
        assert_eq!(request.url, "rest/api/3/issue/bulk");
        let body = request.body.unwrap();
        assert_eq!(body["issueUpdates"].as_array().unwrap().len(), 2);
        assert_eq!(body["issueUpdates"][1]["fields"]["summary"], "second");
        assert_eq!(created.issues.len(), 2);
    }

    #[tokio::test]
    async fn test_get_decodes_adf() {
        let mock = MockConnector::json(json!({
            "id": "10010",
            "key": "KP-10",
            "fields": {
                "summary": "Login fails",
                "description": {"type": "doc", "version": 1, "content": [
                    {"type": "paragraph", "content": [{"type": "text", "text": "Steps"}]}
                ]}
            }
        }));
        let issues = IssueAdfService::new(mock.clone(), ApiVersion::V3);

        let issue = issues
            .get(
                "KP-10",
                &["summary".to_string(), "description".to_string()],
                &["renderedFields".to_string()],
            )
            .await
            .unwrap();

        assert_eq!(
            mock.endpoint(),
            "rest/api/3/issue/KP-10?expand=renderedFields&fields=summary%2Cdescription"
        );
        assert_eq!(issue.description_text(), "Steps");
    }

    #[tokio::test]
    async fn test_update_with_notify() {
        let mock = MockConnector::empty(204);
        let issues = IssueAdfService::new(mock.clone(), ApiVersion::V3);

        let response = issues
            .update("KP-10", false, &payload("Renamed"), None, None)
            .await
            .unwrap();

        assert_eq!(mock.last().method, Method::PUT);
        assert_eq!(mock.endpoint(), "rest/api/3/issue/KP-10?notifyUsers=false");
        assert_eq!(response.status.as_u16(), 204);
    }
}
