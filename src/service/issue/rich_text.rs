//! Issues with wiki-markup bodies (API v2).

use super::IssueService;

/// Issue operations whose rich-text fields are plain wiki-markup strings.
pub type IssueRichTextService = IssueService<String>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiVersion;
    use crate::model::{IssueFields, IssuePayload, ProjectRef, UpdateOperations};
    use crate::test_support::MockConnector;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_sends_plain_description() {
        let mock = MockConnector::json(json!({"id": "10011", "key": "KP-11"}));
        let issues = IssueRichTextService::new(mock.clone(), ApiVersion::V2);
        let payload = IssuePayload::new(IssueFields {
            summary: Some("Wiki issue".to_string()),
            description: Some("h1. Heading\n*bold*".to_string()),
            project: Some(ProjectRef::id("10000")),
            ..IssueFields::default()
        });

        issues.create(&payload, None).await.unwrap();

        let request = mock.last();
        assert_eq!(request.url, "rest/api/2/issue");
        let body = request.body.unwrap();
        assert_eq!(body["fields"]["description"], "h1. Heading\n*bold*");
        assert_eq!(body["fields"]["project"], json!({"id": "10000"}));
    }

    #[tokio::test]
    async fn test_update_merges_operations() {
        let mock = MockConnector::empty(204);
        let issues = IssueRichTextService::new(mock.clone(), ApiVersion::V2);
        let payload = IssuePayload::new(IssueFields::default());
        let operations = UpdateOperations::new()
            .add("labels", "triaged")
            .remove("labels", "new");

        issues
            .update("KP-11", true, &payload, None, Some(&operations))
            .await
            .unwrap();

        assert_eq!(mock.endpoint(), "rest/api/2/issue/KP-11?notifyUsers=true");
        assert_eq!(
            mock.last().body.unwrap(),
            json!({"fields": {}, "update": {"labels": [{"add": "triaged"}, {"remove": "new"}]}})
        );
    }

    #[tokio::test]
    async fn test_get_decodes_plain_description() {
        let mock = MockConnector::json(json!({
            "id": "10011",
            "key": "KP-11",
            "fields": {"description": "plain *text*"}
        }));
        let issues = IssueRichTextService::new(mock.clone(), ApiVersion::V2);

        let issue = issues.get("KP-11", &[], &[]).await.unwrap();

        assert_eq!(mock.endpoint(), "rest/api/2/issue/KP-11");
        assert_eq!(
            issue.fields.unwrap().description.as_deref(),
            Some("plain *text*")
        );
    }
}
