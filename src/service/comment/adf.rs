//! Comments with Atlassian Document Format bodies (API v3).

use crate::model::AdfNode;

use super::CommentService;

/// Comment operations whose bodies are ADF documents.
pub type CommentAdfService = CommentService<AdfNode>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiVersion;
    use crate::model::{CommentPayload, Visibility};
    use crate::test_support::MockConnector;
    use serde_json::json;

    #[tokio::test]
    async fn test_gets_query_and_decoding() {
        let mock = MockConnector::json(json!({
            "startAt": 0, "maxResults": 50, "total": 1,
            "comments": [{"id": "10000", "body": {"type": "doc", "version": 1, "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "LGTM"}]}
            ]}}]
        }));
        let comments = CommentAdfService::new(mock.clone(), ApiVersion::V3);

        let page = comments
            .gets("KP-2", Some("-created"), &["renderedBody".to_string()], 0, 50)
            .await
            .unwrap();

        assert_eq!(
            mock.endpoint(),
            "rest/api/3/issue/KP-2/comment?expand=renderedBody&maxResults=50\
             &orderBy=-created&startAt=0"
        );
        assert_eq!(page.comments[0].body_text(), "LGTM");
    }

    #[tokio::test]
    async fn test_add_with_visibility() {
        let mock = MockConnector::json(json!({"id": "10001"}));
        let comments = CommentAdfService::new(mock.clone(), ApiVersion::V3);
        let payload = CommentPayload {
            body: AdfNode::from_plain_text("Internal note"),
            visibility: Some(Visibility {
                visibility_type: "role".to_string(),
                value: Some("Administrators".to_string()),
                identifier: None,
            }),
        };

        let comment = comments.add("KP-2", &payload, &[]).await.unwrap();

        let request = mock.last();
        assert_eq!(request.url, "rest/api/3/issue/KP-2/comment");
        let body = request.body.unwrap();
        assert_eq!(body["body"]["type"], "doc");
        assert_eq!(body["visibility"], json!({"type": "role", "value": "Administrators"}));
        assert_eq!(comment.id, "10001");
    }

    #[tokio::test]
    async fn test_get() {
        let mock = MockConnector::json(json!({"id": "10000"}));
        CommentAdfService::new(mock.clone(), ApiVersion::V3)
            .get("KP-2", "10000")
            .await
            .unwrap();
        assert_eq!(mock.endpoint(), "rest/api/3/issue/KP-2/comment/10000");
    }
}
