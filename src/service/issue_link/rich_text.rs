//! Issue links with a wiki-markup comment (API v2).

use super::IssueLinkService;

pub type IssueLinkRichTextService = IssueLinkService<String>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiVersion;
    use crate::model::{LinkPayload, LinkType, LinkedIssue};
    use crate::test_support::MockConnector;
    use serde_json::json;

    #[tokio::test]
    async fn test_link_without_comment() {
        let mock = MockConnector::empty(201);
        let payload = LinkPayload::<String> {
            link_type: LinkType {
                id: Some("10000".to_string()),
                ..LinkType::default()
            },
            inward_issue: LinkedIssue::key("KP-3"),
            outward_issue: LinkedIssue::key("KP-4"),
            comment: None,
        };

        IssueLinkRichTextService::new(mock.clone(), ApiVersion::V2)
            .link(&payload)
            .await
            .unwrap();

        let request = mock.last();
        assert_eq!(request.url, "rest/api/2/issueLink");
        assert_eq!(
            request.body.unwrap(),
            json!({
                "type": {"id": "10000"},
                "inwardIssue": {"key": "KP-3"},
                "outwardIssue": {"key": "KP-4"}
            })
        );
    }
}
