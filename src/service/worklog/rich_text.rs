//! Worklogs with wiki-markup comments (API v2).

use super::WorklogService;

/// Worklog operations whose comments are plain wiki-markup strings.
pub type WorklogRichTextService = WorklogService<String>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiVersion;
    use crate::model::{WorklogOptions, WorklogPayload};
    use crate::test_support::MockConnector;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_with_plain_comment() {
        let mock = MockConnector::json(json!({"id": "100028", "comment": "Updated"}));
        let worklogs = WorklogRichTextService::new(mock.clone(), ApiVersion::V2);
        let payload = WorklogPayload {
            comment: Some("Updated".to_string()),
            time_spent: Some("3h 20m".to_string()),
            ..WorklogPayload::default()
        };
        let options = WorklogOptions {
            adjust_estimate: Some("new".to_string()),
            new_estimate: Some("1d".to_string()),
            override_editable_flag: true,
            ..WorklogOptions::default()
        };

        let worklog = worklogs
            .update("KP-2", "100028", &payload, &options)
            .await
            .unwrap();

        let request = mock.last();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.url,
            "rest/api/2/issue/KP-2/worklog/100028?adjustEstimate=new&newEstimate=1d&overrideEditableFlag=true"
        );
        assert_eq!(request.body.unwrap(), json!({"comment": "Updated", "timeSpent": "3h 20m"}));
        assert_eq!(worklog.comment.as_deref(), Some("Updated"));
    }

    #[tokio::test]
    async fn test_get_with_expand() {
        let mock = MockConnector::json(json!({"id": "100028"}));
        WorklogRichTextService::new(mock.clone(), ApiVersion::V2)
            .get("KP-2", "100028", &["properties".to_string()])
            .await
            .unwrap();
        assert_eq!(
            mock.endpoint(),
            "rest/api/2/issue/KP-2/worklog/100028?expand=properties"
        );
    }
}
