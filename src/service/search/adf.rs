//! Search results with Atlassian Document Format bodies (API v3).

use crate::model::AdfNode;

use super::SearchService;

pub type SearchAdfService = SearchService<AdfNode>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiVersion;
    use crate::test_support::MockConnector;
    use serde_json::json;

    #[tokio::test]
    async fn test_descriptions_decode_as_documents() {
        let mock = MockConnector::json(json!({
            "startAt": 0,
            "maxResults": 1,
            "total": 2,
            "issues": [{
                "id": "10002",
                "key": "KP-1",
                "fields": {
                    "summary": "Login fails",
                    "description": {
                        "type": "doc",
                        "version": 1,
                        "content": [{"type": "paragraph", "content": [{"type": "text", "text": "Steps"}]}]
                    }
                }
            }]
        }));

        let page = SearchAdfService::new(mock.clone(), ApiVersion::V3)
            .post("project = KP", &[], &[], 0, 1, "")
            .await
            .unwrap();

        assert!(page.has_more());
        let fields = page.issues[0].fields.as_ref().unwrap();
        assert_eq!(fields.description.as_ref().unwrap().to_plain_text(), "Steps");
    }
}
