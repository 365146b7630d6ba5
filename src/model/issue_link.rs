//! Issue links, link types and remote links.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::comment::CommentPayload;

/// A link between two issues.
///
/// Returned by `GET /rest/api/3/issueLink/{linkId}` and embedded in the
/// `issuelinks` issue field, where only one of the two sides is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLink {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(rename = "type", default)]
    pub link_type: Option<LinkType>,
    #[serde(default)]
    pub inward_issue: Option<LinkedIssue>,
    #[serde(default)]
    pub outward_issue: Option<LinkedIssue>,
}

/// A summary reference to another issue (link target, parent, subtask).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedIssue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// A reduced set of the issue's fields (summary, status, priority, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
}

impl LinkedIssue {
    pub fn key(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::default()
        }
    }
}

/// An issue link type, e.g. `Blocks` with `blocks` / `is blocked by`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inward: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outward: Option<String>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
}

/// Returned by `GET /rest/api/3/issueLinkType`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkTypes {
    #[serde(default)]
    pub issue_link_types: Vec<LinkType>,
}

/// Body of `POST /rest/api/3/issueLink`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPayload<B> {
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub inward_issue: LinkedIssue,
    pub outward_issue: LinkedIssue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentPayload<B>>,
}

/// An issue with only its links, as returned by `?fields=issuelinks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueLinks {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub fields: IssueLinkFields,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueLinkFields {
    #[serde(default)]
    pub issuelinks: Vec<IssueLink>,
}

/// A link from an issue to an object outside Jira.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Identifies the link across updates, at most 255 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<RemoteLinkApplication>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<RemoteLinkObject>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteLinkApplication {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub app_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteLinkObject {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

/// Returned when a remote link is created or updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteLinkIdentify {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AdfNode;

    #[test]
    fn test_parse_issue_links() {
        let json = r#"{
            "id": "10001",
            "key": "KP-2",
            "fields": {"issuelinks": [{
                "id": "10000",
                "type": {"id": "1000", "name": "Duplicate", "inward": "Duplicated by", "outward": "Duplicates"},
                "outwardIssue": {"id": "10004L", "key": "PR-2", "fields": {"summary": "Other"}}
            }]}
        }"#;

        let links: IssueLinks = serde_json::from_str(json).unwrap();
        let link = &links.fields.issuelinks[0];
        assert_eq!(link.link_type.as_ref().unwrap().name.as_deref(), Some("Duplicate"));
        assert_eq!(link.outward_issue.as_ref().unwrap().key.as_deref(), Some("PR-2"));
        assert!(link.inward_issue.is_none());
    }

    #[test]
    fn test_link_payload_shape() {
        let payload = LinkPayload {
            link_type: LinkType {
                name: Some("Blocks".to_string()),
                ..LinkType::default()
            },
            inward_issue: LinkedIssue::key("KP-1"),
            outward_issue: LinkedIssue::key("KP-2"),
            comment: Some(CommentPayload::new(AdfNode::from_plain_text("linked"))),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], serde_json::json!({"name": "Blocks"}));
        assert_eq!(value["inwardIssue"], serde_json::json!({"key": "KP-1"}));
        assert_eq!(value["comment"]["body"]["type"], "doc");
    }
}
