//! Issue types and issue type schemes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An issue type.
///
/// Returned by `GET /rest/api/3/issuetype` and `GET /rest/api/3/issuetype/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueType {
    /// The issue type ID.
    #[serde(default)]
    pub id: String,
    /// URL of the issue type resource.
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    /// The issue type name (e.g., "Bug", "Story", "Task").
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Whether this is a subtask type.
    #[serde(default)]
    pub subtask: bool,
    #[serde(default)]
    pub avatar_id: Option<i64>,
    #[serde(default)]
    pub entity_id: Option<String>,
    /// `-1` for subtasks, `0` for standard types, `1` for epics.
    #[serde(default)]
    pub hierarchy_level: i32,
    /// Set for issue types of team-managed projects.
    #[serde(default)]
    pub scope: Option<Value>,
}

/// Body of issue type create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `standard` or `subtask`; create only.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_level: Option<i32>,
    /// Update only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_id: Option<i64>,
}

/// An issue type scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeScheme {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_issue_type_id: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

/// Body of issue type scheme create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeSchemePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_issue_type_id: Option<String>,
    /// Create only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issue_type_ids: Vec<String>,
}

/// Response of `POST /rest/api/3/issuetypescheme`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssueTypeScheme {
    #[serde(default)]
    pub issue_type_scheme_id: String,
}

/// An issue type assigned to an issue type scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeSchemeItem {
    #[serde(default)]
    pub issue_type_scheme_id: String,
    #[serde(default)]
    pub issue_type_id: String,
}

/// An issue type scheme with the projects using it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIssueTypeScheme {
    #[serde(default)]
    pub issue_type_scheme: IssueTypeScheme,
    #[serde(default)]
    pub project_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issue_type() {
        let json = r#"{
            "self": "https://example.atlassian.net/rest/api/3/issueType/3",
            "id": "3",
            "description": "A task that needs to be done.",
            "iconUrl": "https://example.atlassian.net/images/icons/issuetypes/task.png",
            "name": "Task",
            "subtask": false,
            "avatarId": 1,
            "hierarchyLevel": 0
        }"#;

        let issue_type: IssueType = serde_json::from_str(json).unwrap();
        assert_eq!(issue_type.name, "Task");
        assert!(!issue_type.subtask);
        assert_eq!(issue_type.avatar_id, Some(1));
    }

    #[test]
    fn test_issue_type_payload_uses_type_key() {
        let payload = IssueTypePayload {
            name: Some("Incident".to_string()),
            issue_type: Some("standard".to_string()),
            ..IssueTypePayload::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, serde_json::json!({"name": "Incident", "type": "standard"}));
    }
}
