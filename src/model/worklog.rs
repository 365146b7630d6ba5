//! Issue worklogs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::adf::AdfNode;
use super::comment::Visibility;
use super::user::User;

/// Time logged against an issue. `B` is the comment body type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worklog<B> {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub issue_id: Option<String>,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub update_author: Option<User>,
    #[serde(default)]
    pub comment: Option<B>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub started: Option<String>,
    /// Human readable duration, e.g. `3h 20m`.
    #[serde(default)]
    pub time_spent: Option<String>,
    #[serde(default)]
    pub time_spent_seconds: Option<i64>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub properties: Vec<Value>,
}

/// A page of worklogs.
///
/// Returned by `GET /rest/api/3/issue/{issueIdOrKey}/worklog` and embedded in
/// the `worklog` issue field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPage<B> {
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub worklogs: Vec<Worklog<B>>,
}

/// Body of worklog create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPayload<B> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<B>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// `2021-01-17T12:34:00.000+0000`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<i64>,
}

/// Estimate adjustment and notification flags for worklog writes.
#[derive(Debug, Clone, Default)]
pub struct WorklogOptions {
    /// Send a notification to watchers (`notifyUsers`).
    pub notify: Option<bool>,
    /// `new`, `leave`, `manual` or `auto`.
    pub adjust_estimate: Option<String>,
    pub new_estimate: Option<String>,
    pub reduce_by: Option<String>,
    /// Only used when deleting.
    pub increase_by: Option<String>,
    pub override_editable_flag: bool,
    pub expand: Vec<String>,
}

/// Worklog IDs changed (deleted or updated) since a point in time.
///
/// Returned by `GET /rest/api/3/worklog/deleted` and `/worklog/updated`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedWorklogs {
    #[serde(default)]
    pub values: Vec<ChangedWorklog>,
    #[serde(default)]
    pub since: i64,
    #[serde(default)]
    pub until: i64,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub last_page: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedWorklog {
    #[serde(default)]
    pub worklog_id: i64,
    #[serde(default)]
    pub updated_time: i64,
    #[serde(default)]
    pub properties: Vec<Value>,
}

/// Body of `POST /rest/api/3/worklog/list`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct WorklogIds<'a> {
    pub ids: &'a [i64],
}

/// A worklog with an ADF comment (API v3).
pub type WorklogAdf = Worklog<AdfNode>;
/// A worklog with a wiki-markup comment (API v2).
pub type WorklogRichText = Worklog<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_changed_worklogs() {
        let json = r#"{
            "values": [{"worklogId": 103, "updatedTime": 1438013671562, "properties": []}],
            "since": 1438013671562,
            "until": 1438013693136,
            "lastPage": true
        }"#;

        let changed: ChangedWorklogs = serde_json::from_str(json).unwrap();
        assert_eq!(changed.values[0].worklog_id, 103);
        assert!(changed.last_page);
    }

    #[test]
    fn test_parse_v2_worklog() {
        let json = r#"{"id": "100028", "issueId": "10002", "comment": "I did some work here.", "timeSpentSeconds": 12000}"#;
        let worklog: WorklogRichText = serde_json::from_str(json).unwrap();
        assert_eq!(worklog.comment.as_deref(), Some("I did some work here."));
        assert_eq!(worklog.time_spent_seconds, Some(12000));
    }
}
