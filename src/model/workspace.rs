//! Site-level resources: server info, application roles, audit records,
//! priorities, resolutions, long-running tasks and attachment metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::user::User;

/// Returned by `GET /rest/api/3/serverInfo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub version_numbers: Vec<u32>,
    /// `Cloud` or `Server`.
    #[serde(default)]
    pub deployment_type: Option<String>,
    #[serde(default)]
    pub build_number: i64,
    #[serde(default)]
    pub build_date: Option<String>,
    #[serde(default)]
    pub server_time: Option<String>,
    #[serde(default)]
    pub scm_info: Option<String>,
    #[serde(default)]
    pub server_title: Option<String>,
    #[serde(default)]
    pub health_checks: Vec<HealthCheck>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthCheck {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub passed: bool,
}

/// An application role (Jira Software, Jira Service Management, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRole {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub default_groups: Vec<String>,
    #[serde(default)]
    pub selected_by_default: bool,
    #[serde(default)]
    pub defined: bool,
    #[serde(default)]
    pub number_of_seats: i64,
    #[serde(default)]
    pub remaining_seats: i64,
    #[serde(default)]
    pub user_count: i64,
    #[serde(default)]
    pub user_count_description: Option<String>,
    #[serde(default)]
    pub has_unlimited_seats: bool,
    #[serde(default)]
    pub platform: bool,
}

/// Filters for `GET /rest/api/3/auditing/record`.
#[derive(Debug, Clone, Default)]
pub struct AuditRecordOptions {
    /// Matched against summary, category, author and object fields.
    pub filter: Option<String>,
    /// ISO 8601 lower bound on the creation time.
    pub from: Option<String>,
    /// ISO 8601 upper bound on the creation time.
    pub to: Option<String>,
}

/// Returned by `GET /rest/api/3/auditing/record`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditRecords {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub records: Vec<AuditRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub remote_address: Option<String>,
    #[serde(default)]
    pub author_key: Option<String>,
    #[serde(default)]
    pub author_account_id: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub event_source: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub object_item: Option<AuditItem>,
    #[serde(default)]
    pub changed_values: Vec<AuditChange>,
    #[serde(default)]
    pub associated_items: Vec<AuditItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditChange {
    #[serde(default)]
    pub field_name: String,
    #[serde(default)]
    pub changed_from: Option<String>,
    #[serde(default)]
    pub changed_to: Option<String>,
}

/// An issue priority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Priority {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status_color: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub is_default: Option<bool>,
}

/// An issue resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_default: Option<bool>,
}

/// A long-running task.
///
/// Returned by `GET /rest/api/3/task/{taskId}`; asynchronous operations such
/// as field and project deletion hand back the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `ENQUEUED`, `RUNNING`, `COMPLETE`, `FAILED`, `CANCEL_REQUESTED`, ...
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub submitted_by: Option<i64>,
    #[serde(default)]
    pub progress: i64,
    #[serde(default)]
    pub elapsed_runtime: i64,
    #[serde(default)]
    pub submitted: Option<i64>,
    #[serde(default)]
    pub started: Option<i64>,
    #[serde(default)]
    pub finished: Option<i64>,
    #[serde(default)]
    pub last_update: Option<i64>,
}

impl TaskDetail {
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.as_deref(),
            Some("COMPLETE" | "FAILED" | "CANCELLED" | "DEAD")
        )
    }
}

/// Returned by `GET /rest/api/3/attachment/meta`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentSettings {
    #[serde(default)]
    pub enabled: bool,
    /// Bytes.
    #[serde(default)]
    pub upload_limit: i64,
}

/// Returned by `GET /rest/api/3/attachment/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub author: Option<User>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub properties: Option<Value>,
}

/// Returned by `GET /rest/api/3/attachment/{id}/expand/human`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentArchive {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub entries: Vec<AttachmentArchiveEntry>,
    #[serde(default)]
    pub total_entry_count: i64,
    #[serde(default)]
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentArchiveEntry {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub index: i64,
    /// Human readable size, e.g. `15 kB`.
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}
