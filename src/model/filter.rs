//! Filters, dashboards and the share permissions they have in common.

use serde::{Deserialize, Serialize};

use super::project::{ProjectRef, ProjectRole};
use super::user::{GroupRef, User};

/// Who a filter or dashboard is shared with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharePermission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// `user`, `group`, `project`, `projectRole`, `global`, `loggedin`, ...
    #[serde(rename = "type")]
    pub share_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ProjectRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// A saved JQL filter.
///
/// Returned by `GET /rest/api/3/filter/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub jql: Option<String>,
    #[serde(default)]
    pub view_url: Option<String>,
    #[serde(default)]
    pub search_url: Option<String>,
    #[serde(default)]
    pub favourite: bool,
    #[serde(default)]
    pub favourited_count: i64,
    #[serde(default)]
    pub share_permissions: Vec<SharePermission>,
    #[serde(default)]
    pub edit_permissions: Vec<SharePermission>,
}

/// Body of filter create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jql: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favourite: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub share_permissions: Vec<SharePermission>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edit_permissions: Vec<SharePermission>,
}

/// Filters for `GET /rest/api/3/filter/search`.
#[derive(Debug, Clone, Default)]
pub struct FilterSearchOptions {
    pub name: Option<String>,
    pub account_id: Option<String>,
    pub group: Option<String>,
    pub project_id: Option<i64>,
    pub ids: Vec<i64>,
    pub order_by: Option<String>,
    pub expand: Vec<String>,
}

/// Returned by `GET /rest/api/3/filter/defaultShareScope`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareScope {
    /// `GLOBAL`, `AUTHENTICATED` or `PRIVATE`.
    pub scope: String,
}

/// Body of `POST /rest/api/3/filter/{id}/permission`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePermissionPayload {
    #[serde(rename = "type")]
    pub share_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groupname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_role_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// `1` view, `3` view and edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<u8>,
}

/// A dashboard.
///
/// Returned by `GET /rest/api/3/dashboard/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_favourite: bool,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub popularity: i64,
    #[serde(default)]
    pub rank: Option<i64>,
    /// URL of the dashboard in the Jira UI.
    #[serde(default)]
    pub view: Option<String>,
    #[serde(default)]
    pub is_writable: Option<bool>,
    #[serde(default)]
    pub system_dashboard: Option<bool>,
    #[serde(default)]
    pub share_permissions: Vec<SharePermission>,
    #[serde(default)]
    pub edit_permissions: Vec<SharePermission>,
}

/// Returned by `GET /rest/api/3/dashboard`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPage {
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub dashboards: Vec<Dashboard>,
}

/// Body of dashboard create, copy and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub share_permissions: Vec<SharePermission>,
    pub edit_permissions: Vec<SharePermission>,
}

/// Filters for `GET /rest/api/3/dashboard/search`.
#[derive(Debug, Clone, Default)]
pub struct DashboardSearchOptions {
    pub dashboard_name: Option<String>,
    pub owner_account_id: Option<String>,
    pub group_permission_name: Option<String>,
    pub group_id: Option<String>,
    pub project_id: Option<i64>,
    pub order_by: Option<String>,
    pub expand: Vec<String>,
}
