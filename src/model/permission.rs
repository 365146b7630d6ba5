//! Permissions, permission schemes and grants.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A permission known to the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    /// `GLOBAL` or `PROJECT`.
    #[serde(rename = "type", default)]
    pub permission_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Returned by `GET /rest/api/3/permissions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub permissions: BTreeMap<String, Permission>,
}

/// Body of `POST /rest/api/3/permissions/check`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionCheckPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub global_permissions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_permissions: Vec<ProjectPermissionCheck>,
}

/// One project permission to check against issues and projects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPermissionCheck {
    #[serde(default)]
    pub permission: String,
    #[serde(default)]
    pub issues: Vec<i64>,
    #[serde(default)]
    pub projects: Vec<i64>,
}

/// Returned by `POST /rest/api/3/permissions/check`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionCheckResult {
    #[serde(default)]
    pub global_permissions: Vec<String>,
    #[serde(default)]
    pub project_permissions: Vec<ProjectPermissionCheck>,
}

/// Body of `POST /rest/api/3/permissions/project`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PermittedProjectsPayload<'a> {
    pub permissions: &'a [String],
}

/// Returned by `POST /rest/api/3/permissions/project`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermittedProjects {
    #[serde(default)]
    pub projects: Vec<PermittedProject>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermittedProject {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub key: String,
}

/// A permission scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionScheme {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub expand: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scope: Option<Value>,
    #[serde(default)]
    pub permissions: Vec<PermissionGrant>,
}

/// Returned by `GET /rest/api/3/permissionscheme`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSchemes {
    #[serde(default)]
    pub permission_schemes: Vec<PermissionScheme>,
}

/// Body of permission scheme create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PermissionSchemePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<PermissionGrantPayload>,
}

/// A permission granted to a holder within a scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionGrant {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub holder: Option<PermissionHolder>,
    #[serde(default)]
    pub permission: String,
}

/// Who holds a grant: a group, a role, a user, `anyone`, ...
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionHolder {
    #[serde(rename = "type")]
    pub holder_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
}

/// Body of `POST /rest/api/3/permissionscheme/{schemeId}/permission`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PermissionGrantPayload {
    pub holder: PermissionHolder,
    pub permission: String,
}

/// Returned by `GET /rest/api/3/permissionscheme/{schemeId}/permission`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionGrants {
    #[serde(default)]
    pub permissions: Vec<PermissionGrant>,
    #[serde(default)]
    pub expand: Option<String>,
}
