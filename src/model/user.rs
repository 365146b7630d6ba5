//! Users, groups and account references.

use serde::{Deserialize, Serialize};

/// A Jira user.
///
/// Returned by `GET /rest/api/3/user` and embedded wherever Jira reports an
/// author, assignee, owner or lead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// URL of the user resource.
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// The user's account ID.
    #[serde(default)]
    pub account_id: String,
    /// `atlassian`, `app` or `customer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    /// The user's email address (may be hidden by privacy settings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// The user's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the user is active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// The user's timezone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// The user's locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// URLs for the user's avatar images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_urls: Option<AvatarUrls>,
    /// Groups the user belongs to (`expand=groups`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<UserGroups>,
    /// Expand options that include additional user details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expand: Option<String>,
}

impl User {
    /// A reference to a user by account ID only, for request payloads.
    pub fn account(account_id: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            ..Self::default()
        }
    }
}

/// Avatar URLs for a user or project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvatarUrls {
    /// 48x48 pixel avatar.
    #[serde(rename = "48x48", default)]
    pub size_48: Option<String>,
    /// 24x24 pixel avatar.
    #[serde(rename = "24x24", default)]
    pub size_24: Option<String>,
    /// 16x16 pixel avatar.
    #[serde(rename = "16x16", default)]
    pub size_16: Option<String>,
    /// 32x32 pixel avatar.
    #[serde(rename = "32x32", default)]
    pub size_32: Option<String>,
}

/// The `groups` block of an expanded user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserGroups {
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub items: Vec<GroupRef>,
}

/// A reference to a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
}

/// Payload for `POST /rest/api/3/user`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Products the user gets access to (`jira-software`, ...).
    pub products: Vec<String>,
}

/// Payload carrying a single account ID (`{"accountId": "..."}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountPayload {
    pub account_id: String,
}

/// A group.
///
/// Returned by `POST /rest/api/3/group`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub expand: Option<String>,
}

/// Filters for `GET /rest/api/3/group/bulk`.
#[derive(Debug, Clone, Default)]
pub struct GroupBulkOptions {
    pub group_ids: Vec<String>,
    pub group_names: Vec<String>,
}

/// Filters for user permission searches.
///
/// Used by `GET /rest/api/3/user/permission/search`.
#[derive(Debug, Clone, Default)]
pub struct UserPermissionSearchOptions {
    pub query: Option<String>,
    pub account_id: Option<String>,
    pub issue_key: Option<String>,
    pub project_key: Option<String>,
}
