//! Projects and the resources that hang off them: categories, components,
//! versions, roles and project types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::issue::StatusRef;
use super::issue_type::IssueType;
use super::user::{AvatarUrls, User};

/// A Jira project.
///
/// Returned by `GET /rest/api/3/project/{projectIdOrKey}` and
/// `GET /rest/api/3/project/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// The project ID.
    #[serde(default)]
    pub id: String,
    /// The project key (e.g., "PROJ").
    #[serde(default)]
    pub key: String,
    /// The project name.
    #[serde(default)]
    pub name: String,
    /// URL of the project resource.
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub expand: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// The project lead.
    #[serde(default)]
    pub lead: Option<User>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub issue_types: Vec<IssueType>,
    #[serde(default)]
    pub versions: Vec<Version>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// `PROJECT_LEAD` or `UNASSIGNED`.
    #[serde(default)]
    pub assignee_type: Option<String>,
    /// Role name to role URL.
    #[serde(default)]
    pub roles: BTreeMap<String, String>,
    #[serde(default)]
    pub avatar_urls: Option<AvatarUrls>,
    /// `software`, `service_desk` or `business`.
    #[serde(default)]
    pub project_type_key: Option<String>,
    /// Whether the project is team-managed.
    #[serde(default)]
    pub simplified: bool,
    /// `classic` or `next-gen`.
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub project_category: Option<ProjectCategory>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub deleted: bool,
}

/// A reference to a project, as embedded in issues and share permissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplified: Option<bool>,
}

impl ProjectRef {
    pub fn key(key: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            ..Self::default()
        }
    }

    pub fn id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }
}

/// Body of project create and update requests.
///
/// Create requires `key`, `name`, `lead_account_id` and `project_type_key`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_security_scheme: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_scheme: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_scheme: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_template_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_scheme: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type_screen_scheme: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_type_scheme: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_configuration_scheme: Option<i64>,
}

/// Response of `POST /rest/api/3/project`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub key: String,
}

/// Filters for `GET /rest/api/3/project/search`.
#[derive(Debug, Clone, Default)]
pub struct ProjectSearchOptions {
    pub order_by: Option<String>,
    pub ids: Vec<i64>,
    pub keys: Vec<String>,
    pub query: Option<String>,
    pub type_keys: Vec<String>,
    pub category_id: Option<i64>,
    /// `view`, `browse` or `edit`.
    pub action: Option<String>,
    pub expand: Vec<String>,
    /// `live`, `archived` or `deleted`.
    pub status: Vec<String>,
}

/// Statuses valid for one issue type of a project.
///
/// Returned (as a list) by `GET /rest/api/3/project/{projectIdOrKey}/statuses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectIssueTypeStatuses {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subtask: bool,
    #[serde(default)]
    pub statuses: Vec<StatusRef>,
}

/// Returned by `GET /rest/api/3/project/{projectKeyOrId}/notificationscheme`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationScheme {
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
    pub notification_scheme_events: Vec<NotificationSchemeEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationSchemeEvent {
    #[serde(default)]
    pub event: Option<Value>,
    #[serde(default)]
    pub notifications: Vec<Value>,
}

/// A project category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCategory {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of project category create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectCategoryPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A project component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lead: Option<User>,
    /// `PROJECT_DEFAULT`, `COMPONENT_LEAD`, `PROJECT_LEAD` or `UNASSIGNED`.
    #[serde(default)]
    pub assignee_type: Option<String>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub real_assignee_type: Option<String>,
    #[serde(default)]
    pub real_assignee: Option<User>,
    #[serde(default)]
    pub is_assignee_type_valid: bool,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub project_id: Option<i64>,
}

/// Body of component create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project key, required on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_account_id: Option<String>,
}

/// Returned by `GET /rest/api/3/component/{id}/relatedIssueCounts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentCount {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub issue_count: i64,
}

/// A project version (release).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub released: bool,
    #[serde(default)]
    pub overdue: Option<bool>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub user_start_date: Option<String>,
    #[serde(default)]
    pub user_release_date: Option<String>,
    #[serde(default)]
    pub project_id: Option<i64>,
}

/// Body of version create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<bool>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// Filters for `GET /rest/api/3/project/{projectIdOrKey}/version`.
#[derive(Debug, Clone, Default)]
pub struct VersionSearchOptions {
    pub order_by: Option<String>,
    pub query: Option<String>,
    /// `released`, `unreleased` or `archived`.
    pub status: Vec<String>,
    pub expand: Vec<String>,
}

/// Returned by `GET /rest/api/3/version/{id}/relatedIssueCounts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionIssueCounts {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub issues_fixed_count: i64,
    #[serde(default)]
    pub issues_affected_count: i64,
    #[serde(default)]
    pub issue_count_with_custom_fields_showing_version: i64,
}

/// Returned by `GET /rest/api/3/version/{id}/unresolvedIssueCount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionUnresolvedIssues {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub issues_unresolved_count: i64,
    #[serde(default)]
    pub issues_count: i64,
}

/// A project role and, when fetched for a project, its actors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRole {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub actors: Vec<RoleActor>,
    #[serde(default)]
    pub scope: Option<Value>,
    #[serde(default)]
    pub translated_name: Option<String>,
    #[serde(default)]
    pub current_user_role: Option<bool>,
    #[serde(default)]
    pub admin: Option<bool>,
    #[serde(default)]
    pub role_configurable: Option<bool>,
    #[serde(default)]
    pub default: Option<bool>,
}

/// A user or group holding a project role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleActor {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub display_name: Option<String>,
    /// `atlassian-group-role-actor` or `atlassian-user-role-actor`.
    #[serde(rename = "type", default)]
    pub actor_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub actor_group: Option<Value>,
    #[serde(default)]
    pub actor_user: Option<Value>,
}

/// Body of `POST /rest/api/3/role`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectRolePayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A project type (`software`, `business`, `service_desk`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectType {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub formatted_key: Option<String>,
    #[serde(default)]
    pub description_i18n_key: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_project() {
        let json = r#"{
            "id": "10000",
            "key": "EX",
            "name": "Example",
            "lead": {"accountId": "5b10a", "displayName": "Mia"},
            "roles": {"Developers": "https://example.atlassian.net/rest/api/3/project/EX/role/10000"},
            "projectTypeKey": "software",
            "simplified": false,
            "style": "classic",
            "projectCategory": {"id": "10000", "name": "FIRST"}
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.key, "EX");
        assert_eq!(project.lead.unwrap().account_id, "5b10a");
        assert!(project.roles.contains_key("Developers"));
        assert_eq!(project.project_category.unwrap().name, "FIRST");
    }

    #[test]
    fn test_project_payload_only_sends_set_fields() {
        let payload = ProjectPayload {
            key: Some("EX".to_string()),
            name: Some("Example".to_string()),
            lead_account_id: Some("5b10a".to_string()),
            project_type_key: Some("software".to_string()),
            category_id: Some(10120),
            ..ProjectPayload::default()
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "key": "EX",
                "name": "Example",
                "leadAccountId": "5b10a",
                "projectTypeKey": "software",
                "categoryId": 10120
            })
        );
    }

    #[test]
    fn test_parse_role_actors() {
        let json = r#"{"id": 10360, "name": "Developers", "actors": [
            {"id": 10240, "displayName": "jira-developers", "type": "atlassian-group-role-actor", "name": "jira-developers"}
        ]}"#;
        let role: ProjectRole = serde_json::from_str(json).unwrap();
        assert_eq!(role.actors[0].actor_type.as_deref(), Some("atlassian-group-role-actor"));
    }
}
