//! Issues and their fields.
//!
//! Rich-text fields are generic over the body type `B`: API v3 uses
//! [`AdfNode`](super::AdfNode) documents and API v2 plain wiki-markup
//! `String`s. The aliases at the bottom of this file name both surfaces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::adf::AdfNode;
use super::comment::CommentPage;
use super::issue_link::{IssueLink, LinkedIssue};
use super::project::ProjectRef;
use super::user::User;
use super::worklog::WorklogPage;

/// A Jira issue.
///
/// Returned by `GET /rest/api/{2|3}/issue/{issueIdOrKey}` or as part of
/// search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue<B> {
    /// The issue ID.
    #[serde(default)]
    pub id: String,
    /// The issue key (e.g., "PROJ-123").
    #[serde(default)]
    pub key: String,
    /// URL of the issue resource.
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    /// Expand options that include additional issue details.
    #[serde(default)]
    pub expand: Option<String>,
    /// The issue fields.
    #[serde(default)]
    pub fields: Option<IssueFields<B>>,
    /// Rendered HTML of the fields (`expand=renderedFields`).
    #[serde(default)]
    pub rendered_fields: Option<Map<String, Value>>,
    /// Display names of the fields (`expand=names`).
    #[serde(default)]
    pub names: Option<Map<String, Value>>,
    /// Available transitions (`expand=transitions`).
    #[serde(default)]
    pub transitions: Vec<IssueTransition>,
    /// Change history (`expand=changelog`).
    #[serde(default)]
    pub changelog: Option<Value>,
}

impl<B> Issue<B> {
    /// The issue summary, if the field was returned.
    pub fn summary(&self) -> Option<&str> {
        self.fields.as_ref()?.summary.as_deref()
    }

    /// The status name, if the field was returned.
    pub fn status(&self) -> Option<&str> {
        self.fields.as_ref()?.status.as_ref().map(|s| s.name.as_str())
    }

    /// The assignee display name, if assigned.
    pub fn assignee(&self) -> Option<&str> {
        self.fields
            .as_ref()?
            .assignee
            .as_ref()?
            .display_name
            .as_deref()
    }

    /// A custom field value by ID (`customfield_10016`).
    pub fn custom_field(&self, id: &str) -> Option<&Value> {
        self.fields.as_ref()?.custom_fields.get(id)
    }
}

impl Issue<AdfNode> {
    /// The description rendered as plain text.
    pub fn description_text(&self) -> String {
        self.fields
            .as_ref()
            .and_then(|f| f.description.as_ref())
            .map(AdfNode::to_plain_text)
            .unwrap_or_default()
    }
}

/// Issue fields.
///
/// Used both in responses and in create/update payloads; unset fields are
/// omitted when serializing. Fields Jira reports that have no dedicated
/// member (custom fields, app fields) land in `custom_fields`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueFields<B> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<B>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<B>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuetype: Option<IssueTypeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<LinkedIssue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<NamedRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fix_versions: Vec<NamedRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<NamedRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issuelinks: Vec<IssueLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<LinkedIssue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentPage<B>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worklog: Option<WorklogPage<B>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timetracking: Option<TimeTracking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<NamedRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duedate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolutiondate: Option<String>,
    /// Every other field, keyed by field ID.
    #[serde(flatten)]
    pub custom_fields: Map<String, Value>,
}

/// A reference to an issue type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtask: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// A reference by ID and/or name (priority, component, version, resolution, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
}

impl NamedRef {
    pub fn id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn name(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }
}

/// Issue status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_category: Option<StatusCategory>,
}

/// Status category (groups statuses into to-do, in-progress, done).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCategory {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color_name: Option<String>,
}

/// Time tracking estimates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTracking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_estimate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_estimate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_estimate_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_estimate_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent_seconds: Option<i64>,
}

/// Body of create, update and transition requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssuePayload<B> {
    pub fields: IssueFields<B>,
    #[serde(skip_serializing_if = "UpdateOperations::is_empty")]
    pub update: UpdateOperations,
}

impl<B> IssuePayload<B> {
    pub fn new(fields: IssueFields<B>) -> Self {
        Self {
            fields,
            update: UpdateOperations::default(),
        }
    }

    /// Merge custom field values into `fields`.
    pub fn merge_custom_fields(&mut self, custom_fields: &CustomFields) {
        for (id, value) in &custom_fields.fields {
            self.fields.custom_fields.insert(id.clone(), value.clone());
        }
    }

    /// Merge update operations into `update`.
    pub fn merge_operations(&mut self, operations: &UpdateOperations) {
        for (field, ops) in &operations.fields {
            self.update
                .fields
                .entry(field.clone())
                .or_default()
                .extend(ops.iter().cloned());
        }
    }
}

/// Custom field values keyed by field ID, in the shapes Jira expects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFields {
    fields: Map<String, Value>,
}

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// A raw value.
    pub fn raw(mut self, id: &str, value: Value) -> Self {
        self.fields.insert(id.to_string(), value);
        self
    }

    /// A number field.
    pub fn number(self, id: &str, value: f64) -> Self {
        self.raw(id, Value::from(value))
    }

    /// A single-line text field.
    pub fn text(self, id: &str, value: &str) -> Self {
        self.raw(id, Value::from(value))
    }

    /// A date (`YYYY-MM-DD`) or date-time field.
    pub fn date(self, id: &str, value: &str) -> Self {
        self.raw(id, Value::from(value))
    }

    /// A single-select field, by option value.
    pub fn select(self, id: &str, option: &str) -> Self {
        self.raw(id, serde_json::json!({ "value": option }))
    }

    /// A multi-select field, by option values.
    pub fn multi_select(self, id: &str, options: &[&str]) -> Self {
        let values = options
            .iter()
            .map(|option| serde_json::json!({ "value": option }))
            .collect::<Vec<_>>();
        self.raw(id, Value::Array(values))
    }

    /// A cascading select field: parent option and optional child option.
    pub fn cascading(self, id: &str, parent: &str, child: Option<&str>) -> Self {
        let mut value = serde_json::json!({ "value": parent });
        if let Some(child) = child {
            value["child"] = serde_json::json!({ "value": child });
        }
        self.raw(id, value)
    }

    /// A single user picker.
    pub fn user(self, id: &str, account_id: &str) -> Self {
        self.raw(id, serde_json::json!({ "accountId": account_id }))
    }

    /// A multi user picker.
    pub fn users(self, id: &str, account_ids: &[&str]) -> Self {
        let values = account_ids
            .iter()
            .map(|account_id| serde_json::json!({ "accountId": account_id }))
            .collect::<Vec<_>>();
        self.raw(id, Value::Array(values))
    }

    /// A labels-style field.
    pub fn labels(self, id: &str, labels: &[&str]) -> Self {
        self.raw(id, serde_json::json!(labels))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.fields.get(id)
    }
}

/// The `update` block of an issue edit: per field, a list of
/// `{"<operation>": value}` entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UpdateOperations {
    fields: BTreeMap<String, Vec<Value>>,
}

impl UpdateOperations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `operation` (`add`, `remove`, `set`, `edit`, `copy`) on `field`.
    pub fn push(mut self, field: &str, operation: &str, value: impl Into<Value>) -> Self {
        let mut entry = Map::new();
        entry.insert(operation.to_string(), value.into());
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(Value::Object(entry));
        self
    }

    pub fn add(self, field: &str, value: impl Into<Value>) -> Self {
        self.push(field, "add", value)
    }

    pub fn remove(self, field: &str, value: impl Into<Value>) -> Self {
        self.push(field, "remove", value)
    }

    pub fn set(self, field: &str, value: impl Into<Value>) -> Self {
        self.push(field, "set", value)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Response of `POST /rest/api/3/issue`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreated {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub key: String,
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
}

/// Body of `POST /rest/api/3/issue/bulk`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueBulkPayload<B> {
    pub issue_updates: Vec<IssuePayload<B>>,
}

/// Response of `POST /rest/api/3/issue/bulk`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueBulkCreated {
    #[serde(default)]
    pub issues: Vec<IssueCreated>,
    #[serde(default)]
    pub errors: Vec<IssueBulkError>,
}

/// A failed element of a bulk create.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueBulkError {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub failed_element_number: u32,
    #[serde(default)]
    pub element_errors: Option<Value>,
}

/// Transitions available for an issue.
///
/// Returned by `GET /rest/api/3/issue/{issueIdOrKey}/transitions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssueTransitions {
    #[serde(default)]
    pub expand: Option<String>,
    #[serde(default)]
    pub transitions: Vec<IssueTransition>,
}

/// A workflow transition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTransition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub to: Option<StatusRef>,
    #[serde(default)]
    pub has_screen: bool,
    #[serde(default)]
    pub is_global: bool,
    #[serde(default)]
    pub is_initial: bool,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub is_conditional: bool,
    #[serde(default)]
    pub fields: Option<Map<String, Value>>,
}

/// Extra data sent along with a transition.
#[derive(Debug, Clone, Default)]
pub struct IssueMoveOptions<B> {
    pub fields: Option<IssueFields<B>>,
    pub custom_fields: Option<CustomFields>,
    pub operations: Option<UpdateOperations>,
}

/// Body of `POST /rest/api/3/issue/{issueIdOrKey}/transitions`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct IssueTransitionPayload<B> {
    pub transition: NamedRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<IssueFields<B>>,
    #[serde(skip_serializing_if = "UpdateOperations::is_empty")]
    pub update: UpdateOperations,
}

/// Body of `POST /rest/api/3/issue/{issueIdOrKey}/notify`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueNotifyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NotifyRecipients>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrict: Option<NotifyRestriction>,
}

/// Who receives an issue notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyRecipients {
    pub reporter: bool,
    pub assignee: bool,
    pub watchers: bool,
    pub voters: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<NamedRef>,
}

/// Restricts notification recipients to groups or permissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NotifyRestriction {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<NamedRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Value>,
}

/// Filters for `GET /rest/api/3/issue/createmeta`.
#[derive(Debug, Clone, Default)]
pub struct CreateMetaOptions {
    pub project_ids: Vec<String>,
    pub project_keys: Vec<String>,
    pub issue_type_ids: Vec<String>,
    pub issue_type_names: Vec<String>,
    pub expand: Vec<String>,
}

/// An issue with ADF rich-text fields (API v3).
pub type IssueAdf = Issue<AdfNode>;
/// An issue with wiki-markup rich-text fields (API v2).
pub type IssueRichText = Issue<String>;
