//! Fields, custom field contexts and their options, field configurations.

use serde::{Deserialize, Serialize};

/// A system or custom field.
///
/// Returned by `GET /rest/api/3/field`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// The field ID (`summary`, `customfield_10000`, ...).
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub orderable: bool,
    #[serde(default)]
    pub navigable: bool,
    #[serde(default)]
    pub searchable: bool,
    /// Names usable in JQL.
    #[serde(default)]
    pub clause_names: Vec<String>,
    #[serde(default)]
    pub schema: Option<FieldSchema>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_locked: Option<bool>,
    #[serde(default)]
    pub searcher_key: Option<String>,
    #[serde(default)]
    pub screens_count: Option<i64>,
    #[serde(default)]
    pub contexts_count: Option<i64>,
}

/// The data type of a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default)]
    pub items: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub custom: Option<String>,
    #[serde(default)]
    pub custom_id: Option<i64>,
}

/// Body of `POST /rest/api/3/field`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Custom field type, e.g. `com.atlassian.jira.plugin.system.customfieldtypes:select`.
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searcher_key: Option<String>,
}

/// Filters for `GET /rest/api/3/field/search`.
#[derive(Debug, Clone, Default)]
pub struct FieldSearchOptions {
    /// `custom` or `system`.
    pub types: Vec<String>,
    pub ids: Vec<String>,
    pub query: Option<String>,
    pub order_by: Option<String>,
    pub expand: Vec<String>,
}

/// A custom field context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldContext {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_global_context: bool,
    #[serde(default)]
    pub is_any_issue_type: bool,
}

/// Filters for `GET /rest/api/3/field/{fieldId}/context`.
#[derive(Debug, Clone, Default)]
pub struct FieldContextOptions {
    pub is_any_issue_type: Option<bool>,
    pub is_global_context: Option<bool>,
    pub context_ids: Vec<i64>,
}

/// Body of field context create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldContextPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Create only; empty means a global context.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_ids: Vec<String>,
    /// Create only; empty means all issue types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issue_type_ids: Vec<String>,
}

/// The default value of a custom field context.
///
/// Jira discriminates the shape with `type` (`option.single`,
/// `option.multiple`, `option.cascading`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldContextDefaultValue {
    #[serde(rename = "type", default)]
    pub value_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cascading_option_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_ids: Vec<String>,
}

/// Body of `PUT /rest/api/3/field/{fieldId}/context/defaultValue`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldContextDefaultValues {
    pub default_values: Vec<FieldContextDefaultValue>,
}

/// The issue type a context applies to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeToContextMapping {
    #[serde(default)]
    pub context_id: String,
    #[serde(default)]
    pub issue_type_id: Option<String>,
    #[serde(default)]
    pub is_any_issue_type: Option<bool>,
}

/// The project a context applies to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextProjectMapping {
    #[serde(default)]
    pub context_id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub is_global_context: Option<bool>,
}

/// An option of a select-style custom field context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub value: String,
    /// Parent option, for cascading selects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_id: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// Body and response of option create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextOptions {
    #[serde(default)]
    pub options: Vec<ContextOption>,
}

/// Filters for `GET /rest/api/3/field/{fieldId}/context/{contextId}/option`.
#[derive(Debug, Clone, Default)]
pub struct ContextOptionFilter {
    pub option_id: Option<i64>,
    pub only_options: bool,
}

/// Body of `PUT /rest/api/3/field/{fieldId}/context/{contextId}/option/move`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextOptionOrder {
    pub custom_field_option_ids: Vec<String>,
    /// Move after this option.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// `First` or `Last`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// A field configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfiguration {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

/// Body of field configuration create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldConfigurationPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
