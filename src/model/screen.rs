//! Screens, screen tabs, tab fields and screen schemes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scope: Option<Value>,
}

/// A screen reached through a field, with the tab holding the field.
///
/// Returned by `GET /rest/api/3/field/{fieldId}/screens`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldScreen {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tab: Option<ScreenTab>,
}

/// Filters for `GET /rest/api/3/screens`.
#[derive(Debug, Clone, Default)]
pub struct ScreenSearchOptions {
    pub ids: Vec<i64>,
    pub query_string: Option<String>,
    /// `GLOBAL` or `TEMPLATE`.
    pub scope: Vec<String>,
    pub order_by: Option<String>,
}

/// Body of screen create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreenPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A field that can be placed on a screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenableField {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A tab of a screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenTab {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Body of tab create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct ScreenTabPayload<'a> {
    pub name: &'a str,
}

/// Body of `POST /rest/api/3/screens/{screenId}/tabs/{tabId}/fields`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScreenTabFieldPayload<'a> {
    pub field_id: &'a str,
}

/// Body of `POST /rest/api/3/screens/{screenId}/tabs/{tabId}/fields/{id}/move`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreenTabFieldMove {
    /// Move after this field ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// `Earlier`, `Later`, `First` or `Last`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// A screen scheme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenScheme {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub screens: Option<ScreenTypes>,
    #[serde(default)]
    pub issue_type_screen_schemes: Option<Value>,
}

/// Screen IDs per issue operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenTypes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create: Option<i64>,
}

/// Filters for `GET /rest/api/3/screenscheme`.
#[derive(Debug, Clone, Default)]
pub struct ScreenSchemeSearchOptions {
    pub ids: Vec<i64>,
    pub query_string: Option<String>,
    pub order_by: Option<String>,
    pub expand: Vec<String>,
}

/// Body of screen scheme create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreenSchemePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screens: Option<ScreenTypes>,
}

/// Response of `POST /rest/api/3/screenscheme`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewScreenScheme {
    #[serde(default)]
    pub id: i64,
}
