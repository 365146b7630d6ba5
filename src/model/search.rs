//! JQL search, JQL parsing, labels, watchers and votes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::issue::Issue;
use super::user::User;

/// Search results.
///
/// Returned by `GET` and `POST /rest/api/{2|3}/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<B> {
    #[serde(default)]
    pub expand: Option<String>,
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub issues: Vec<Issue<B>>,
    #[serde(default)]
    pub warning_messages: Vec<String>,
    #[serde(default)]
    pub names: Option<Map<String, Value>>,
}

impl<B> SearchPage<B> {
    /// Check if there are more pages of results.
    pub fn has_more(&self) -> bool {
        self.start_at + (self.issues.len() as u32) < self.total
    }
}

/// Body of `POST /rest/api/3/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchPayload {
    pub jql: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    pub start_at: u32,
    pub max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_query: Option<String>,
}

/// Body of `POST /rest/api/3/jql/parse`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct JqlQueries<'a> {
    pub queries: &'a [String],
}

/// Returned by `POST /rest/api/3/jql/parse`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedQueries {
    #[serde(default)]
    pub queries: Vec<ParsedQuery>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    #[serde(default)]
    pub query: String,
    /// The abstract syntax tree, absent when the query has errors.
    #[serde(default)]
    pub structure: Option<Value>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ParsedQuery {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Returned by `GET /rest/api/3/issue/{issueIdOrKey}/watchers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueWatchers {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub is_watching: bool,
    #[serde(default)]
    pub watch_count: i64,
    #[serde(default)]
    pub watchers: Vec<User>,
}

/// Returned by `GET /rest/api/3/issue/{issueIdOrKey}/votes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueVotes {
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub has_voted: bool,
    #[serde(default)]
    pub voters: Vec<User>,
}
