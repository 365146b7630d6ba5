//! The paginated envelope shared by most Jira list endpoints.

use serde::{Deserialize, Serialize};

/// A page of `values`.
///
/// Returned by endpoints such as `GET /rest/api/3/field/search` or
/// `GET /rest/api/3/project/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// URL of this page.
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    /// URL of the next page, if any.
    #[serde(default)]
    pub next_page: Option<String>,
    /// Maximum results requested.
    #[serde(default)]
    pub max_results: u32,
    /// The index of the first result.
    #[serde(default)]
    pub start_at: u32,
    /// Total number of matching items.
    #[serde(default)]
    pub total: u32,
    /// Whether this is the last page.
    #[serde(default)]
    pub is_last: bool,
    /// The items.
    #[serde(default)]
    pub values: Vec<T>,
}

impl<T> Page<T> {
    /// Check if there are more pages of results.
    pub fn has_more(&self) -> bool {
        if self.is_last {
            return false;
        }
        self.start_at + (self.values.len() as u32) < self.total
    }

    /// Get the starting index for the next page.
    pub fn next_start(&self) -> u32 {
        self.start_at + self.values.len() as u32
    }
}
