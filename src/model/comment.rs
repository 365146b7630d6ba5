//! Issue comments.

use serde::{Deserialize, Serialize};

use super::adf::AdfNode;
use super::user::User;

/// A comment on an issue. `B` is the body type (see [`super::issue`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment<B> {
    /// The comment ID.
    #[serde(default)]
    pub id: String,
    /// URL of the comment resource.
    #[serde(rename = "self", default)]
    pub self_url: Option<String>,
    /// The comment author.
    #[serde(default)]
    pub author: Option<User>,
    /// The comment body.
    #[serde(default)]
    pub body: Option<B>,
    /// Rendered HTML (`expand=renderedBody`).
    #[serde(default)]
    pub rendered_body: Option<String>,
    /// The last user to update the comment.
    #[serde(default)]
    pub update_author: Option<User>,
    /// When the comment was created.
    #[serde(default)]
    pub created: Option<String>,
    /// When the comment was last updated.
    #[serde(default)]
    pub updated: Option<String>,
    /// Who can see the comment.
    #[serde(default)]
    pub visibility: Option<Visibility>,
    /// Whether the comment is visible in Jira Service Desk.
    #[serde(default)]
    pub jsd_public: Option<bool>,
}

impl Comment<AdfNode> {
    /// The body rendered as plain text.
    pub fn body_text(&self) -> String {
        self.body
            .as_ref()
            .map(AdfNode::to_plain_text)
            .unwrap_or_default()
    }
}

/// A page of comments.
///
/// Returned by `GET /rest/api/3/issue/{issueIdOrKey}/comment` and embedded in
/// the `comment` issue field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPage<B> {
    #[serde(default)]
    pub start_at: u32,
    #[serde(default)]
    pub max_results: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub comments: Vec<Comment<B>>,
}

impl<B> CommentPage<B> {
    /// Check if there are more pages of results.
    pub fn has_more(&self) -> bool {
        self.start_at + (self.comments.len() as u32) < self.total
    }
}

/// Visibility restriction on a comment or worklog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Visibility {
    /// `group` or `role`.
    #[serde(rename = "type")]
    pub visibility_type: String,
    /// Group or role name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Group ID or role ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// Body of `POST /rest/api/3/issue/{issueIdOrKey}/comment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommentPayload<B> {
    pub body: B,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

impl<B> CommentPayload<B> {
    pub fn new(body: B) -> Self {
        Self {
            body,
            visibility: None,
        }
    }
}

/// A comment with an ADF body (API v3).
pub type CommentAdf = Comment<AdfNode>;
/// A comment with a wiki-markup body (API v2).
pub type CommentRichText = Comment<String>;
