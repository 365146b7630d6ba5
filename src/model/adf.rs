//! Atlassian Document Format (ADF).
//!
//! API v3 carries rich text (issue descriptions, comment bodies, worklog
//! comments) as a tree of ADF nodes rooted at a `doc` node. This module models
//! that tree and offers small builders plus a plain-text rendering.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node in an ADF document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdfNode {
    /// The node type (`doc`, `paragraph`, `text`, `mention`, ...).
    #[serde(rename = "type")]
    pub node_type: String,
    /// Document version, only set on the root `doc` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<AdfNode>,
    /// Text of a `text` node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Node attributes (heading level, mention id, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
    /// Text marks (`strong`, `em`, `link`, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<AdfMark>,
}

/// A formatting mark applied to a text node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdfMark {
    #[serde(rename = "type")]
    pub mark_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Map<String, Value>>,
}

impl AdfNode {
    /// An empty root document.
    pub fn doc() -> Self {
        Self {
            node_type: "doc".to_string(),
            version: Some(1),
            ..Self::default()
        }
    }

    /// A node of the given type without content.
    pub fn node(node_type: &str) -> Self {
        Self {
            node_type: node_type.to_string(),
            ..Self::default()
        }
    }

    /// A `text` leaf.
    pub fn text(text: &str) -> Self {
        Self {
            node_type: "text".to_string(),
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    /// A `paragraph` holding a single text node.
    pub fn paragraph(text: &str) -> Self {
        Self::node("paragraph").with_child(Self::text(text))
    }

    /// A root document made of one paragraph per line of `text`.
    pub fn from_plain_text(text: &str) -> Self {
        text.lines()
            .fold(Self::doc(), |doc, line| doc.with_child(Self::paragraph(line)))
    }

    /// Append a child node.
    pub fn append(&mut self, child: AdfNode) {
        self.content.push(child);
    }

    /// Append a child node, builder style.
    pub fn with_child(mut self, child: AdfNode) -> Self {
        self.append(child);
        self
    }

    /// Add a mark to this node, builder style.
    pub fn with_mark(mut self, mark_type: &str) -> Self {
        self.marks.push(AdfMark {
            mark_type: mark_type.to_string(),
            attrs: None,
        });
        self
    }

    /// Set an attribute, builder style.
    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attrs
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value.into());
        self
    }

    /// Convert the tree to plain text for display.
    ///
    /// Paragraphs and headings end with a newline, list items get a bullet,
    /// mentions render as `@name` and media nodes are skipped.
    pub fn to_plain_text(&self) -> String {
        let mut result = String::new();
        self.extract_text(&mut result);
        result.trim().to_string()
    }

    fn extract_children(&self, result: &mut String) {
        for child in &self.content {
            child.extract_text(result);
        }
    }

    fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.as_ref()?.get(key)?.as_str()
    }

    fn extract_text(&self, result: &mut String) {
        match self.node_type.as_str() {
            "text" => {
                if let Some(text) = &self.text {
                    result.push_str(text);
                }
            }
            "paragraph" | "heading" => {
                self.extract_children(result);
                if !result.ends_with('\n') && !result.is_empty() {
                    result.push('\n');
                }
            }
            "hardBreak" => result.push('\n'),
            "listItem" => {
                result.push_str("• ");
                self.extract_children(result);
            }
            "codeBlock" => {
                self.extract_children(result);
                if !result.ends_with('\n') {
                    result.push('\n');
                }
            }
            "blockquote" => {
                result.push_str("> ");
                self.extract_children(result);
            }
            "mention" => {
                if let Some(text) = self.attr_str("text") {
                    if !text.starts_with('@') {
                        result.push('@');
                    }
                    result.push_str(text);
                }
            }
            "emoji" => {
                if let Some(shortname) = self.attr_str("shortName") {
                    result.push_str(shortname);
                }
            }
            // no useful text representation
            "inlineCard" | "mediaGroup" | "mediaSingle" => {}
            _ => self.extract_children(result),
        }
    }
}
