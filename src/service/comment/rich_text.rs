//! Comments with wiki-markup bodies (API v2).

use super::CommentService;

/// Comment operations whose bodies are plain wiki-markup strings.
pub type CommentRichTextService = CommentService<String>;
