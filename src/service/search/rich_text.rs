//! Search results with wiki-markup bodies (API v2).

use super::SearchService;

pub type SearchRichTextService = SearchService<String>;
