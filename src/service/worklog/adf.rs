//! Worklogs with Atlassian Document Format comments (API v3).

use crate::model::AdfNode;

use super::WorklogService;

/// Worklog operations whose comments are ADF documents.
pub type WorklogAdfService = WorklogService<AdfNode>;
