//! Issue links with an ADF comment (API v3).

use crate::model::AdfNode;

use super::IssueLinkService;

pub type IssueLinkAdfService = IssueLinkService<AdfNode>;
