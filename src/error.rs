//! Crate-wide error type.
//!
//! Every service operation returns [`Error`]. Missing required arguments are
//! reported with a dedicated unit variant before any request is built, while
//! anything the [`Connector`](crate::api::Connector) reports is carried through
//! unchanged in [`Error::Api`].

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// The main error type for jira-rest operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors produced by the connector (transport, HTTP status, decoding).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("jira: no api version provided")]
    NoVersionProvided,
    #[error("jira: invalid api version '{0}', expected \"2\" or \"3\"")]
    InvalidVersion(String),

    #[error("jira: no application role key set")]
    NoApplicationRole,
    #[error("jira: no dashboard id set")]
    NoDashboardId,
    #[error("jira: no filter id set")]
    NoFilterId,
    #[error("jira: no share filter permission id set")]
    NoShareFilterPermissionId,
    #[error("jira: no share filter scope set")]
    NoShareFilterScope,
    #[error("jira: no group name set")]
    NoGroupName,
    #[error("jira: no account id set")]
    NoAccountId,
    #[error("jira: no account ids set")]
    NoAccountIds,

    #[error("jira: no issue key/id set")]
    NoIssueKeyOrId,
    #[error("jira: no transition id set")]
    NoTransitionId,
    #[error("jira: no issue payloads set")]
    NoIssuePayloads,
    #[error("jira: no comment id set")]
    NoCommentId,
    #[error("jira: no worklog id set")]
    NoWorklogId,
    #[error("jira: no worklog ids set")]
    NoWorklogIds,
    #[error("jira: no issue link id set")]
    NoIssueLinkId,
    #[error("jira: no link type id set")]
    NoLinkTypeId,
    #[error("jira: no remote link id set")]
    NoRemoteLinkId,
    #[error("jira: no remote link global id set")]
    NoRemoteLinkGlobalId,
    #[error("jira: no attachment id set")]
    NoAttachmentId,

    #[error("jira: no field id set")]
    NoFieldId,
    #[error("jira: no field context id set")]
    NoFieldContextId,
    #[error("jira: no field context option id set")]
    NoContextOptionId,
    #[error("jira: no field configuration id set")]
    NoFieldConfigurationId,
    #[error("jira: no field configuration name set")]
    NoFieldConfigurationName,

    #[error("jira: no issue type id set")]
    NoIssueTypeId,
    #[error("jira: no issue type ids set")]
    NoIssueTypes,
    #[error("jira: no issue type scheme id set")]
    NoIssueTypeSchemeId,

    #[error("jira: no permission keys set")]
    NoPermissionKeys,
    #[error("jira: no permission scheme id set")]
    NoPermissionSchemeId,
    #[error("jira: no permission grant id set")]
    NoPermissionGrantId,

    #[error("jira: no priority id set")]
    NoPriorityId,
    #[error("jira: no resolution id set")]
    NoResolutionId,

    #[error("jira: no project id set")]
    NoProjectId,
    #[error("jira: no project ids set")]
    NoProjects,
    #[error("jira: no project keys set")]
    NoProjectKeys,
    #[error("jira: no project id/key set")]
    NoProjectIdOrKey,
    #[error("jira: no project category id set")]
    NoProjectCategoryId,
    #[error("jira: no component id set")]
    NoComponentId,
    #[error("jira: no version id set")]
    NoVersionId,
    #[error("jira: no project role id set")]
    NoProjectRoleId,
    #[error("jira: no project type key set")]
    NoProjectTypeKey,

    #[error("jira: no screen id set")]
    NoScreenId,
    #[error("jira: no screen name set")]
    NoScreenName,
    #[error("jira: no screen tab id set")]
    NoScreenTabId,
    #[error("jira: no screen tab name set")]
    NoScreenTabName,
    #[error("jira: no screen scheme id set")]
    NoScreenSchemeId,

    #[error("jira: no task id set")]
    NoTaskId,
    #[error("jira: no jql queries set")]
    NoJqlQueries,
}

/// Result type for jira-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error was raised locally because a required argument was missing.
    ///
    /// Such errors are returned before anything is sent to Jira.
    pub fn is_missing_argument(&self) -> bool {
        !matches!(
            self,
            Error::Api(_) | Error::Config(_) | Error::InvalidVersion(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_transparent() {
        let err: Error = ApiError::NotFound("PROJ-123".to_string()).into();
        assert_eq!(err.to_string(), "Resource not found: PROJ-123");
        assert!(matches!(err, Error::Api(ApiError::NotFound(_))));
    }

    #[test]
    fn test_sentinel_messages() {
        assert_eq!(Error::NoDashboardId.to_string(), "jira: no dashboard id set");
        assert_eq!(Error::NoIssueKeyOrId.to_string(), "jira: no issue key/id set");
        assert_eq!(
            Error::InvalidVersion("4".to_string()).to_string(),
            "jira: invalid api version '4', expected \"2\" or \"3\""
        );
    }

    #[test]
    fn test_is_missing_argument() {
        assert!(Error::NoFieldId.is_missing_argument());
        assert!(Error::NoVersionProvided.is_missing_argument());
        assert!(!Error::Api(ApiError::RateLimited).is_missing_argument());
        assert!(!Error::Config(ConfigError::NoConfigDir).is_missing_argument());
        assert!(!Error::InvalidVersion("4".to_string()).is_missing_argument());
    }
}
