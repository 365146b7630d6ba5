//! Request and response models for the Jira REST API.
//!
//! Models follow Jira's JSON shapes field for field (camelCase on the wire).
//! Resources carrying rich text are generic over the body type so the same
//! definitions serve API v3 ([`AdfNode`] documents) and API v2 (wiki-markup
//! strings).

pub mod adf;
pub mod comment;
pub mod field;
pub mod filter;
pub mod issue;
pub mod issue_link;
pub mod issue_type;
pub mod page;
pub mod permission;
pub mod project;
pub mod screen;
pub mod search;
pub mod user;
pub mod workspace;
pub mod worklog;

pub use adf::{AdfMark, AdfNode};
pub use comment::{
    Comment, CommentAdf, CommentPage, CommentPayload, CommentRichText, Visibility,
};
pub use field::{
    ContextOption, ContextOptionFilter, ContextOptionOrder, ContextOptions,
    ContextProjectMapping, Field, FieldConfiguration, FieldConfigurationPayload, FieldContext,
    FieldContextDefaultValue, FieldContextDefaultValues, FieldContextOptions, FieldContextPayload,
    FieldPayload, FieldSchema, FieldSearchOptions, IssueTypeToContextMapping,
};
pub use filter::{
    Dashboard, DashboardPage, DashboardPayload, DashboardSearchOptions, Filter, FilterPayload,
    FilterSearchOptions, SharePermission, SharePermissionPayload, ShareScope,
};
pub use issue::{
    CreateMetaOptions, CustomFields, Issue, IssueAdf, IssueBulkCreated, IssueBulkError,
    IssueBulkPayload, IssueCreated, IssueFields, IssueMoveOptions, IssueNotifyOptions,
    IssuePayload, IssueRichText, IssueTransition, IssueTransitions, IssueTypeRef, NamedRef,
    NotifyRecipients, NotifyRestriction, StatusCategory, StatusRef, TimeTracking,
    UpdateOperations,
};
pub use issue_link::{
    IssueLink, IssueLinkFields, IssueLinks, LinkPayload, LinkType, LinkTypes, LinkedIssue,
    RemoteLink, RemoteLinkApplication, RemoteLinkIdentify, RemoteLinkObject,
};
pub use issue_type::{
    IssueType, IssueTypePayload, IssueTypeScheme, IssueTypeSchemeItem, IssueTypeSchemePayload,
    NewIssueTypeScheme, ProjectIssueTypeScheme,
};
pub use page::Page;
pub use permission::{
    Permission, PermissionCheckPayload, PermissionCheckResult, PermissionGrant,
    PermissionGrantPayload, PermissionGrants, PermissionHolder, PermissionScheme,
    PermissionSchemePayload, PermissionSchemes, Permissions, PermittedProject, PermittedProjects,
    ProjectPermissionCheck,
};
pub use project::{
    Component, ComponentCount, ComponentPayload, NewProject, NotificationScheme,
    NotificationSchemeEvent, Project, ProjectCategory, ProjectCategoryPayload,
    ProjectIssueTypeStatuses, ProjectPayload, ProjectRef, ProjectRole, ProjectRolePayload,
    ProjectSearchOptions, ProjectType, RoleActor, Version, VersionIssueCounts, VersionPayload,
    VersionSearchOptions, VersionUnresolvedIssues,
};
pub use screen::{
    FieldScreen, NewScreenScheme, Screen, ScreenPayload, ScreenScheme, ScreenSchemePayload,
    ScreenSchemeSearchOptions, ScreenSearchOptions, ScreenTab, ScreenTabFieldMove, ScreenTypes,
    ScreenableField,
};
pub use search::{IssueVotes, IssueWatchers, ParsedQueries, ParsedQuery, SearchPage};
pub use user::{
    AccountPayload, AvatarUrls, Group, GroupBulkOptions, GroupRef, NewUser, User, UserGroups,
    UserPermissionSearchOptions,
};
pub use workspace::{
    ApplicationRole, Attachment, AttachmentArchive, AttachmentArchiveEntry, AttachmentSettings,
    AuditChange, AuditItem, AuditRecord, AuditRecordOptions, AuditRecords, HealthCheck, Priority,
    Resolution, ServerInfo, TaskDetail,
};
pub use worklog::{
    ChangedWorklog, ChangedWorklogs, Worklog, WorklogAdf, WorklogOptions,
    WorklogPage, WorklogPayload, WorklogRichText,
};
