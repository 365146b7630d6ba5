//! Typed bindings for the Jira Cloud platform REST API.
//!
//! Every service holds a shared [`Connector`](crate::api::Connector) and the
//! [`ApiVersion`](crate::api::ApiVersion) it targets. Operations check their
//! required identifiers, build a `rest/api/{2|3}/...` endpoint, hand the
//! request to the connector and decode the answer. Connector errors come back
//! unchanged inside [`Error::Api`](crate::error::Error::Api).

pub mod application_role;
pub mod attachment;
pub mod audit;
pub mod comment;
pub mod dashboard;
pub mod field;
pub mod field_configuration;
pub mod field_context;
pub mod field_context_option;
pub mod filter;
pub mod filter_share;
pub mod group;
pub mod issue;
pub mod issue_link;
pub mod issue_link_type;
pub mod issue_type;
pub mod issue_type_scheme;
pub mod jql;
pub mod label;
pub mod metadata;
pub mod myself;
pub mod permission;
pub mod permission_grant;
pub mod permission_scheme;
pub mod priority;
pub mod project;
pub mod project_category;
pub mod project_component;
pub mod project_role;
pub mod project_type;
pub mod project_version;
pub mod remote_link;
pub mod resolution;
pub mod screen;
pub mod screen_scheme;
pub mod screen_tab;
pub mod screen_tab_field;
pub mod search;
pub mod server;
pub mod task;
pub mod user;
pub mod user_search;
pub mod vote;
pub mod watcher;
pub mod worklog;

pub use application_role::ApplicationRoleService;
pub use attachment::AttachmentService;
pub use audit::AuditService;
pub use comment::{CommentAdfService, CommentRichTextService, CommentService};
pub use dashboard::DashboardService;
pub use field::FieldService;
pub use field_configuration::FieldConfigurationService;
pub use field_context::FieldContextService;
pub use field_context_option::FieldContextOptionService;
pub use filter::FilterService;
pub use filter_share::FilterShareService;
pub use group::GroupService;
pub use issue::{IssueAdfService, IssueRichTextService, IssueService};
pub use issue_link::{IssueLinkAdfService, IssueLinkRichTextService, IssueLinkService};
pub use issue_link_type::IssueLinkTypeService;
pub use issue_type::IssueTypeService;
pub use issue_type_scheme::IssueTypeSchemeService;
pub use jql::JqlService;
pub use label::LabelService;
pub use metadata::MetadataService;
pub use myself::MySelfService;
pub use permission::PermissionService;
pub use permission_grant::PermissionGrantService;
pub use permission_scheme::PermissionSchemeService;
pub use priority::PriorityService;
pub use project::ProjectService;
pub use project_category::ProjectCategoryService;
pub use project_component::ProjectComponentService;
pub use project_role::ProjectRoleService;
pub use project_type::ProjectTypeService;
pub use project_version::ProjectVersionService;
pub use remote_link::RemoteLinkService;
pub use resolution::ResolutionService;
pub use screen::ScreenService;
pub use screen_scheme::ScreenSchemeService;
pub use screen_tab::ScreenTabService;
pub use screen_tab_field::ScreenTabFieldService;
pub use search::{SearchAdfService, SearchRichTextService, SearchService};
pub use server::ServerService;
pub use task::TaskService;
pub use user::UserService;
pub use user_search::UserSearchService;
pub use vote::VoteService;
pub use watcher::WatcherService;
pub use worklog::{WorklogAdfService, WorklogRichTextService, WorklogService};
