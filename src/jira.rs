//! The [`Jira`] facade.

use std::sync::Arc;

use crate::api::{ApiVersion, Connector, JiraClient};
use crate::config::{Profile, Settings};
use crate::error::Result;
use crate::service::*;

/// Entry point handing out services bound to one connector and API version.
///
/// Rich-text services ignore the facade version: `*_adf` services always
/// call API v3 and `*_rich_text` services API v2.
///
/// ```no_run
/// # async fn run() -> jira_rest::Result<()> {
/// use jira_rest::{ApiVersion, Jira, JiraClient};
///
/// let client = JiraClient::with_credentials("https://company.atlassian.net", "me@company.com", "token")?;
/// let jira = Jira::new(client, ApiVersion::V3);
/// let issue = jira.issue_adf().get("KP-1", &[], &[]).await?;
/// println!("{}", issue.summary().unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Jira {
    connector: Arc<dyn Connector>,
    version: ApiVersion,
}

macro_rules! services {
    ($($(#[$doc:meta])* $name:ident => $service:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self) -> $service {
                <$service>::new(self.connector.clone(), self.version)
            }
        )*
    };
}

macro_rules! surfaces {
    ($($(#[$doc:meta])* $name:ident => $service:ty, $version:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(&self) -> $service {
                <$service>::new(self.connector.clone(), $version)
            }
        )*
    };
}

impl Jira {
    pub fn new(connector: impl Connector + 'static, version: ApiVersion) -> Self {
        Self::with_connector(Arc::new(connector), version)
    }

    /// Share an existing connector, e.g. a test double.
    pub fn with_connector(connector: Arc<dyn Connector>, version: ApiVersion) -> Self {
        Self { connector, version }
    }

    /// A [`JiraClient`] built from a configuration profile, using the
    /// profile's API version.
    pub fn from_profile(profile: &Profile, settings: &Settings) -> Result<Self> {
        let client = JiraClient::from_profile(profile, settings)?;
        Ok(Self::new(client, profile.api_version))
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn connector(&self) -> Arc<dyn Connector> {
        self.connector.clone()
    }

    services! {
        application_role => ApplicationRoleService;
        attachment => AttachmentService;
        audit => AuditService;
        dashboard => DashboardService;
        field => FieldService;
        field_configuration => FieldConfigurationService;
        field_context => FieldContextService;
        field_context_option => FieldContextOptionService;
        filter => FilterService;
        filter_share => FilterShareService;
        group => GroupService;
        issue_link_type => IssueLinkTypeService;
        issue_type => IssueTypeService;
        issue_type_scheme => IssueTypeSchemeService;
        jql => JqlService;
        label => LabelService;
        metadata => MetadataService;
        myself => MySelfService;
        permission => PermissionService;
        permission_grant => PermissionGrantService;
        permission_scheme => PermissionSchemeService;
        priority => PriorityService;
        project => ProjectService;
        project_category => ProjectCategoryService;
        project_component => ProjectComponentService;
        project_role => ProjectRoleService;
        project_type => ProjectTypeService;
        project_version => ProjectVersionService;
        remote_link => RemoteLinkService;
        resolution => ResolutionService;
        screen => ScreenService;
        screen_scheme => ScreenSchemeService;
        screen_tab => ScreenTabService;
        screen_tab_field => ScreenTabFieldService;
        server => ServerService;
        task => TaskService;
        user => UserService;
        user_search => UserSearchService;
        vote => VoteService;
        watcher => WatcherService;
    }

    surfaces! {
        /// Issues with ADF rich text (API v3).
        issue_adf => IssueAdfService, ApiVersion::V3;
        /// Issues with wiki-markup rich text (API v2).
        issue_rich_text => IssueRichTextService, ApiVersion::V2;
        comment_adf => CommentAdfService, ApiVersion::V3;
        comment_rich_text => CommentRichTextService, ApiVersion::V2;
        worklog_adf => WorklogAdfService, ApiVersion::V3;
        worklog_rich_text => WorklogRichTextService, ApiVersion::V2;
        issue_link_adf => IssueLinkAdfService, ApiVersion::V3;
        issue_link_rich_text => IssueLinkRichTextService, ApiVersion::V2;
        search_adf => SearchAdfService, ApiVersion::V3;
        search_rich_text => SearchRichTextService, ApiVersion::V2;
    }
}
