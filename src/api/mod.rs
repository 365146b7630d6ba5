//! Transport layer: the connector seam, its reqwest implementation and
//! supporting types.

pub mod auth;
mod client;
mod connector;
pub mod error;
mod query;
mod version;

pub use auth::Auth;
pub use client::{JiraClient, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, TOKEN_ENV_VAR};
pub use connector::{json_body, Connector, Request, ResponseScheme, JSON_CONTENT_TYPE};
pub use error::ApiError;
pub use query::Query;
pub use version::ApiVersion;
