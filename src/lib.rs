//! Typed service bindings for the Jira Cloud platform REST API, v2 and v3.
//!
//! A [`Jira`] facade (or any service constructed directly) sits on top of a
//! [`Connector`], which builds and executes HTTP requests. [`JiraClient`] is
//! the reqwest-backed connector; tests and embedders can supply their own.
//!
//! Resources carrying rich text come in two flavours: `*AdfService` for
//! Atlassian Document Format bodies (API v3) and `*RichTextService` for
//! wiki-markup strings (API v2).

pub mod api;
pub mod config;
pub mod error;
pub mod jira;
pub mod logging;
pub mod model;
pub mod service;

#[cfg(test)]
mod test_support;

pub use api::{ApiError, ApiVersion, Auth, Connector, JiraClient, ResponseScheme};
pub use error::{Error, Result};
pub use jira::Jira;
