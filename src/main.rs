//! `jira-rest`: a small command-line front end over the service bindings.
//!
//! Every command prints the decoded response as pretty JSON on stdout.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, instrument};

use jira_rest::api::auth;
use jira_rest::config::{Config, Profile};
use jira_rest::model::ProjectSearchOptions;
use jira_rest::{ApiVersion, Jira, JiraClient};

#[derive(Parser)]
#[command(name = "jira-rest")]
#[command(about = "Query Jira Cloud through its REST API")]
#[command(version)]
struct Cli {
    /// Profile to use instead of the configured default
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// Override the profile's API version ("2" or "3")
    #[arg(long = "api-version", global = true)]
    api_version: Option<ApiVersion>,

    /// Mirror logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a profile and store its API token in the OS keyring
    Login {
        #[arg(long)]
        name: String,
        /// Site root, e.g. https://company.atlassian.net
        #[arg(long)]
        url: String,
        #[arg(long)]
        email: String,
        /// Make this the default profile
        #[arg(long)]
        default: bool,
    },
    /// Show site version and deployment information
    ServerInfo,
    /// Show the authenticated user
    Myself,
    /// Show one issue
    Issue {
        key: String,
        /// Fields to return, comma separated
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
    },
    /// Search projects
    Projects {
        #[arg(short, long)]
        query: Option<String>,
        #[arg(long, default_value_t = 50)]
        max_results: u32,
    },
    /// List dashboards
    Dashboards {
        #[arg(long, default_value_t = 0)]
        start_at: u32,
        #[arg(long, default_value_t = 50)]
        max_results: u32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = jira_rest::logging::init(cli.verbose)?;

    let result = run(cli).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Command failed");
    }
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Login {
            name,
            url,
            email,
            default,
        } => {
            let mut config = Config::load_unvalidated().context("loading configuration")?;
            login(&mut config, name, url, email, cli.api_version, default)
        }
        command => {
            let config = Config::load().context("loading configuration")?;
            let profile = config.resolve_profile(cli.profile.as_deref()).context(
                "no usable profile; run `jira-rest login` first or pass --profile",
            )?;
            let version = cli.api_version.unwrap_or(profile.api_version);
            let client = JiraClient::from_profile(profile, &config.settings)?;
            query(&Jira::new(client, version), command).await
        }
    }
}

async fn query(jira: &Jira, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::ServerInfo => print_json(&jira.server().info().await?),
        Commands::Myself => print_json(&jira.myself().details(&[]).await?),
        Commands::Issue { key, fields } => match jira.version() {
            ApiVersion::V3 => print_json(&jira.issue_adf().get(&key, &fields, &[]).await?),
            ApiVersion::V2 => print_json(&jira.issue_rich_text().get(&key, &fields, &[]).await?),
        },
        Commands::Projects { query, max_results } => {
            let options = ProjectSearchOptions {
                query,
                ..ProjectSearchOptions::default()
            };
            print_json(&jira.project().search(&options, 0, max_results).await?)
        }
        Commands::Dashboards {
            start_at,
            max_results,
        } => print_json(&jira.dashboard().gets(start_at, max_results).await?),
        Commands::Login { .. } => bail!("login does not query Jira"),
    }
}

#[instrument(skip(config, url, email))]
fn login(
    config: &mut Config,
    name: String,
    url: String,
    email: String,
    api_version: Option<ApiVersion>,
    default: bool,
) -> anyhow::Result<()> {
    let mut profile = Profile::new(name, url, email);
    if let Some(version) = api_version {
        profile.api_version = version;
    }
    profile.validate()?;

    let token = read_token()?;
    if token.is_empty() {
        bail!("an API token is required");
    }
    auth::store_token(&profile.name, &token)?;

    let name = profile.name.clone();
    config.upsert_profile(profile)?;
    if default || !config.has_default_profile() {
        config.set_default_profile(&name)?;
    }
    config.save()?;

    info!(profile = %name, "Profile saved");
    eprintln!("Saved profile '{}'", name);
    Ok(())
}

/// The token from `JIRA_API_TOKEN`, or one line from stdin.
fn read_token() -> anyhow::Result<String> {
    if let Ok(token) = std::env::var(jira_rest::api::TOKEN_ENV_VAR) {
        return Ok(token.trim().to_string());
    }

    eprint!("API token: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
