//! Tracing setup for the `jira-rest` binary.
//!
//! The library itself never installs a subscriber. The binary writes
//! structured logs to a daily rolling file so stdout stays clean JSON, and
//! mirrors them to stderr when `--verbose` is given. `RUST_LOG` overrides the
//! default filter.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "jira_rest=info,warn";

const LOG_FILE_PREFIX: &str = "jira-rest.log";

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background log writer.
///
/// # Errors
///
/// Fails when the log directory cannot be determined or created, or when a
/// global subscriber is already set.
pub fn init(verbose: bool) -> anyhow::Result<WorkerGuard> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(stderr_layer)
        .with(filter)
        .try_init()?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "Logging initialised"
    );

    Ok(guard)
}

fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("jira-rest").join("logs"))
}

/// Where log files are written, for display to users.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        let dir = log_directory().unwrap();
        assert!(dir.ends_with("jira-rest/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
