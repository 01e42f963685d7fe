use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use ordinator_configuration::LoggingConfiguration;
use tracing::Level;
use tracing::event;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::prelude::*;

/// Directory of the log file. `ORDINATOR_LOG_DIR` wins over the configured
/// directory.
pub fn log_directory(logging_configuration: &LoggingConfiguration) -> PathBuf
{
    dotenvy::var("ORDINATOR_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| logging_configuration.directory.clone())
}

/// `TRACING_LEVEL` if it holds a valid directive, the configured level
/// otherwise.
pub fn env_filter(logging_configuration: &LoggingConfiguration) -> EnvFilter
{
    level_filter(
        dotenvy::var("TRACING_LEVEL").ok().as_deref(),
        logging_configuration,
    )
}

pub fn level_filter(
    tracing_level: Option<&str>,
    logging_configuration: &LoggingConfiguration,
) -> EnvFilter
{
    tracing_level
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(&logging_configuration.level))
}

/// Installs the JSON file layer. The returned guard flushes the
/// non-blocking writer when dropped, so it must live as long as `main`.
pub fn setup_logging(logging_configuration: &LoggingConfiguration) -> Result<WorkerGuard>
{
    let log_dir = log_directory(logging_configuration);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("could not create log directory {}", log_dir.display()))?;

    let file_appender =
        tracing_appender::rolling::never(&log_dir, &logging_configuration.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_filter(env_filter(logging_configuration));

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber was already installed")?;

    event!(
        Level::INFO,
        log_dir = %log_dir.display(),
        "starting logging"
    );
    Ok(guard)
}
