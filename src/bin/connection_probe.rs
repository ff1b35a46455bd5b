//! Resolves one connection profile and prints a redacted view of it.
//!
//! Usage:
//!
//! ```text
//! connection_probe <settings-path> <connection-id>
//! ```
//!
//! The settings file is a JSON [`ProbeSettings`] document. Profiles are
//! looked up in the environment first, then in the configured connections
//! file. Passwords are masked in the output.

use camino::Utf8PathBuf;
use hookwright::config::{ProbeSettings, SettingsError};
use hookwright::connection::ports::ConnectionStoreError;
use hookwright::hook::domain::ConfigurationError;
use hookwright::hook::services::resolve_profile;
use std::io::Write;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum ProbeError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Store(#[from] ConnectionStoreError),
    #[error(transparent)]
    Resolve(#[from] ConfigurationError),
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

fn main() -> Result<(), BoxError> {
    run(std::env::args()).map_err(Into::into)
}

fn run(args: impl Iterator<Item = String>) -> Result<(), ProbeError> {
    let (settings_path, connection_id) = parse_args(args)?;
    let settings = ProbeSettings::load(&settings_path)?;
    init_tracing(&settings);

    let store = settings.connections.build_store()?;
    let profile = resolve_profile(&store, &connection_id)?;
    info!(connection_id = %profile.id(), conn_type = %profile.conn_type(), "connection resolved");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{profile:#?}").map_err(ProbeError::Output)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(Utf8PathBuf, String), ProbeError> {
    let _program = args.next();
    let settings_path = args
        .next()
        .map(Utf8PathBuf::from)
        .ok_or_else(|| ProbeError::InvalidArgs("missing settings path argument".into()))?;
    let connection_id = args
        .next()
        .ok_or_else(|| ProbeError::InvalidArgs("missing connection id argument".into()))?;
    if let Some(extra) = args.next() {
        return Err(ProbeError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok((settings_path, connection_id))
}

fn init_tracing(settings: &ProbeSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
