//! Boot: logging init, config load, store construction.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::AccessLogConfig;
use crate::store::RecordStore;

/// Initialise the tracing / logging subsystem. Output goes to stderr so
/// query results on stdout stay machine-readable.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "accesslog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Validate config and ingest every log file it points at.
pub fn boot(config: &AccessLogConfig) -> Result<RecordStore> {
    config.validate().context("Invalid configuration")?;
    info!(
        "Loading access logs from {} (extension: {})",
        config.log_dir.display(),
        config.suffix()
    );

    let (store, _stats) = RecordStore::load(config).context("Failed to ingest access logs")?;
    Ok(store)
}
