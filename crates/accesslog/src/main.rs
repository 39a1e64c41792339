use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use accesslog::conf::AccessLogConfig;
use accesslog::runtime::{boot, report};

/// Answer questions about a directory of tab-separated access logs.
#[derive(Debug, Parser)]
#[command(name = "accesslog", version)]
struct Cli {
    /// Config file (TOML); defaults to $ACCESSLOG_CONFIG_FILE or ./accesslog.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log directory, overriding the config
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a query, e.g. `get ip for user = "Amigo"`
    Query { query: String },
    /// Print record, address, user, event and task totals
    Summary,
}

fn main() -> Result<()> {
    boot::init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AccessLogConfig::from_file(path)?.with_env_overrides(),
        None => AccessLogConfig::load()?,
    };
    if let Some(dir) = cli.dir {
        config.log_dir = dir;
    }

    let store = boot::boot(&config)?;

    let output = match cli.command {
        Command::Query { query } => {
            let result = store
                .execute(&query)
                .with_context(|| format!("Invalid query: {}", query))?;
            report::render_result(&result, cli.json)?
        }
        Command::Summary => report::render_summary(&report::Summary::from_store(&store), cli.json)?,
    };
    println!("{}", output);
    Ok(())
}
