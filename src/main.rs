//! `roster` — serve the student records API.
//!
//! ```text
//! roster --port 8000
//! ROSTER_SEED_STUDENTS=false roster --json-logs
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use figment::providers::Serialized;
use serde::Serialize;

use roster::{Config, Server, StudentStore, api, telemetry};

#[derive(Parser, Serialize)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "In-memory student records over HTTP", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./roster.toml when present)
    #[arg(short, long)]
    #[serde(skip)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(short = 'H', long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    json_logs: bool,

    /// Start with an empty store instead of the demo students
    #[arg(long)]
    #[serde(skip)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let figment = Config::figment(cli.config.as_deref()).merge(Serialized::defaults(&cli));
    let mut config = Config::from_figment(&figment).context("loading configuration")?;
    if cli.no_seed {
        config.seed_students = false;
    }

    telemetry::init_logging(&config).context("installing logger")?;

    let store = if config.seed_students {
        StudentStore::seeded()
    } else {
        StudentStore::new()
    };
    tracing::info!(students = store.len(), "store ready");

    let server = Server::bind(config.bind_addr())
        .await
        .with_context(|| format!("binding {}", config.bind_addr()))?;
    server.serve(api::router(Arc::new(store))).await?;
    Ok(())
}
