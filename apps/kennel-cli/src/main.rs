//! # Kennel CLI
//!
//! Runs a batch of front-desk commands against one in-memory engine.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          kennel (binary)                                │
//! │                                                                         │
//! │  env ──► CliConfig ──► SharedEngine                                     │
//! │                             ▲                                           │
//! │  file | stdin ──► [Command] ┴──► one JSON Response per line (stdout)    │
//! │                                                                         │
//! │  tracing ──► stderr (compact, or JSON with KENNEL_LOG_JSON=true)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```text
//! kennel requests.json
//! cat requests.json | kennel
//! ```

mod commands;
mod config;
mod error;
mod logger;

use anyhow::Context;
use kennel_core::SharedEngine;
use tokio::io::AsyncReadExt;
use tracing::info;

use crate::commands::{run_batch, Command};
use crate::config::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::load().context("loading configuration")?;
    logger::init_logging(config.log_json);

    info!(
        dog_spaces = config.dog_spaces,
        cat_spaces = config.cat_spaces,
        "Configuration loaded"
    );

    let source = std::env::args().nth(1);
    let input = read_input(source.as_deref()).await?;
    let commands: Vec<Command> =
        serde_json::from_str(&input).context("parsing command batch")?;
    info!(count = commands.len(), "Command batch parsed");

    let shared = SharedEngine::new(config.engine_config());
    for response in run_batch(&shared, commands) {
        println!("{}", serde_json::to_string(&response)?);
    }

    let snapshot = shared.with_engine(|engine| engine.state());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    info!(
        bookings = snapshot.bookings_count,
        queued = snapshot.queue_length,
        "Batch complete"
    );

    Ok(())
}

/// Reads the batch from `path`, or stdin when no path (or `-`) is given.
async fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != "-" => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {path}")),
        _ => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
