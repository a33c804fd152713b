//! Roster server entry point.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use roster::infrastructure::{http, logging};
use roster::ConfigLoader;

/// Employee directory façade over a remote employee store.
#[derive(Parser)]
#[command(name = "roster", version, about)]
struct Cli {
    /// Path to a YAML config file (replaces the .roster/ discovery chain).
    #[arg(long, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    logging::init(&config.logging);

    http::serve(config).await
}
