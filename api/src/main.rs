//! SimpleCICD demo API server

use clap::Parser;
use simplecicd_core::prelude::*;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

/// Minimal demo web service for verifying CI/CD secret injection
#[derive(Debug, Parser)]
#[command(name = "simplecicd", version, about)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on (overrides configuration)
    #[arg(short, long)]
    listen: Option<SocketAddr>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Load configuration
    let config = match ServerConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Override config with CLI args
    let config = config.with_overrides(args.listen);

    info!("Starting SimpleCICD server on {}", config.listen);

    if let Err(e) = simplecicd_api::serve(config).await {
        error!("Server failed: {}", e);
        process::exit(1);
    }
}
