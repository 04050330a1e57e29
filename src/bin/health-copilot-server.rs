// ABOUTME: Server binary for the Health Copilot dashboard API
// ABOUTME: Loads configuration, initializes logging and providers, then serves HTTP until signalled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Health Copilot Contributors

//! # Health Copilot Server Binary
//!
//! Starts the dashboard API. All settings come from the environment; the flags
//! below override the listen address.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use health_copilot::config::ServerConfig;
use health_copilot::logging;
use health_copilot::resources::ServerResources;
use health_copilot::server;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "health-copilot-server")]
#[command(about = "Health Copilot - personal health dashboard API")]
pub struct Args {
    /// Override HTTP port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    info!("Starting Health Copilot API");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(config)?);

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
