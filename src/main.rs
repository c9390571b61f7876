//! Transform Service
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net::Listener ──▶ net::connection ──▶ http middleware
//!                                                              │
//!                     request ID → access log → recovery → timeouts
//!                                                              │
//!                                                              ▼
//!     Client Response                                  routing table
//!     ◀────────────── plain text ◀── transform ◀────── /ping /echo
//!                                                      /reverse /skip_odd
//! ```

use std::path::PathBuf;

use clap::Parser;
use transform_service::config::{load_config, Overrides};
use transform_service::http::server::MAX_CONNECTIONS;
use transform_service::lifecycle::signals;
use transform_service::net::Listener;
use transform_service::{HttpServer, Logger, Shutdown};

#[derive(Parser)]
#[command(name = "transform-service")]
#[command(about = "HTTP service that echoes, reverses and thins request bodies", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:1423.
    #[arg(short, long)]
    addr: Option<String>,

    /// Log format: "json" or "text".
    #[arg(short, long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // An unknown log format or bad address stops the process here.
    let config = load_config(
        cli.config.as_deref(),
        Overrides {
            bind_address: cli.addr,
            log_format: cli.log_format,
        },
    )?;

    let logger = Logger::stdout(config.log_format);
    logger.in_scope(|| {
        tracing::info!(
            bind_address = %config.bind_address,
            log_format = %config.log_format,
            "Configuration loaded"
        )
    });

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone(), logger.clone());

    let listener = Listener::bind(config.bind_address, MAX_CONNECTIONS).await?;

    let server = HttpServer::new(logger.clone());
    server.run(listener, shutdown.subscribe()).await?;

    logger.in_scope(|| tracing::info!("Shutdown complete"));
    Ok(())
}
