//! Bank Account Service
//!
//! Serves a single lock-free bank account over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --port 3000
//! cargo run -- --host 127.0.0.1 --port 3000 --workers 4 --log-level debug
//! ```
//!
//! The account lives in memory for the life of the process; see the `http`
//! module for the `/account` resource.
//!
//! # Exit Codes
//!
//! - 0: Clean shutdown (Ctrl-C)
//! - 1: Error (invalid log filter, address in use, server failure, etc.)

use anyhow::{Context, Result};
use bank_account::core::AccountSlot;
use bank_account::{cli, http};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = cli::parse_args();
    init_logging(&args.log_level)?;

    let config = args.to_server_config();
    let runtime = config
        .build_runtime()
        .context("Failed to create tokio runtime")?;

    runtime.block_on(run(config))
}

async fn run(config: http::ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.addr()))?;
    tracing::info!(
        "Listening on {} with {} workers",
        listener.local_addr()?,
        config.workers
    );

    let slot = Arc::new(AccountSlot::new());
    http::serve(listener, slot, shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Log to stderr; `RUST_LOG` takes precedence over `--log-level`
fn init_logging(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("Invalid log filter `{default_filter}`"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
