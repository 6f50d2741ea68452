//! hash-redirect server.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!     Client Request     │  ┌─────────┐   ┌────────────┐   ┌─────────┐  │
//!     ───────────────────┼─▶│  Trace  │──▶│  redirect  │──▶│ static/ │  │
//!                        │  │  Layer  │   │ middleware │   │  index  │  │
//!                        │  └─────────┘   └─────┬──────┘   └─────────┘  │
//!     302 Location:      │                      │                       │
//!     <prefix>#<path>  ◀─┼──────────────────────┘                       │
//!                        │                                              │
//!                        │  config + watcher ──▶ ArcSwap<RedirectConfig> │
//!                        └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use hash_redirect::config::loader::load_config;
use hash_redirect::config::watcher::ConfigWatcher;
use hash_redirect::config::AppConfig;
use hash_redirect::observability::{logging, metrics};
use hash_redirect::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "hash-redirect")]
#[command(about = "Redirects full-page loads to a hash-routed single page app", long_about = None)]
struct Args {
    /// TOML configuration file; watched for changes.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);
    tracing::info!("hash-redirect v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        prefix = ?config.redirect.prefix,
        deny_patterns = config.redirect.disable_redirect.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Keep the watcher handle alive for the lifetime of the server.
    let (config_updates, _watcher) = match &args.config {
        Some(path) => {
            let (watcher, rx) = ConfigWatcher::new(path);
            match watcher.run() {
                Ok(handle) => (rx, Some(handle)),
                Err(e) => {
                    tracing::warn!(error = %e, "Config hot reload disabled");
                    (rx, None)
                }
            }
        }
        None => {
            let (_, rx) = mpsc::unbounded_channel();
            (rx, None)
        }
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.clone().trigger_on_signal());

    let server = HttpServer::new(config)?;
    server.run(listener, config_updates, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
