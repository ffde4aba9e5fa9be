//! Borne locator CLI server
//!
//! Headless station locator suitable for deployment as a systemd service,
//! Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/borne-locator/config.toml)
//! borne-locator
//!
//! # Custom config path
//! borne-locator --config /etc/borne-locator/config.toml
//!
//! # Override the port
//! borne-locator --port 8080
//!
//! # Validate config without starting
//! borne-locator --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use borne_locator::config::AppConfig;
use borne_locator::server::{init_tracing, ServerHandle, ServerOptions};

/// Borne locator: nearby and free EV charging station lookup.
#[derive(Parser, Debug)]
#[command(
    name = "borne-locator",
    version,
    about = "Nearby and free EV charging station locator",
    long_about = "Borne locator: read-only REST API answering which charging stations \
                  are near a point, free at an instant, or both.\n\n\
                  Default config: ~/.config/borne-locator/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "BORNE_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Seed demo stations and reservations into an empty database.
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(borne_locator::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            if cli.check {
                eprintln!("Invalid configuration in {}: {}", config_path.display(), e);
                std::process::exit(1);
            }
            eprintln!(
                "Failed to load config from {}: {}. Using default configuration.",
                config_path.display(),
                e
            );
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.seed {
        config.seed.enabled = true;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file   : {}", config_path.display());
        println!("   API address   : {}", config.server.address());
        println!("   Database      : {}", config.database.url);
        println!("   Log level     : {}", config.logging.level);
        println!("   Default radius: {} km", config.locator.default_radius_km);
        println!("   Seed demo data: {}", config.seed.enabled);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Start server ───────────────────────────────────────────
    let handle = match ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start: {}", e);
            return Err(e.into());
        }
    };

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.wait().await;

    Ok(())
}
