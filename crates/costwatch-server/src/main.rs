//! costwatchd - cloud spend anomaly detection service.
//!
//! Serves daily cost data, aggregate summaries, and z-score anomaly reports
//! over a small REST API. Data comes from the built-in mock source; cost
//! events can be pushed in over `/api/events`.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use costwatch_server::config::ServerConfig;
use costwatch_server::error::{ServerError, ServerResult};
use costwatch_server::server::Server;

/// Costwatch daemon CLI.
#[derive(Parser)]
#[command(name = "costwatchd")]
#[command(about = "Costwatch - cloud spend anomaly detection service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "COSTWATCH_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(short, long, env = "COSTWATCH_LISTEN_ADDR")]
    listen: Option<String>,

    /// Log level
    #[arg(long, env = "COSTWATCH_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "COSTWATCH_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> ServerResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load configuration, then apply CLI overrides
    let mut config =
        ServerConfig::load(cli.config.as_deref()).map_err(|e| ServerError::Config(e.to_string()))?;

    if let Some(listen) = cli.listen {
        config.http.listen_addr = listen
            .parse()
            .map_err(|e| ServerError::Config(format!("invalid listen address: {}", e)))?;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.http.listen_addr,
        "starting costwatchd"
    );

    Server::new(config).run().await
}
