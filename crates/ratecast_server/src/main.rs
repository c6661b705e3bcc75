//! Ratecast Server
//!
//! REST API server for the interest-rate forecasting pipeline.

use clap::Parser;
use ratecast_server::config::{build_config, CliArgs as ConfigCliArgs};
use ratecast_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Ratecast Server - REST API for rate cleaning, forecasting and shocks
#[derive(Parser, Debug)]
#[command(name = "ratecast_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "RATECAST_SERVER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "RATECAST_SERVER_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RATECAST_LOG_LEVEL")]
    log_level: Option<String>,

    /// Dashboard theme served to the front-end
    #[arg(long, env = "RATECAST_THEME")]
    theme: Option<String>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            theme: args.theme,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Ratecast Server v{}", ratecast_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        theme = %config.theme,
        default_steps = %config.default_steps,
        "Server configuration loaded"
    );

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}
