//! hello-service entry point.
//!
//! Parses the command line, loads configuration, initializes tracing, sets up
//! the Axum router and starts the HTTP server.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_service::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use hello_service::http::start_server;
use hello_service::{create_router, Error};

/// hello-service: a greeting and health-check HTTP service
#[derive(Parser, Debug)]
#[command(name = "hello-service", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "hello_service=debug,axum_server=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Address to bind, overrides http.host
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides http.port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Config is read before the subscriber exists so its log format applies.
    // A config error is reported once tracing is up, in the default format.
    let config_path = AppConfig::resolve_path(args.config.as_deref());
    let config = AppConfig::load_or_default(config_path.as_deref());
    let log_format = config
        .as_ref()
        .map(|c| c.logging.format)
        .unwrap_or_default();
    init_tracing(&log_filter, log_format);

    let result = match config {
        Ok(config) => run(args, config, config_path).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_filter: &str, format: LogFormat) {
    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(log_filter));
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn run(
    args: Args,
    mut config: AppConfig,
    config_path: Option<PathBuf>,
) -> Result<(), Error> {
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }

    let file = config_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(built-in defaults)".to_string());

    tracing::info!(
        file = %file,
        host = %config.http.host,
        port = config.http.port,
        shutdown_timeout_secs = config.http.shutdown_timeout_seconds,
        "Loaded configuration"
    );

    let app = create_router();

    start_server(app, &config).await
}
