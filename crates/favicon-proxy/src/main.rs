use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use favicon_proxy::{config::Config, resolver::IconResolver, web::WebServer};

#[derive(Parser)]
#[command(name = "favicon-proxy")]
#[command(about = "A favicon resolution proxy with ordered source fallback")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("favicon_proxy={},tower_http=trace", cli.log_level)
    } else {
        format!("favicon_proxy={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting favicon-proxy v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from specified file
    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }

    // One HTTP client for every outbound provider call
    let http_client = reqwest::Client::builder()
        .user_agent(&config.resolver.user_agent)
        .build()?;

    let resolver = Arc::new(IconResolver::from_config(&config.resolver, http_client)?);
    info!(
        "Icon resolver initialized: sources={:?}, min_icon_bytes={}, placeholder={}",
        config.resolver.sources,
        config.resolver.min_icon_bytes,
        config
            .resolver
            .placeholder_url
            .as_deref()
            .unwrap_or("embedded"),
    );

    let web_server = WebServer::new(config, resolver)?;
    info!("Starting web server on {}", web_server.addr());

    web_server.serve().await
}
