//! NFT marketplace analytics dashboard - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// NFT marketplace analytics dashboard
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Marketplace address to query (overrides the config file)
    #[arg(short, long)]
    address: Option<String>,

    /// Configuration file path (can also be set via NFTLYTICS_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// Render the detail view for the named NFT after each fetch
    #[arg(long)]
    inspect: Option<String>,

    /// Refresh every N seconds instead of exiting after one fetch
    #[arg(long)]
    watch: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    nftlytics_app::init_logging();

    info!("Starting nftlytics v{}", env!("CARGO_PKG_VERSION"));

    // Determine config path: CLI arg > NFTLYTICS_CONFIG env var > default
    let config_path = args
        .config
        .or_else(|| std::env::var("NFTLYTICS_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");

    let mut config = nftlytics_app::AppConfig::load(&config_path)?;
    if let Some(watch) = args.watch {
        config.watch_interval_secs = watch;
    }

    // CLI address wins over the config file
    let address = args
        .address
        .or_else(|| config.marketplace_address.clone())
        .unwrap_or_default();

    let app = nftlytics_app::Application::new(config, address, args.inspect)?;
    app.run().await?;

    Ok(())
}
