use marketplace::api::server::start_server;
use marketplace::config::MarketplaceConfig;
use marketplace::telemetry::init_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match MarketplaceConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    info!("Starting marketplace backend...");

    if let Err(e) = start_server(config).await {
        error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
