mod analyzer;
mod config;
mod fetcher;
mod history;
mod model;
mod poller;

use analyzer::ThreePointAnalyzer;
use config::{AppConfig, load_config};
use fetcher::BinanceFetcher;
use poller::Poller;
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file; the file is optional, defaults cover everything
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error ({}), using defaults", e);
            AppConfig::default()
        }
    };
    info!(
        "Watching {} every {}s (retry after {}s)",
        config.symbol, config.poll_interval_seconds, config.retry_interval_seconds
    );

    let fetcher = match BinanceFetcher::new(&config) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    // Ctrl-C fires the stop signal so the loop can wind down cleanly
    let stop = Arc::new(Notify::new());
    let stop_handle = stop.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received.");
            stop_handle.notify_one();
        }
    });

    let poller = Poller::new(
        &config,
        Box::new(fetcher),
        Box::new(ThreePointAnalyzer::new()),
        stop,
    );

    info!("🚀 TrendWatcher started!");
    poller.run().await;
    info!("TrendWatcher stopped.");
}
