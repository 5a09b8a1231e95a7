use crate::analyzer::TrendAnalyzer;
use crate::config::AppConfig;
use crate::fetcher::PriceFetcher;
use crate::history::PriceHistory;
use crate::model::{FetchError, Trend};

use std::sync::Arc;
use tokio::sync::Notify;
use tokio::time::{Duration, sleep};
use tracing::{info, warn};

/// The polling loop. Two states: polling and error-backoff, no terminal state
/// of its own — it runs until the stop signal fires.
pub struct Poller {
    fetcher: Box<dyn PriceFetcher>,
    analyzer: Box<dyn TrendAnalyzer + Send + Sync>,
    history: PriceHistory,
    symbol: String,
    poll_interval: Duration,
    retry_interval: Duration,
    stop: Arc<Notify>,
}

impl Poller {
    pub fn new(
        config: &AppConfig,
        fetcher: Box<dyn PriceFetcher>,
        analyzer: Box<dyn TrendAnalyzer + Send + Sync>,
        stop: Arc<Notify>,
    ) -> Self {
        Self {
            fetcher,
            analyzer,
            history: PriceHistory::new(config.history_capacity),
            symbol: config.symbol.clone(),
            poll_interval: Duration::from_secs(config.poll_interval_seconds),
            retry_interval: Duration::from_secs(config.retry_interval_seconds),
            stop,
        }
    }

    pub async fn run(mut self) {
        loop {
            let wait = match self.tick().await {
                Ok(_) => self.poll_interval,
                Err(e) => {
                    warn!("Fetch failed: {}", e);
                    self.retry_interval
                }
            };

            tokio::select! {
                _ = sleep(wait) => {}
                _ = self.stop.notified() => {
                    info!("Stop requested, shutting down after {} samples.", self.history.len());
                    break;
                }
            }
        }
    }

    /// One polling cycle: fetch, append, classify, report.
    async fn tick(&mut self) -> Result<Trend, FetchError> {
        let sample = self.fetcher.fetch_price().await?;
        self.history.push(sample);

        let trend = self.analyzer.classify(&self.history);
        println!("📈 Current {} price: {} USDT", self.symbol, sample.price);
        println!("{}", trend);
        println!("{}", "-".repeat(40));

        Ok(trend)
    }
}
