use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    #[serde(default = "default_retry_interval")]
    pub retry_interval_seconds: u64,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_symbol() -> String {
    "BTCUSDT".to_string()
}

fn default_endpoint() -> String {
    "https://api.binance.com/api/v3/ticker/price".to_string()
}

fn default_poll_interval() -> u64 {
    10
}

fn default_retry_interval() -> u64 {
    5
}

fn default_history_capacity() -> usize {
    360
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            endpoint: default_endpoint(),
            poll_interval_seconds: default_poll_interval(),
            retry_interval_seconds: default_retry_interval(),
            history_capacity: default_history_capacity(),
        }
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
