// Core structs: PriceSample, Trend, wire types, errors.
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A single observed price, recorded at fetch time.
#[derive(Debug, Clone, Copy)]
pub struct PriceSample {
    pub price: f64,
    pub fetched_at: DateTime<Utc>,
}

impl PriceSample {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            fetched_at: Utc::now(),
        }
    }
}

/// Wire shape of the ticker response. The price arrives string-encoded.
#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    #[serde(default)]
    pub symbol: String,
    pub price: String,
}

/// Three-point trend classification over the tail of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Collecting,
    Up,
    Down,
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Collecting => write!(f, "Collecting data..."),
            Trend::Up => write!(f, "⏫ UPTREND"),
            Trend::Down => write!(f, "⏬ DOWNTREND"),
            Trend::Neutral => write!(f, "⏸️ NEUTRAL"),
        }
    }
}

/// Single error surface for a poll cycle. Network, bad status and malformed
/// payload all trigger the same backoff-and-retry path.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(String),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    Payload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_response_matches_wire_shape() {
        let ticker: TickerResponse =
            serde_json::from_str(r#"{"symbol": "BTCUSDT", "price": "98765.43"}"#).unwrap();
        assert_eq!(ticker.symbol, "BTCUSDT");
        assert_eq!(ticker.price, "98765.43");
    }

    #[test]
    fn trend_labels() {
        assert_eq!(Trend::Collecting.to_string(), "Collecting data...");
        assert!(Trend::Up.to_string().contains("UPTREND"));
        assert!(Trend::Down.to_string().contains("DOWNTREND"));
        assert!(Trend::Neutral.to_string().contains("NEUTRAL"));
    }
}
