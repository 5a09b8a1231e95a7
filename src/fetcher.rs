use crate::config::AppConfig;
use crate::model::{FetchError, PriceSample, TickerResponse};

use reqwest::Client;

#[async_trait::async_trait]
pub trait PriceFetcher: Send + Sync {
    async fn fetch_price(&self) -> Result<PriceSample, FetchError>;
}

pub struct BinanceFetcher {
    client: Client,
    endpoint: String,
    symbol: String,
}

impl BinanceFetcher {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("TrendWatcher/0.1")
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            symbol: config.symbol.clone(),
        })
    }

    fn build_url(&self) -> String {
        format!("{}?symbol={}", self.endpoint, self.symbol)
    }
}

#[async_trait::async_trait]
impl PriceFetcher for BinanceFetcher {
    async fn fetch_price(&self) -> Result<PriceSample, FetchError> {
        let url = self.build_url();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let price = parse_price(&body)?;
        Ok(PriceSample::new(price))
    }
}

/// Extracts the string-encoded price field from a ticker response body.
/// Fails on non-JSON bodies, missing fields and non-numeric or negative prices.
pub fn parse_price(body: &str) -> Result<f64, FetchError> {
    let ticker: TickerResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Payload(e.to_string()))?;

    let price: f64 = ticker
        .price
        .parse()
        .map_err(|_| FetchError::Payload(format!("non-numeric price: {:?}", ticker.price)))?;

    if !price.is_finite() || price < 0.0 {
        return Err(FetchError::Payload(format!("invalid price value: {price}")));
    }

    Ok(price)
}
