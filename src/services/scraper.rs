//! Simulated competitor-price fetch.
//!
//! Stands in for real scraping: suspends the caller for a randomized delay,
//! then resolves with a generated quote. Never touches the store; callers
//! decide whether to feed the result into the products repository.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use tokio::time;

#[derive(Clone)]
pub struct ScraperClient {
    delay_min_ms: u64,
    delay_max_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    pub url: String,
    pub price: f64,
    pub currency: String,
    pub available: bool,
    pub last_updated: DateTime<Utc>,
    pub simulated: bool,
}

impl ScraperClient {
    pub fn new(delay_min_ms: u64, delay_max_ms: u64) -> Self {
        Self {
            delay_min_ms,
            delay_max_ms,
        }
    }

    pub async fn scrape_price(&self, url: &str) -> ScrapeResult {
        let delay = if self.delay_max_ms > self.delay_min_ms {
            rand::thread_rng().gen_range(self.delay_min_ms..=self.delay_max_ms)
        } else {
            self.delay_min_ms
        };

        if delay > 0 {
            time::sleep(Duration::from_millis(delay)).await;
        }

        let (price, available) = {
            let mut rng = rand::thread_rng();
            let price = (rng.gen_range(50.0..250.0) * 100.0_f64).round() / 100.0;
            (price, rng.gen_bool(0.9))
        };

        ScrapeResult {
            url: url.to_string(),
            price,
            currency: "USD".to_string(),
            available,
            last_updated: Utc::now(),
            simulated: true,
        }
    }
}
