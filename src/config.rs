use std::env;

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: String,
    pub host: String,
    pub port: u16,

    pub scrape_delay_min_ms: u64,
    pub scrape_delay_max_ms: u64,
}

pub fn load() -> Settings {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    let data_file = env::var("PRICEHAWK_DATA_FILE")
        .unwrap_or_else(|_| "data/pricehawk.json".to_string());

    let host = env::var("HOST")
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let scrape_delay_min_ms = env::var("SCRAPE_DELAY_MIN_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1000);

    let scrape_delay_max_ms = env::var("SCRAPE_DELAY_MAX_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(3000);

    Settings {
        data_file,
        host,
        port,
        scrape_delay_min_ms,
        scrape_delay_max_ms,
    }
}
