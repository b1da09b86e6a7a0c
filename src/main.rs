use std::net::SocketAddr;

use pricehawk::{AppState, config, routes, services::scraper::ScraperClient, store::Store};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = config::load();

    let store = Store::open(&settings.data_file);
    let scraper = ScraperClient::new(settings.scrape_delay_min_ms, settings.scrape_delay_max_ms);
    let (events_tx, _events_rx) = tokio::sync::broadcast::channel::<String>(16);

    let state = AppState {
        store,
        settings: settings.clone(),
        scraper,
        events_tx,
    };

    let app = routes::app(state);

    let addr = SocketAddr::from((settings.host.parse::<std::net::IpAddr>().unwrap(), settings.port));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
