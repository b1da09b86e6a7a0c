//! Library entrypoint for PriceHawk.
//!
//! This file exists mainly to make controller tests easy (integration tests
//! under `tests/` can import the app state, routers, controllers, services).

pub mod config;
pub mod models;
pub mod store;

pub mod services;

pub mod events;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub store: store::Store,
    pub settings: config::Settings,
    pub scraper: services::scraper::ScraperClient,
    pub events_tx: tokio::sync::broadcast::Sender<String>,
}
