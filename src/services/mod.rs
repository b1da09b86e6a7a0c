pub mod scraper;

pub mod products_service;
pub mod competitors_service;
pub mod alerts_service;
pub mod alert_engine;
pub mod analytics_service;
pub mod snapshot_service;
