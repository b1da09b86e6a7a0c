pub mod home_controller;
pub mod products_controller;
pub mod competitors_controller;
pub mod alerts_controller;
pub mod analytics_controller;
pub mod snapshot_controller;
pub mod scraper_controller;
