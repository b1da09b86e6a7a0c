use axum::{Router, routing::post};

use crate::{AppState, controllers::scraper_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/scrape", post(scraper_controller::post_scrape))
}
