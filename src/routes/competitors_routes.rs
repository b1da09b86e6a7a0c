use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{AppState, controllers::competitors_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/competitors", get(competitors_controller::get_competitors))
        .route("/competitors", post(competitors_controller::post_create_competitor))
        .route("/competitors/:id", get(competitors_controller::get_competitor))
        .route("/competitors/:id", put(competitors_controller::put_update_competitor))
        .route("/competitors/:id", delete(competitors_controller::delete_competitor))
}
